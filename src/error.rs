/// Business rejections. These never fail a command; their message is shown to
/// the customer as a transient notice and the session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{0} is not available right now")]
    ItemUnavailable(String),

    #[error("Cannot place a new order while one is processing")]
    OrderInProgress,

    #[error("Nothing yet. Choose an option before ordering")]
    EmptyOrder,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Menu item {0} not found")]
    UnknownItem(i64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown availability: {0}")]
    UnknownAvailability(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

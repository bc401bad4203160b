use crate::models::SessionView;
use crate::session::{OrderSession, PreparationTicket};
use std::sync::Mutex;
use std::time::Duration;

/// Waits out the preparation window for `ticket`, then reopens selection.
///
/// Returns `true` when this call moved the session back to Idle. There is no
/// way to cut the wait short.
pub async fn await_preparation(
    session: &Mutex<OrderSession>,
    ticket: PreparationTicket,
    delay: Duration,
) -> bool {
    tokio::time::sleep(delay).await;

    let mut session = session.lock().unwrap_or_else(|e| e.into_inner());
    session.finish_preparation(ticket)
}

/// Like [`await_preparation`], but yields the Idle view to publish when this
/// timer was the one that reopened selection.
pub async fn ready_view(
    session: &Mutex<OrderSession>,
    ticket: PreparationTicket,
    delay: Duration,
) -> Option<SessionView> {
    if !await_preparation(session, ticket, delay).await {
        return None;
    }

    let session = session.lock().unwrap_or_else(|e| e.into_inner());
    Some(session.view(None))
}

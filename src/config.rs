use crate::error::SessionError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "table-order.json";
pub const PREP_SECS_ENV: &str = "TABLE_ORDER_PREP_SECS";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub restaurant_name: String,
    pub table_label: String,
    /// How long a submitted order blocks new selections.
    pub preparation_secs: u64,
    pub pending_label: String,
    pub review_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "#BeeTee Bistro".to_string(),
            table_label: "Table 10".to_string(),
            preparation_secs: 10,
            pending_label: "Arriving in about 20 minutes".to_string(),
            review_url: "https://beeteebistro.com/review".to_string(),
        }
    }
}

impl SessionConfig {
    /// Reads `table-order.json` from `dir` if it exists, then applies the
    /// environment override for the preparation delay.
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let path = dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| SessionError::Config(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&raw)
                .map_err(|e| SessionError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            SessionConfig::default()
        };

        if let Ok(value) = std::env::var(PREP_SECS_ENV) {
            config.apply_prep_override(&value)?;
        }

        Ok(config)
    }

    pub fn apply_prep_override(&mut self, value: &str) -> Result<(), SessionError> {
        self.preparation_secs = value
            .trim()
            .parse()
            .map_err(|_| {
                SessionError::Config(format!(
                    "{PREP_SECS_ENV} must be whole seconds, got '{value}'"
                ))
            })?;
        Ok(())
    }

    pub fn preparation_delay(&self) -> Duration {
        Duration::from_secs(self.preparation_secs)
    }
}

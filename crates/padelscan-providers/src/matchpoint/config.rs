//! Matchpoint booking-grid configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for one Matchpoint booking grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchpointConfig {
    /// Venue name shown in reports.
    pub venue: String,
    /// Base URL of the Matchpoint instance.
    pub base_url: Url,
    /// Grid ("cuadro") identifier selecting the court group.
    pub cuadro_id: String,
    /// Fixed per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl MatchpointConfig {
    /// Default per-call timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

impl Default for MatchpointConfig {
    fn default() -> Self {
        Self {
            venue: "Padelshot Caen Mondeville".to_string(),
            base_url: Url::parse("https://padelshot-fr.matchpoint.com.es")
                .expect("valid default endpoint"),
            cuadro_id: "4".to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

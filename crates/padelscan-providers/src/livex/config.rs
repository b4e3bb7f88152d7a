//! LiveXperience calendar-widget configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the LiveXperience calendar endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LivexConfig {
    /// Venue name shown in reports.
    pub venue: String,
    /// Calendar endpoint answering the form POST.
    pub endpoint: Url,
    /// Platform sport identifier (2 = padel).
    pub sport_id: String,
    /// Site token copied from the booking page; rotated server-side.
    pub site_token: String,
    /// The `dd` anti-cache value the widget sends along.
    pub dd_value: String,
    /// Fixed per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl LivexConfig {
    /// Default per-call timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

impl Default for LivexConfig {
    fn default() -> Self {
        Self {
            venue: "R Padel Arena".to_string(),
            endpoint: Url::parse(
                "https://rpadel-arena.mymobileapp.fr/loadcalendrier_capsule_regroupe.asp",
            )
            .expect("valid default endpoint"),
            sport_id: "2".to_string(),
            site_token: "lecXpRemQM2psT2JTFPeZOoQz7msqGAkobZvWFEBJg4PKuTdkx-xKyOfFQ5cBTB0wnyYjdE9A9QLCSwAJ0X-HNPUyDe8F5L1S8Tb7-11122025112819785".to_string(),
            dd_value: "1765450577011".to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

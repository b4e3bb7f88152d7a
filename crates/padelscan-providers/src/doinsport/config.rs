//! Doinsport planning API configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// One Doinsport club to query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Display name used in reports and error strings.
    pub name: String,
    /// Club UUID on the platform.
    pub club_id: String,
    /// Opening bound sent as the `from` query parameter ("HH:MM" or
    /// "HH:MM:SS" — the API accepts both).
    #[serde(rename = "from", default = "default_open_from")]
    pub open_from: String,
    /// Closing bound sent as the `to` query parameter.
    #[serde(rename = "to", default = "default_open_to")]
    pub open_to: String,
}

fn default_open_from() -> String {
    "08:00".to_string()
}

fn default_open_to() -> String {
    "23:30".to_string()
}

/// Configuration shared by every Doinsport club query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoinsportConfig {
    /// Planning endpoint; the search date is appended as the last path
    /// segment.
    pub base_url: Url,
    /// Activity UUID (padel) the planning query is filtered on.
    pub activity_id: String,
    /// Booking type parameter.
    pub booking_type: String,
    /// Fixed per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Clubs to query, each becoming its own provider instance.
    pub clubs: Vec<ClubConfig>,
}

impl DoinsportConfig {
    /// Default per-call timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

impl Default for DoinsportConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://api-v3.doinsport.club/clubs/playgrounds/plannings/")
                .expect("valid default endpoint"),
            activity_id: "ce8c306e-224a-4f24-aa9d-6500580924dc".to_string(),
            booking_type: "unique".to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            clubs: vec![
                ClubConfig {
                    name: "Stadium Padel Caen".to_string(),
                    club_id: "cda49d78-525c-4f66-b6f8-43001c8a6ad7".to_string(),
                    open_from: "09:00".to_string(),
                    open_to: "23:30".to_string(),
                },
                ClubConfig {
                    name: "La Pommeraie".to_string(),
                    club_id: "0e5db60e-1735-4f5e-92f4-b457ac72f912".to_string(),
                    open_from: "09:00:00".to_string(),
                    open_to: "23:00:00".to_string(),
                },
                ClubConfig {
                    name: "Area Padel Caen".to_string(),
                    club_id: "b78e6114-96e3-4f20-82c8-cc213cdd47d3".to_string(),
                    open_from: "10:00".to_string(),
                    open_to: "23:00".to_string(),
                },
            ],
        }
    }
}

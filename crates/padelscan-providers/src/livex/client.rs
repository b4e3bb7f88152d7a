//! Form-POST client for the LiveXperience calendar widget.

use std::time::Duration;

use reqwest::Client;
use tracing::trace;

use crate::error::{ProviderError, ProviderResult, transport_error};

use super::config::LivexConfig;

const USER_AGENT: &str = "Mozilla/5.0 (padel-bot perso)";

/// Client posting the calendar form and returning the raw HTML fragment.
pub struct LivexClient {
    http: Client,
    config: LivexConfig,
}

impl LivexClient {
    /// Creates a new client with the configured timeout.
    pub fn new(config: LivexConfig) -> ProviderResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { http, config })
    }

    /// Posts the calendar form for one date (dd/mm/yyyy) and returns the
    /// HTML fragment.
    pub async fn fetch_calendar(&self, date_fr: &str) -> ProviderResult<String> {
        let origin = self.config.endpoint.origin().ascii_serialization();
        let referer = format!("{origin}/");
        trace!(endpoint = %self.config.endpoint, date = %date_fr, "requesting calendar");

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header("Accept", "text/html, */*; q=0.01")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Origin", origin)
            .header("Referer", referer)
            .form(&[
                ("myDate", date_fr),
                // the posted duration is a placeholder; filtering happens locally
                ("duree", "90"),
                ("id_sport", self.config.sport_id.as_str()),
                ("livexperience_site_token", self.config.site_token.as_str()),
                ("dd", self.config.dd_value.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::server(format!(
                "calendar request returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read calendar body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = LivexClient::new(LivexConfig::default());
        assert!(client.is_ok());
    }
}

//! HTTP client for the Doinsport planning API.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use tracing::trace;
use url::Url;

use crate::error::{ProviderError, ProviderResult, transport_error};

use super::config::{ClubConfig, DoinsportConfig};
use super::records::PlanningResponse;

const USER_AGENT: &str = "Mozilla/5.0 (padel-bot perso)";

/// JSON client for the planning endpoint.
pub struct DoinsportClient {
    http: Client,
    config: DoinsportConfig,
}

impl DoinsportClient {
    /// Creates a new client with the configured timeout.
    pub fn new(config: DoinsportConfig) -> ProviderResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { http, config })
    }

    /// Fetches one club's planning for the given date.
    pub async fn fetch_planning(
        &self,
        club: &ClubConfig,
        date: NaiveDate,
    ) -> ProviderResult<PlanningResponse> {
        let url = self.planning_url(date)?;
        trace!(%url, club = %club.name, "requesting planning");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json, text/plain, */*")
            .header("X-Locale", "fr")
            .header("Content-Language", "fr")
            .query(&[
                ("club.id", club.club_id.as_str()),
                ("from", club.open_from.as_str()),
                ("to", club.open_to.as_str()),
                ("activities.id", self.config.activity_id.as_str()),
                ("bookingType", self.config.booking_type.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::server(format!(
                "planning request returned {status}: {body}"
            )));
        }

        response.json().await.map_err(|e| {
            ProviderError::invalid_response(format!("planning decode failed: {e}"))
        })
    }

    fn planning_url(&self, date: NaiveDate) -> ProviderResult<Url> {
        self.config
            .base_url
            .join(&date.format("%Y-%m-%d").to_string())
            .map_err(|e| ProviderError::configuration(format!("invalid planning URL: {e}")))
    }
}

//! Session client for the Matchpoint booking grid.
//!
//! The data endpoint refuses calls without a short-lived key embedded in
//! the grid page, and the key is only honored within the cookie session
//! that fetched it. The client therefore keeps one cookie-enabled reqwest
//! client for both steps.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::error::{ProviderError, ProviderResult, transport_error};

use super::config::MatchpointConfig;
use super::records::{GridRequest, GridResponse};

const USER_AGENT: &str = "Mozilla/5.0";

static KEY_JSON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""key"\s*:\s*"([^"]+)""#).expect("valid key regex"));

static KEY_ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"key\s*[:=]\s*'([^']+)'").expect("valid key-assign regex"));

/// Cookie-carrying client for the two-step grid exchange.
pub struct MatchpointClient {
    http: Client,
    config: MatchpointConfig,
}

impl MatchpointClient {
    /// Creates a new client; the cookie store ties the key to the session.
    pub fn new(config: MatchpointConfig) -> ProviderResult<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { http, config })
    }

    /// Fetches the grid page and extracts the dynamic key.
    ///
    /// The bare page is tried first; when it carries no key the request is
    /// repeated with the cuadro id appended, which forces the booking
    /// script (and its key) into the page.
    pub async fn fetch_key(&self) -> ProviderResult<String> {
        let grid_url = self.grid_page_url()?;

        let html = self.get_html(grid_url.clone()).await?;
        if let Some(key) = extract_key(&html) {
            return Ok(key);
        }

        let mut hinted = grid_url;
        hinted.set_query(Some(&format!("idCuadro={}", self.config.cuadro_id)));
        debug!(url = %hinted, "grid page had no key, retrying with cuadro hint");

        let html = self.get_html(hinted).await?;
        extract_key(&html).ok_or_else(|| {
            ProviderError::token_acquisition("no booking key found in grid page")
        })
    }

    /// Posts the grid query for one date (dd/mm/yyyy) using the session key.
    pub async fn fetch_grid(&self, date_fr: &str, key: &str) -> ProviderResult<GridResponse> {
        let url = self
            .config
            .base_url
            .join("booking/srvc.aspx/ObtenerCuadro")
            .map_err(|e| ProviderError::configuration(format!("invalid grid URL: {e}")))?;
        let origin = self.config.base_url.origin().ascii_serialization();
        let referer = format!("{origin}/Booking/grid.aspx");
        trace!(%url, date = %date_fr, "requesting grid");

        let payload = GridRequest {
            cuadro_id: &self.config.cuadro_id,
            fecha: date_fr,
            key,
        };

        let response = self
            .http
            .post(url)
            .header("Accept", "application/json, text/javascript, */*; q=0.01")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Origin", origin)
            .header("Referer", referer)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::server(format!(
                "grid request returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(format!("grid decode failed: {e}")))
    }

    async fn get_html(&self, url: Url) -> ProviderResult<String> {
        let response = self
            .http
            .get(url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::server(format!(
                "grid page returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read grid page: {e}")))
    }

    fn grid_page_url(&self) -> ProviderResult<Url> {
        self.config
            .base_url
            .join("Booking/grid.aspx")
            .map_err(|e| ProviderError::configuration(format!("invalid grid page URL: {e}")))
    }
}

/// Searches the grid page for the dynamic key, quoted-JSON pattern first,
/// then the JS-assignment form.
pub(crate) fn extract_key(html: &str) -> Option<String> {
    if let Some(captures) = KEY_JSON_RE.captures(html) {
        return Some(captures[1].to_string());
    }
    KEY_ASSIGN_RE.captures(html).map(|c| c[1].to_string())
}

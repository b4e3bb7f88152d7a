//! LiveXperience availability provider.

use padelscan_core::{ClockTime, SearchQuery, Slot, VenueAvailability, sort_slots};
use tracing::debug;

use crate::error::ProviderResult;
use crate::provider::{AvailabilityProvider, BoxFuture};

use super::client::LivexClient;
use super::config::LivexConfig;
use super::parse::{extract_buttons, extract_duration_min};

/// Queries the LiveXperience calendar widget (single venue).
pub struct LivexProvider {
    client: LivexClient,
    venue: String,
}

impl LivexProvider {
    /// Creates the provider from its configuration.
    pub fn new(config: LivexConfig) -> ProviderResult<Self> {
        let venue = config.venue.clone();
        Ok(Self {
            client: LivexClient::new(config)?,
            venue,
        })
    }
}

impl AvailabilityProvider for LivexProvider {
    fn name(&self) -> &str {
        "livex"
    }

    fn display_name(&self) -> String {
        self.venue.clone()
    }

    fn fetch_availability<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, ProviderResult<VenueAvailability>> {
        Box::pin(async move {
            let html = self.client.fetch_calendar(&query.date_fr()).await?;
            let slots = collect_slots(&html, query);
            debug!(venue = %self.venue, count = slots.len(), "normalized livex slots");

            Ok(VenueAvailability {
                venue: self.venue.clone(),
                provider: self.name().to_string(),
                slots,
            })
        })
    }
}

/// Applies the shared acceptance rule over the widget's slot buttons.
///
/// Buttons without a 4-digit `data-heure` token or a recoverable positive
/// duration are discarded. The slot label is the button's `<h1>` heading,
/// empty when absent.
pub(crate) fn collect_slots(html: &str, query: &SearchQuery) -> Vec<Slot> {
    let filter = query.slot_query();
    let mut slots = Vec::new();

    for button in extract_buttons(html) {
        let Some(token) = button.start_token.as_deref() else {
            continue;
        };
        let Ok(start) = ClockTime::from_compact(token) else {
            continue;
        };
        let Some(duration_min) = extract_duration_min(&button) else {
            continue;
        };
        if !filter.admits(start, duration_min) {
            continue;
        }

        let label = button.heading.clone().unwrap_or_default();
        slots.push(Slot::new(start, duration_min).with_label(label));
    }

    sort_slots(&mut slots);
    slots
}

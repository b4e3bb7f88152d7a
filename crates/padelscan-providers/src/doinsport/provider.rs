//! Doinsport availability provider, one instance per configured club.

use padelscan_core::{ClockTime, SearchQuery, Slot, VenueAvailability, sort_slots};
use tracing::debug;

use crate::error::ProviderResult;
use crate::provider::{AvailabilityProvider, BoxFuture};

use super::client::DoinsportClient;
use super::config::{ClubConfig, DoinsportConfig};
use super::records::PlanningResponse;

/// Fallback court label when the API omits the name.
const UNNAMED_COURT: &str = "Terrain ?";

/// Queries one Doinsport club and normalizes its planning.
pub struct DoinsportProvider {
    client: DoinsportClient,
    club: ClubConfig,
}

impl DoinsportProvider {
    /// Creates a provider for a single club.
    pub fn new(config: DoinsportConfig, club: ClubConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: DoinsportClient::new(config)?,
            club,
        })
    }
}

impl AvailabilityProvider for DoinsportProvider {
    fn name(&self) -> &str {
        "doinsport"
    }

    fn display_name(&self) -> String {
        format!("Doinsport – {}", self.club.name)
    }

    fn fetch_availability<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, ProviderResult<VenueAvailability>> {
        Box::pin(async move {
            let planning = self.client.fetch_planning(&self.club, query.date).await?;
            let slots = collect_slots(&planning, query);
            debug!(club = %self.club.name, count = slots.len(), "normalized doinsport slots");

            Ok(VenueAvailability {
                venue: self.club.name.clone(),
                provider: self.name().to_string(),
                slots,
            })
        })
    }
}

/// Applies the shared acceptance rule over the nested planning records.
///
/// Price options carry the duration in seconds (minutes via integer
/// division); the slot start is "HH:MM" or "HH:MM:SS". Records with a
/// missing or unparseable start, a non-bookable option, or no duration are
/// skipped.
pub(crate) fn collect_slots(planning: &PlanningResponse, query: &SearchQuery) -> Vec<Slot> {
    let filter = query.slot_query();
    let mut slots = Vec::new();

    for court in &planning.courts {
        let court_name = court.name.as_deref().unwrap_or(UNNAMED_COURT);
        for activity in court.activities.iter() {
            for record in &activity.slots {
                let Some(start_raw) = record.start_at.as_deref() else {
                    continue;
                };
                let Ok(start) = ClockTime::from_hhmm(start_raw) else {
                    continue;
                };
                for price in &record.prices {
                    if !price.bookable {
                        continue;
                    }
                    let Some(seconds) = price.duration else {
                        continue;
                    };
                    let Ok(duration_min) = u32::try_from(seconds / 60) else {
                        continue;
                    };
                    if !filter.admits(start, duration_min) {
                        continue;
                    }

                    let mut slot = Slot::new(start, duration_min).with_court(court_name);
                    if let Some(cents) = price.price_per_participant {
                        slot = slot.with_price_per_participant(cents);
                    }
                    if let Some(count) = price.participant_count {
                        slot = slot.with_participant_count(count);
                    }
                    slots.push(slot);
                }
            }
        }
    }

    sort_slots(&mut slots);
    slots
}

//! Matchpoint availability provider.
//!
//! The only normalizer with a second-pass exclusion set: candidate
//! generation from the fixed windows, the shared window/duration filter,
//! then removal of candidates overlapping an existing reservation.

use padelscan_core::{BusyInterval, ClockTime, SearchQuery, Slot, VenueAvailability, sort_slots};
use tracing::debug;

use crate::error::ProviderResult;
use crate::provider::{AvailabilityProvider, BoxFuture};

use super::client::MatchpointClient;
use super::config::MatchpointConfig;
use super::records::{GridResponse, IntervalRecord};

/// Fallback court label when the grid omits the column name.
const UNNAMED_COURT: &str = "Terrain ?";

/// Queries one Matchpoint booking grid.
pub struct MatchpointProvider {
    client: MatchpointClient,
    venue: String,
}

impl MatchpointProvider {
    /// Creates the provider from its configuration.
    pub fn new(config: MatchpointConfig) -> ProviderResult<Self> {
        let venue = config.venue.clone();
        Ok(Self {
            client: MatchpointClient::new(config)?,
            venue,
        })
    }
}

impl AvailabilityProvider for MatchpointProvider {
    fn name(&self) -> &str {
        "matchpoint"
    }

    fn display_name(&self) -> String {
        self.venue.clone()
    }

    fn fetch_availability<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, ProviderResult<VenueAvailability>> {
        Box::pin(async move {
            let key = self.client.fetch_key().await?;
            let grid = self.client.fetch_grid(&query.date_fr(), &key).await?;
            let slots = collect_slots(&grid, query);
            debug!(venue = %self.venue, count = slots.len(), "normalized matchpoint slots");

            Ok(VenueAvailability {
                venue: self.venue.clone(),
                provider: self.name().to_string(),
                slots,
            })
        })
    }
}

/// Applies the shared acceptance rule per column, then drops candidates
/// overlapping a reservation.
///
/// Fixed windows with missing, unparseable, or inverted bounds are skipped;
/// the candidate duration is the end minus start difference.
pub(crate) fn collect_slots(grid: &GridResponse, query: &SearchQuery) -> Vec<Slot> {
    let filter = query.slot_query();
    let mut slots = Vec::new();

    for column in &grid.d.columns {
        let court = column.court.as_deref().unwrap_or(UNNAMED_COURT);
        let busy = busy_intervals(&column.reservations);

        for window in &column.fixed_windows {
            let Some((start, end)) = parse_interval(window) else {
                continue;
            };
            let duration_min = u32::from(end.minutes() - start.minutes());
            if !filter.admits(start, duration_min) {
                continue;
            }
            if busy.iter().any(|b| b.overlaps(start, end)) {
                continue;
            }
            slots.push(Slot::new(start, duration_min).with_court(court));
        }
    }

    sort_slots(&mut slots);
    slots
}

/// Parses a record's bounds, rejecting missing, malformed, or inverted
/// pairs.
fn parse_interval(record: &IntervalRecord) -> Option<(ClockTime, ClockTime)> {
    let start = ClockTime::from_hhmm(record.start_str()?).ok()?;
    let end = ClockTime::from_hhmm(record.end_str()?).ok()?;
    (end > start).then_some((start, end))
}

fn busy_intervals(records: &[IntervalRecord]) -> Vec<BusyInterval> {
    records
        .iter()
        .filter_map(parse_interval)
        .filter_map(|(start, end)| BusyInterval::new(start, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use padelscan_core::{DurationFilter, SearchWindow};

    fn query(from: &str, to: &str, durations: &[i64]) -> SearchQuery {
        SearchQuery::new(
            NaiveDate::from_ymd_opt(2025, 12, 12).unwrap(),
            SearchWindow::new(
                ClockTime::from_hhmm(from).unwrap(),
                ClockTime::from_hhmm(to).unwrap(),
            ),
            DurationFilter::from_minutes(durations.iter().copied()),
        )
    }

    fn grid(json: &str) -> GridResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn busy_interval_excludes_overlapping_candidate() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "TextoPrincipal": "Pista 1",
                        "HorariosFijos": [{"StrHoraInicio": "09:00", "StrHoraFin": "10:30"}],
                        "Ocupaciones": [{"StrHoraInicio": "09:30", "StrHoraFin": "10:00"}]
                    }]
                }
            }"#,
        );

        assert!(collect_slots(&grid, &query("09:00", "12:00", &[])).is_empty());
    }

    #[test]
    fn later_window_clears_the_same_reservation() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "TextoPrincipal": "Pista 1",
                        "HorariosFijos": [{"StrHoraInicio": "10:30", "StrHoraFin": "12:00"}],
                        "Ocupaciones": [{"StrHoraInicio": "09:30", "StrHoraFin": "10:00"}]
                    }]
                }
            }"#,
        );

        let slots = collect_slots(&grid, &query("10:30", "12:00", &[]));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start.to_string(), "10:30");
        assert_eq!(slots[0].duration_min, 90);
        assert_eq!(slots[0].court.as_deref(), Some("Pista 1"));
    }

    #[test]
    fn touching_reservation_does_not_exclude() {
        // reservation ends exactly at the candidate start
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "HorariosFijos": [{"StrHoraInicio": "11:00", "StrHoraFin": "12:00"}],
                        "Ocupaciones": [{"StrHoraInicio": "10:00", "StrHoraFin": "11:00"}]
                    }]
                }
            }"#,
        );

        assert_eq!(collect_slots(&grid, &query("11:00", "13:00", &[])).len(), 1);
    }

    #[test]
    fn inverted_or_malformed_windows_rejected() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "HorariosFijos": [
                            {"StrHoraInicio": "12:00", "StrHoraFin": "10:30"},
                            {"StrHoraInicio": "10:30", "StrHoraFin": "10:30"},
                            {"StrHoraFin": "12:00"},
                            {"StrHoraInicio": "bogus", "StrHoraFin": "12:00"}
                        ],
                        "Ocupaciones": []
                    }]
                }
            }"#,
        );

        assert!(collect_slots(&grid, &query("10:30", "13:00", &[])).is_empty());
    }

    #[test]
    fn malformed_reservations_are_ignored_not_blocking() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "HorariosFijos": [{"StrHoraInicio": "10:30", "StrHoraFin": "12:00"}],
                        "Ocupaciones": [
                            {"StrHoraInicio": "11:00"},
                            {"StrHoraInicio": "12:00", "StrHoraFin": "11:00"}
                        ]
                    }]
                }
            }"#,
        );

        assert_eq!(collect_slots(&grid, &query("10:30", "13:00", &[])).len(), 1);
    }

    #[test]
    fn display_fields_preferred_for_bounds() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "HorariosFijos": [{
                            "StrHoraInicio": "00:00",
                            "StrHoraInicioMostrar": "10:30",
                            "StrHoraFin": "00:00",
                            "StrHoraFinMostrar": "12:00"
                        }],
                        "Ocupaciones": []
                    }]
                }
            }"#,
        );

        let slots = collect_slots(&grid, &query("10:30", "12:00", &[90]));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn duration_filter_applies_to_derived_duration() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [{
                        "HorariosFijos": [{"StrHoraInicio": "10:30", "StrHoraFin": "12:00"}],
                        "Ocupaciones": []
                    }]
                }
            }"#,
        );

        // derived duration is 90
        assert!(collect_slots(&grid, &query("10:30", "13:00", &[60])).is_empty());
        assert_eq!(collect_slots(&grid, &query("10:30", "13:00", &[90])).len(), 1);
    }

    #[test]
    fn reservations_are_scoped_to_their_column() {
        let grid = grid(
            r#"{
                "d": {
                    "Columnas": [
                        {
                            "TextoPrincipal": "Pista 1",
                            "HorariosFijos": [{"StrHoraInicio": "10:30", "StrHoraFin": "12:00"}],
                            "Ocupaciones": [{"StrHoraInicio": "10:30", "StrHoraFin": "11:00"}]
                        },
                        {
                            "TextoPrincipal": "Pista 2",
                            "HorariosFijos": [{"StrHoraInicio": "10:30", "StrHoraFin": "12:00"}],
                            "Ocupaciones": []
                        }
                    ]
                }
            }"#,
        );

        let slots = collect_slots(&grid, &query("10:30", "12:00", &[]));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].court.as_deref(), Some("Pista 2"));
    }
}

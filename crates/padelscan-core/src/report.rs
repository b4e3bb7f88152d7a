//! Search input echo and aggregated results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::{DurationFilter, SlotQuery};
use crate::slot::Slot;
use crate::time::SearchWindow;

/// The caller's search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Day to search.
    pub date: NaiveDate,
    /// Time range slots must fit into.
    pub window: SearchWindow,
    /// Accepted session durations.
    pub durations: DurationFilter,
}

impl SearchQuery {
    /// Creates a new search query.
    pub fn new(date: NaiveDate, window: SearchWindow, durations: DurationFilter) -> Self {
        Self {
            date,
            window,
            durations,
        }
    }

    /// The date formatted the way the French booking platforms expect.
    pub fn date_fr(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// The acceptance rule for this search.
    pub fn slot_query(&self) -> SlotQuery {
        SlotQuery::new(self.window, self.durations.clone())
    }
}

/// One venue's filtered, ordered slot list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueAvailability {
    /// Human-readable venue (club) name.
    pub venue: String,
    /// Which provider backend produced this entry.
    pub provider: String,
    /// Slots ordered by (start, duration); empty when nothing matched.
    pub slots: Vec<Slot>,
}

/// The tagged result of one provider attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// The provider answered; its venue entry goes into the report.
    Available(VenueAvailability),
    /// The provider failed; only an error string reaches the report.
    Failed {
        /// Human-readable provider label.
        provider: String,
        /// What went wrong.
        message: String,
    },
}

/// Everything one search produced.
///
/// An erroring provider has no venue entry; a venue with an empty `slots`
/// list answered but had no matches. The two states are distinguishable by
/// construction. Reports are built fresh per search and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Echoed search date.
    pub date: NaiveDate,
    /// Echoed search window.
    pub window: SearchWindow,
    /// Echoed duration filter, sorted ascending; empty means "any".
    pub durations: Vec<u32>,
    /// One entry per provider that answered, in provider order.
    pub venues: Vec<VenueAvailability>,
    /// One string per provider that failed, each naming its provider.
    pub errors: Vec<String>,
}

impl SearchReport {
    /// Folds tagged provider outcomes into a report, preserving order.
    pub fn collect(query: &SearchQuery, outcomes: Vec<ProviderOutcome>) -> Self {
        let mut venues = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                ProviderOutcome::Available(venue) => venues.push(venue),
                ProviderOutcome::Failed { provider, message } => {
                    errors.push(format!("{provider}: {message}"));
                }
            }
        }
        Self {
            date: query.date,
            window: query.window,
            durations: query.durations.as_sorted(),
            venues,
            errors,
        }
    }

    /// True when every provider answered.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

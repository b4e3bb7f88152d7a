//! The shared slot-acceptance rule.
//!
//! Every provider normalizer funnels its raw records through
//! [`SlotQuery::admits`]; only the field extraction differs per platform.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time::{ClockTime, SearchWindow};

/// The set of session durations (in minutes) the caller will accept.
///
/// An empty filter accepts any duration. Non-positive inputs are discarded
/// and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationFilter(BTreeSet<u32>);

impl DurationFilter {
    /// A filter that accepts any duration.
    pub fn any() -> Self {
        Self::default()
    }

    /// Builds a filter from caller input, discarding non-positive values.
    pub fn from_minutes<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Self(
            values
                .into_iter()
                .filter_map(|v| u32::try_from(v).ok())
                .filter(|&v| v > 0)
                .collect(),
        )
    }

    /// Whether `duration_min` passes the filter.
    pub fn allows(&self, duration_min: u32) -> bool {
        self.0.is_empty() || self.0.contains(&duration_min)
    }

    /// True when no duration constraint is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted view of the accepted durations, echoed back in reports.
    pub fn as_sorted(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }
}

/// A search window plus duration filter, evaluating the acceptance rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    /// Window the slot must fit into.
    pub window: SearchWindow,
    /// Accepted durations.
    pub durations: DurationFilter,
}

impl SlotQuery {
    /// Creates a new slot query.
    pub fn new(window: SearchWindow, durations: DurationFilter) -> Self {
        Self { window, durations }
    }

    /// The shared acceptance rule, evaluated independently per raw record.
    ///
    /// A candidate is admitted when it starts exactly at the window start
    /// (slots starting later in the window are deliberately invisible), its
    /// duration passes the filter, and it ends at or before the window end.
    pub fn admits(&self, start: ClockTime, duration_min: u32) -> bool {
        start == self.window.start
            && self.durations.allows(duration_min)
            && u32::from(start.minutes()) + duration_min <= u32::from(self.window.end.minutes())
    }
}

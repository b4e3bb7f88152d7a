//! Normalized availability slots.

use serde::{Deserialize, Serialize};

use crate::time::ClockTime;

/// A single bookable time interval for one court, normalized across
/// providers.
///
/// Provider-specific extras are optional; each normalizer fills what its
/// platform exposes (court name and price for the structured APIs, a
/// free-text label for the markup-derived one). A slot is constructed once
/// per qualifying raw record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start; serialized and displayed as "HH:MM".
    pub start: ClockTime,
    /// Session length in minutes.
    pub duration_min: u32,
    /// Court (terrain) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    /// Per-participant price in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_participant: Option<u32>,
    /// Number of participants the price applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<u32>,
    /// Free-text label taken from the provider's markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Slot {
    /// Creates a slot with the two mandatory fields.
    pub fn new(start: ClockTime, duration_min: u32) -> Self {
        Self {
            start,
            duration_min,
            court: None,
            price_per_participant: None,
            participant_count: None,
            label: None,
        }
    }

    /// Builder method to set the court name.
    pub fn with_court(mut self, court: impl Into<String>) -> Self {
        self.court = Some(court.into());
        self
    }

    /// Builder method to set the per-participant price in cents.
    pub fn with_price_per_participant(mut self, cents: u32) -> Self {
        self.price_per_participant = Some(cents);
        self
    }

    /// Builder method to set the participant count.
    pub fn with_participant_count(mut self, count: u32) -> Self {
        self.participant_count = Some(count);
        self
    }

    /// Builder method to set the free-text label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Ordering key: (start, duration). No other secondary key.
    pub fn sort_key(&self) -> (u16, u32) {
        (self.start.minutes(), self.duration_min)
    }
}

/// Sorts slots ascending by (start, duration); ties break by duration only.
pub fn sort_slots(slots: &mut [Slot]) {
    slots.sort_by_key(Slot::sort_key);
}

//! Doinsport planning provider.
//!
//! Doinsport exposes a structured JSON planning API (Hydra collection of
//! playgrounds, each with activities, slots, and bookable price options).
//! One [`DoinsportProvider`] instance is created per configured club so one
//! club's failure never blocks the others.

mod client;
mod config;
mod records;
mod provider;

pub use client::DoinsportClient;
pub use config::{ClubConfig, DoinsportConfig};
pub use provider::DoinsportProvider;
pub use records::{ActivityList, ActivityRecord, CourtRecord, PlanningResponse, PriceRecord, SlotRecord};

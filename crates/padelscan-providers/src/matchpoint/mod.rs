//! Matchpoint booking-grid provider.
//!
//! The platform serves a booking grid whose data endpoint requires a
//! short-lived key embedded in the grid page; key retrieval and the data
//! call share one cookie session. Each grid column is a physical court with
//! fixed candidate windows ("HorariosFijos") and existing reservations
//! ("Ocupaciones"); candidates overlapping a reservation are excluded.

mod client;
mod config;
mod records;
mod provider;

pub use client::MatchpointClient;
pub use config::MatchpointConfig;
pub use provider::MatchpointProvider;
pub use records::{ColumnRecord, GridPayload, GridResponse, IntervalRecord};

//! AvailabilityProvider trait and platform implementations.
//!
//! This crate provides the fetch-and-normalize layer between the booking
//! platforms and the core filtering types:
//!
//! - [`AvailabilityProvider`] - The trait every venue backend implements
//! - [`Aggregator`] - Sequential search over the configured providers
//! - [`ProviderError`] - Error types for provider operations
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐  ┌──────────────────┐  ┌─────────────────┐
//! │ Doinsport API  │  │ LiveXperience    │  │ Matchpoint grid │
//! │ (JSON, 3 clubs)│  │ (HTML fragment)  │  │ (key + JSON)    │
//! └───────┬────────┘  └────────┬─────────┘  └────────┬────────┘
//!         │                    │                     │
//!         ▼                    ▼                     ▼
//! ┌────────────────┐  ┌──────────────────┐  ┌─────────────────┐
//! │ DoinsportProv. │  │ LivexProvider    │  │ MatchpointProv. │
//! └───────┬────────┘  └────────┬─────────┘  └────────┬────────┘
//!         │       AvailabilityProvider               │
//!         └──────────────┬────────────┬──────────────┘
//!                        ▼            │
//!                  ┌────────────┐     │  one after another,
//!                  │ Aggregator │◄────┘  failures downgraded
//!                  └─────┬──────┘        to error strings
//!                        ▼
//!                  SearchReport
//! ```
//!
//! Each provider runs the same acceptance rule from `padelscan-core`; only
//! the field extraction differs per platform.

pub mod aggregate;
pub mod config;
pub mod doinsport;
pub mod error;
pub mod livex;
pub mod matchpoint;
pub mod provider;

pub use aggregate::Aggregator;
pub use config::ProvidersConfig;
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use provider::{AvailabilityProvider, BoxFuture, ErrorProvider};

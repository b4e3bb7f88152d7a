//! LiveXperience (mymobileapp.fr) calendar-widget provider.
//!
//! The platform answers a form POST with an HTML fragment of time-slot
//! buttons. Start times sit in a `data-heure` attribute as a compact "HHMM"
//! token; the duration has to be recovered from the `onclick` handler or,
//! failing that, from a "NN mn" marker in the button text.

mod client;
mod config;
mod parse;
mod provider;

pub use client::LivexClient;
pub use config::LivexConfig;
pub use parse::RawSlotButton;
pub use provider::LivexProvider;

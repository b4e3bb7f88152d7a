//! Sequential search across all configured providers.

use padelscan_core::{ProviderOutcome, SearchQuery, SearchReport};
use tracing::{debug, warn};

use crate::config::ProvidersConfig;
use crate::doinsport::DoinsportProvider;
use crate::livex::LivexProvider;
use crate::matchpoint::MatchpointProvider;
use crate::provider::{AvailabilityProvider, ErrorProvider};

/// Drives every configured provider, strictly one after another, and folds
/// the tagged outcomes into a report.
///
/// A provider failure is downgraded to an error string tagged with the
/// provider's label; the remaining providers are always attempted. There
/// are no retries: a total failure of every provider still yields a
/// well-formed report, one error per provider.
pub struct Aggregator {
    providers: Vec<Box<dyn AvailabilityProvider>>,
}

impl Aggregator {
    /// Creates an aggregator over an explicit provider list.
    pub fn new(providers: Vec<Box<dyn AvailabilityProvider>>) -> Self {
        Self { providers }
    }

    /// Builds the standard line-up from configuration: one Doinsport
    /// instance per club, then LiveXperience, then Matchpoint.
    ///
    /// A provider that fails to construct is replaced by an error
    /// placeholder so the failure lands in the search report instead of
    /// aborting startup.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let mut providers: Vec<Box<dyn AvailabilityProvider>> = Vec::new();

        for club in &config.doinsport.clubs {
            let display = format!("Doinsport – {}", club.name);
            match DoinsportProvider::new(config.doinsport.clone(), club.clone()) {
                Ok(provider) => providers.push(Box::new(provider)),
                Err(error) => {
                    providers.push(Box::new(ErrorProvider::new("doinsport", display, error)));
                }
            }
        }

        match LivexProvider::new(config.livex.clone()) {
            Ok(provider) => providers.push(Box::new(provider)),
            Err(error) => providers.push(Box::new(ErrorProvider::new(
                "livex",
                config.livex.venue.clone(),
                error,
            ))),
        }

        match MatchpointProvider::new(config.matchpoint.clone()) {
            Ok(provider) => providers.push(Box::new(provider)),
            Err(error) => providers.push(Box::new(ErrorProvider::new(
                "matchpoint",
                config.matchpoint.venue.clone(),
                error,
            ))),
        }

        Self::new(providers)
    }

    /// Number of configured providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Runs the search, one provider after another.
    pub async fn search(&self, query: &SearchQuery) -> SearchReport {
        let mut outcomes = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let label = provider.display_name();
            match provider.fetch_availability(query).await {
                Ok(venue) => {
                    debug!(provider = %label, slots = venue.slots.len(), "provider answered");
                    outcomes.push(ProviderOutcome::Available(venue));
                }
                Err(error) => {
                    warn!(provider = %label, error = %error, "provider failed");
                    outcomes.push(ProviderOutcome::Failed {
                        provider: label,
                        message: error.message().to_string(),
                    });
                }
            }
        }

        SearchReport::collect(query, outcomes)
    }
}

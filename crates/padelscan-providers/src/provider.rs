//! AvailabilityProvider trait definition.
//!
//! One implementation per queryable venue backend. Providers fetch raw
//! availability from their platform, run it through the shared acceptance
//! rule, and return the ordered slot list for a single venue.

use std::future::Future;
use std::pin::Pin;

use padelscan_core::{SearchQuery, VenueAvailability};

use crate::error::{ProviderError, ProviderResult};

/// A boxed future for async trait methods, keeping the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One queryable venue backend.
///
/// Implementations hold no state across searches: every call to
/// [`AvailabilityProvider::fetch_availability`] is a self-contained fetch
/// and normalize pass over caller-supplied inputs.
pub trait AvailabilityProvider: Send + Sync {
    /// Short machine label, e.g. "doinsport".
    fn name(&self) -> &str;

    /// Human-readable label used to tag errors, e.g. "Doinsport – La Pommeraie".
    fn display_name(&self) -> String;

    /// Fetches and normalizes availability for the query.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport, decoding, or token failures.
    /// The aggregator downgrades any error to a report string; nothing here
    /// should panic on malformed upstream data.
    fn fetch_availability<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, ProviderResult<VenueAvailability>>;
}

/// A provider that always reports the same failure.
///
/// Used when a provider cannot be constructed (bad configuration), so the
/// failure surfaces in the search report instead of aborting startup.
#[derive(Debug)]
pub struct ErrorProvider {
    name: String,
    display_name: String,
    error: ProviderError,
}

impl ErrorProvider {
    /// Creates a new error provider.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        error: ProviderError,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            error,
        }
    }
}

impl AvailabilityProvider for ErrorProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn fetch_availability<'a>(
        &'a self,
        _query: &'a SearchQuery,
    ) -> BoxFuture<'a, ProviderResult<VenueAvailability>> {
        // ProviderError is not Clone; rebuild it from its parts
        let error =
            ProviderError::new(self.error.code(), self.error.message()).with_provider(&self.name);
        Box::pin(async move { Err(error) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use padelscan_core::{ClockTime, DurationFilter, SearchWindow};

    fn query() -> SearchQuery {
        let start = ClockTime::from_hhmm("18:00").unwrap();
        let end = ClockTime::from_hhmm("19:30").unwrap();
        SearchQuery::new(
            NaiveDate::from_ymd_opt(2025, 12, 12).unwrap(),
            SearchWindow::new(start, end),
            DurationFilter::any(),
        )
    }

    #[tokio::test]
    async fn error_provider_always_fails() {
        let provider = ErrorProvider::new(
            "livex",
            "R Padel Arena",
            ProviderError::configuration("missing site token"),
        );

        assert_eq!(provider.name(), "livex");
        assert_eq!(provider.display_name(), "R Padel Arena");

        let result = provider.fetch_availability(&query()).await;
        let err = result.unwrap_err();
        assert_eq!(err.message(), "missing site token");
        assert_eq!(err.provider(), Some("livex"));
    }
}

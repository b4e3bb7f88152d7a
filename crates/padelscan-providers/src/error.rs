//! Error types for availability-provider operations.
//!
//! Every failure a provider can produce is downgraded to an error string at
//! the aggregation boundary; the typed form exists so clients and tests can
//! still distinguish the categories.

use std::fmt;

use thiserror::Error;

/// High-level classification of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// Connection failed, request timed out, DNS or TLS trouble.
    Network,
    /// The provider answered with a non-success HTTP status.
    Server,
    /// The response body did not have the expected shape.
    InvalidResponse,
    /// The preliminary token/key fetch did not yield a usable credential.
    TokenAcquisition,
    /// Missing or invalid provider configuration.
    Configuration,
}

impl ProviderErrorCode {
    /// Returns a machine-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Server => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::TokenAcquisition => "token_acquisition_failed",
            Self::Configuration => "configuration_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error from fetching or decoding one provider's availability.
#[derive(Debug, Error)]
pub struct ProviderError {
    /// The error code categorizing this error.
    code: ProviderErrorCode,
    /// A human-readable message describing the error.
    message: String,
    /// The provider that generated this error.
    provider: Option<String>,
    /// The underlying cause, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Creates a new provider error with the given code and message.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider: None,
            source: None,
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Network, message)
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Server, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InvalidResponse, message)
    }

    /// Creates a token-acquisition error.
    pub fn token_acquisition(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::TokenAcquisition, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Configuration, message)
    }

    /// Sets the provider name for this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the provider name, if set.
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Maps a reqwest transport failure onto a provider error.
pub(crate) fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::network("request timed out").with_source(err)
    } else if err.is_connect() {
        ProviderError::network(format!("connection failed: {err}"))
    } else {
        ProviderError::network(format!("request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_names() {
        assert_eq!(ProviderErrorCode::Network.as_str(), "network_error");
        assert_eq!(
            ProviderErrorCode::TokenAcquisition.as_str(),
            "token_acquisition_failed"
        );
    }

    #[test]
    fn provider_error_creation() {
        let err = ProviderError::invalid_response("missing field");
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
        assert_eq!(err.message(), "missing field");
        assert!(err.provider().is_none());
    }

    #[test]
    fn provider_error_display_includes_label() {
        let err = ProviderError::server("returned 502").with_provider("matchpoint");
        let display = format!("{}", err);
        assert!(display.contains("[matchpoint]"));
        assert!(display.contains("server_error"));
        assert!(display.contains("returned 502"));
    }

    #[test]
    fn provider_error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("boom");
        let err = ProviderError::network("fetch failed").with_source(io_err);
        assert!(err.source().is_some());
    }
}

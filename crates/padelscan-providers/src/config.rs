//! Combined provider configuration.

use serde::{Deserialize, Serialize};

use crate::doinsport::DoinsportConfig;
use crate::livex::LivexConfig;
use crate::matchpoint::MatchpointConfig;

/// Configuration for the whole provider line-up.
///
/// `Default` carries the deployment the tool was built for; a TOML file can
/// override any part. Nothing reads process-wide state, so tests can build
/// arbitrary configurations without side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Doinsport planning API (multi-club).
    pub doinsport: DoinsportConfig,
    /// LiveXperience calendar widget.
    pub livex: LivexConfig,
    /// Matchpoint booking grid.
    pub matchpoint: MatchpointConfig,
}

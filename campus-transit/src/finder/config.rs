//! Configuration for the route finder.

use std::time::Duration;

/// Default budget for a single provider mode, in seconds.
const DEFAULT_EXTERNAL_TIMEOUT_SECS: u64 = 5;

/// Configuration parameters for route finding.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// How long one external mode fetch may take before it is abandoned
    /// (seconds). Applies to each mode separately.
    pub external_timeout_secs: u64,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(external_timeout_secs: u64) -> Self {
        Self {
            external_timeout_secs,
        }
    }

    /// Returns the per-mode external timeout as a Duration.
    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_secs)
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            external_timeout_secs: DEFAULT_EXTERNAL_TIMEOUT_SECS,
        }
    }
}

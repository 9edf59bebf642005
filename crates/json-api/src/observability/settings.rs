//! Request logging settings, injected into the depot.

use crate::config::ServerConfig;

const DEFAULT_SLOW_REQUEST_THRESHOLD_MS: u64 = 1_000;

/// Per-request logging behaviour resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RequestLoggingSettings {
    pub(crate) slow_request_threshold_ms: u64,
    pub(crate) parent_propagation_enabled: bool,
}

impl RequestLoggingSettings {
    pub(crate) fn from_config(config: &ServerConfig) -> Self {
        let observability = &config.observability;

        Self {
            slow_request_threshold_ms: observability.slow_request_threshold_ms,
            parent_propagation_enabled: observability.otel_enabled
                && observability.otel_parent_propagation_enabled,
        }
    }
}

impl Default for RequestLoggingSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold_ms: DEFAULT_SLOW_REQUEST_THRESHOLD_MS,
            parent_propagation_enabled: false,
        }
    }
}

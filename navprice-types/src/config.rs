//! Configuration types shared by the orchestrator, sources and the CLI.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rendering format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One aligned, human-readable line per outcome.
    #[default]
    Text,
    /// One JSON object per line (NDJSON).
    Json,
}

/// Global configuration for a `navprice` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavpriceConfig {
    /// Timeout applied independently to every fetch.
    pub request_timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl NavpriceConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

impl Default for NavpriceConfig {
    fn default() -> Self {
        Self {
            request_timeout: Self::DEFAULT_TIMEOUT,
            user_agent: concat!("navprice/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

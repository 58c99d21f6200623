use std::sync::Arc;
use std::time::Duration;

use navprice_core::{FetchOutcome, NavError, NavpriceConfig, PriceSource, Worklist};
use tokio::sync::mpsc;

/// Orchestrator that fans a worklist out to a price source.
pub struct Navprice {
    pub(crate) source: Arc<dyn PriceSource>,
    pub(crate) cfg: NavpriceConfig,
}

/// Builder for constructing a `Navprice` orchestrator.
pub struct NavpriceBuilder {
    source: Option<Arc<dyn PriceSource>>,
    cfg: NavpriceConfig,
}

impl Default for NavpriceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NavpriceBuilder {
    /// Create a new builder with the default configuration (10s per-request
    /// timeout) and no source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: NavpriceConfig::default(),
        }
    }

    /// Set the price source every fetch goes to. Replaces any earlier source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: NavpriceConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Each fetch is bounded independently; there is no deadline on the run as
    /// a whole, so a run takes about as long as its slowest fetch.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source was registered or the timeout is zero.
    pub fn build(self) -> Result<Navprice, NavError> {
        let Some(source) = self.source else {
            return Err(NavError::invalid_arg(
                "no price source registered; add one via with_source(...)",
            ));
        };
        if self.cfg.request_timeout.is_zero() {
            return Err(NavError::invalid_arg("request timeout must be non-zero"));
        }
        Ok(Navprice {
            source,
            cfg: self.cfg,
        })
    }
}

impl Navprice {
    /// Start building a new `Navprice` instance.
    #[must_use]
    pub fn builder() -> NavpriceBuilder {
        NavpriceBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &NavpriceConfig {
        &self.cfg
    }

    /// Fetch every worklist entry concurrently and collect all outcomes.
    ///
    /// One task is spawned per entry before anything is awaited. Each task
    /// sends its single outcome into a channel sized to the worklist, so no
    /// task ever waits on the collector. The collector then receives exactly
    /// `worklist.len()` outcomes and returns them in arrival order.
    ///
    /// Failed fetches are outcomes, not errors.
    ///
    /// # Errors
    /// Returns `Incomplete` only if a fetch task died without reporting (a
    /// panic inside the source).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "navprice::core::run",
            skip(self, worklist),
            fields(
                funds = worklist.len(),
                source = self.source.name(),
                timeout_ms = u64::try_from(self.cfg.request_timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub async fn run(&self, worklist: &Worklist) -> Result<Vec<FetchOutcome>, NavError> {
        let expected = worklist.len();
        if expected == 0 {
            return Ok(Vec::new());
        }

        let (tx, mut rx) = mpsc::channel::<FetchOutcome>(expected);
        for descriptor in worklist {
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            let descriptor = descriptor.clone();
            let timeout = self.cfg.request_timeout;
            tokio::spawn(async move {
                let outcome = source.fetch(&descriptor, timeout).await;
                // Capacity covers every task, so this never waits.
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let mut outcomes = Vec::with_capacity(expected);
        while outcomes.len() < expected {
            match rx.recv().await {
                Some(outcome) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        fund = %outcome.descriptor().id(),
                        ok = outcome.is_success(),
                        received = outcomes.len() + 1,
                        expected,
                        "outcome received"
                    );
                    outcomes.push(outcome);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(
                        expected,
                        received = outcomes.len(),
                        "fetch task ended without reporting"
                    );
                    return Err(NavError::Incomplete {
                        expected,
                        received: outcomes.len(),
                    });
                }
            }
        }
        Ok(outcomes)
    }
}

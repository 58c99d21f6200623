use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use navprice_types::FetchError;
use rust_decimal::Decimal;
use tokio::time::Instant;

use crate::instrument::InstrumentDescriptor;
use crate::outcome::FetchOutcome;

/// A provider able to price a single fund.
///
/// Implementations must be safe to call from many tasks at once. The only
/// state they may share across calls is read-only (e.g. an HTTP client).
///
/// `fetch` returns an outcome, never an error: every failure is classified and
/// folded into [`FetchOutcome::Failure`], so each call yields exactly one
/// outcome.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Stable name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Fetch the current price for `descriptor`, bounded by `timeout`.
    async fn fetch(&self, descriptor: &InstrumentDescriptor, timeout: Duration) -> FetchOutcome;
}

/// Run `fut` and wrap its result into an outcome carrying the elapsed time.
///
/// The clock starts when this function is first polled.
pub async fn measure<F>(descriptor: &InstrumentDescriptor, fut: F) -> FetchOutcome
where
    F: Future<Output = Result<Decimal, FetchError>>,
{
    let start = Instant::now();
    let result = fut.await;
    FetchOutcome::from_result(descriptor.clone(), result, start.elapsed())
}

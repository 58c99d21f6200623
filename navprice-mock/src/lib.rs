//! Mock price source for CI-safe tests.
//!
//! Behaviour is scripted per fund id at build time. Ids without a rule get a
//! deterministic fixture price so whole-catalog runs work offline.
#![warn(missing_docs)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use navprice_core::{
    Decimal, FetchError, FetchOutcome, InstrumentDescriptor, PriceSource, measure,
};

/// Instruction for how a fetch should behave for a given fund id.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the provided price immediately.
    Return(Decimal),
    /// Fail immediately with the provided error.
    Fail(FetchError),
    /// Wait, then apply the inner behaviour. A wait longer than the fetch
    /// timeout fails with a network timeout, like a real transport would.
    Delay(Duration, Box<MockBehavior>),
    /// Never answer; the fetch fails once its timeout elapses.
    Hang,
    /// Panic inside the fetch task.
    Panic,
}

/// Scripted [`PriceSource`].
#[derive(Debug, Default)]
pub struct MockSource {
    rules: HashMap<String, MockBehavior>,
    calls: AtomicUsize,
}

/// Builder for [`MockSource`].
#[derive(Debug, Default)]
pub struct MockSourceBuilder {
    rules: HashMap<String, MockBehavior>,
}

impl MockSourceBuilder {
    /// Set an explicit behaviour for `id`.
    #[must_use]
    pub fn rule(mut self, id: impl Into<String>, behavior: MockBehavior) -> Self {
        self.rules.insert(id.into(), behavior);
        self
    }

    /// Return `price` (a decimal literal) for `id`.
    ///
    /// # Panics
    /// Panics if `price` is not a valid decimal literal.
    #[must_use]
    pub fn price(self, id: impl Into<String>, price: &str) -> Self {
        let p: Decimal = price.parse().expect("valid decimal literal");
        self.rule(id, MockBehavior::Return(p))
    }

    /// Fail `id` with `error`.
    #[must_use]
    pub fn fail(self, id: impl Into<String>, error: FetchError) -> Self {
        self.rule(id, MockBehavior::Fail(error))
    }

    /// Return `price` for `id` after `delay`.
    ///
    /// # Panics
    /// Panics if `price` is not a valid decimal literal.
    #[must_use]
    pub fn delayed_price(self, id: impl Into<String>, delay: Duration, price: &str) -> Self {
        let p: Decimal = price.parse().expect("valid decimal literal");
        self.rule(id, MockBehavior::Delay(delay, Box::new(MockBehavior::Return(p))))
    }

    /// Make `id` hang until its timeout.
    #[must_use]
    pub fn hang(self, id: impl Into<String>) -> Self {
        self.rule(id, MockBehavior::Hang)
    }

    /// Build the source.
    #[must_use]
    pub fn build(self) -> MockSource {
        MockSource {
            rules: self.rules,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockSource {
    /// Mock with fixture prices for every id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start scripting a mock.
    #[must_use]
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::default()
    }

    /// Number of `fetch` calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fixture price for ids without a rule: `100 + digits(id)` with two decimals.
    ///
    /// `ls60` prices at `160.60`; ids without digits price at `100.00`.
    #[must_use]
    pub fn fixture_price(id: &str) -> Decimal {
        let n: i64 = id
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0);
        let n = n % 1_000;
        Decimal::new((100 + n) * 100 + n % 100, 2)
    }

    fn play(
        behavior: &MockBehavior,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Decimal, FetchError>> + Send + '_>> {
        Box::pin(async move {
            match behavior {
                MockBehavior::Return(p) => Ok(*p),
                MockBehavior::Fail(e) => Err(e.clone()),
                MockBehavior::Delay(wait, then) => {
                    if *wait > timeout {
                        tokio::time::sleep(timeout).await;
                        return Err(FetchError::network("operation timed out"));
                    }
                    tokio::time::sleep(*wait).await;
                    Self::play(then, timeout).await
                }
                MockBehavior::Hang => {
                    tokio::time::sleep(timeout).await;
                    Err(FetchError::network("operation timed out"))
                }
                MockBehavior::Panic => panic!("scripted mock panic"),
            }
        })
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "navprice-mock"
    }

    async fn fetch(&self, descriptor: &InstrumentDescriptor, timeout: Duration) -> FetchOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fixture = MockBehavior::Return(Self::fixture_price(descriptor.id()));
        let behavior = self.rules.get(descriptor.id()).unwrap_or(&fixture);
        measure(descriptor, Self::play(behavior, timeout)).await
    }
}

//! navprice-vanguard
//!
//! Price source for the Vanguard UK investor API. Each fund endpoint returns a
//! JSON document whose `navPrice.value` holds the latest net asset value as a
//! string:
//!
//! ```json
//! { "navPrice": { "value": "187.4312", "asOfDate": "..." } }
//! ```
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use navprice_core::{
    Decimal, FetchError, FetchOutcome, InstrumentDescriptor, NavError, NavpriceConfig,
    PriceSource, Url, measure,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavDocument {
    nav_price: NavPrice,
}

#[derive(Debug, Deserialize)]
struct NavPrice {
    value: String,
}

/// HTTP-backed [`PriceSource`] for Vanguard fund endpoints.
///
/// The inner `reqwest::Client` is `Clone + Send + Sync` and pools connections,
/// so one source serves every concurrent fetch.
#[derive(Debug, Clone)]
pub struct VanguardSource {
    http: reqwest::Client,
}

impl VanguardSource {
    /// Build a source whose client sends the configured user agent.
    ///
    /// # Errors
    /// Returns `NavError::Client` if the TLS backend or client cannot be
    /// initialised.
    pub fn new(cfg: &NavpriceConfig) -> Result<Self, NavError> {
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .build()
            .map_err(|e| NavError::client(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn fetch_price(&self, url: &Url, timeout: Duration) -> Result<Decimal, FetchError> {
        let resp = self
            .http
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(map_transport_err)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadResponse {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(map_transport_err)?;
        parse_nav_body(&body)
    }
}

#[async_trait]
impl PriceSource for VanguardSource {
    fn name(&self) -> &'static str {
        "navprice-vanguard"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "navprice_vanguard::fetch",
            skip(self, descriptor),
            fields(
                fund = %descriptor.id(),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    async fn fetch(&self, descriptor: &InstrumentDescriptor, timeout: Duration) -> FetchOutcome {
        let outcome = measure(descriptor, self.fetch_price(descriptor.endpoint(), timeout)).await;
        #[cfg(feature = "tracing")]
        match &outcome {
            FetchOutcome::Success { price, latency, .. } => {
                tracing::debug!(%price, ?latency, "price fetched");
            }
            FetchOutcome::Failure { error, latency, .. } => {
                tracing::warn!(reason = %error.kind(), error = %error, ?latency, "price fetch failed");
            }
        }
        outcome
    }
}

/// Extract the price from a fund document body.
///
/// # Errors
/// `Decode` when the body is not a JSON object with a string
/// `navPrice.value`; `Parse` when that string is not a number.
pub fn parse_nav_body(body: &[u8]) -> Result<Decimal, FetchError> {
    let doc: NavDocument =
        serde_json::from_slice(body).map_err(|e| FetchError::decode(e.to_string()))?;
    let raw = doc.nav_price.value;
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| FetchError::parse(raw))
}

fn map_transport_err(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::network(format!("request timeout: {e}"))
    } else if e.is_connect() {
        FetchError::network(format!("connection failed: {e}"))
    } else {
        FetchError::network(format!("request failed: {e}"))
    }
}

//! Re-export of foundational types from `navprice-types` and friends.
// Consolidated re-exports so downstream crates can depend on `navprice-core` only

pub use navprice_types::{ErrorKind, FetchError, NavError, NavpriceConfig, OutputFormat};

pub use rust_decimal::{Decimal, RoundingStrategy};
pub use url::Url;

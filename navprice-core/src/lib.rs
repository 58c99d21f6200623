//! navprice-core
//!
//! Core types and traits shared across the navprice workspace.
//!
//! - `instrument`: the immutable `InstrumentDescriptor`.
//! - `catalog`: the static fund catalog and identifier resolution.
//! - `outcome`: the per-instrument `FetchOutcome` sum type.
//! - `source`: the `PriceSource` trait implemented by fetchers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Latency is measured with `tokio::time::Instant`, so sources are expected to
//! run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Fund catalog, builder and identifier resolution.
pub mod catalog;
/// Instrument descriptors.
pub mod instrument;
/// Fetch outcomes and latency helpers.
pub mod outcome;
/// The `PriceSource` trait.
pub mod source;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder, Selection, Worklist, split_fund_list};
pub use instrument::InstrumentDescriptor;
pub use outcome::{FetchOutcome, format_latency, round_latency};
pub use source::{PriceSource, measure};
pub use types::*;

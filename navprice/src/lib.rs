//! navprice prices a fixed set of funds concurrently and reports the results.
//!
//! Overview
//! - `Navprice::run` spawns one task per worklist entry, all before awaiting
//!   anything, and collects exactly one `FetchOutcome` per task through a
//!   bounded MPSC channel sized to the worklist.
//! - Per-fund failures (network, bad status, bad body, bad number) are
//!   outcomes. Only a task that dies without reporting makes `run` fail.
//! - Outcomes come back in arrival order; the reporter prints them as-is.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use navprice::{Catalog, Navprice, ReportStyle, report};
//!
//! let catalog = Catalog::vanguard_lifestrategy()?;
//! let selection = catalog.resolve(&["ls60", "ls80"]);
//! let source = Arc::new(navprice_vanguard::VanguardSource::new(&Default::default())?);
//! let navprice = Navprice::builder().with_source(source).build()?;
//! let outcomes = navprice.run(&selection.worklist).await?;
//! report(&outcomes, &ReportStyle::default(), &mut std::io::stdout())?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod report;

pub use core::{Navprice, NavpriceBuilder};
pub use report::{ReportStyle, render_line, report, report_unrecognised};

// Re-export core types for convenience
pub use navprice_core::{
    Catalog, CatalogBuilder, Decimal, ErrorKind, FetchError, FetchOutcome, InstrumentDescriptor,
    NavError, NavpriceConfig, OutputFormat, PriceSource, Selection, Url, Worklist,
    format_latency, split_fund_list,
};

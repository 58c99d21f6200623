//! navprice-specific error types and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{NavpriceConfig, OutputFormat};
pub use error::{ErrorKind, FetchError, NavError};

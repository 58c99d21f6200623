//! Library half of the `navprice` binary, split out so runs can be driven
//! in-process against any [`navprice::PriceSource`].
#![warn(missing_docs)]

pub mod app;
pub mod cli;
mod error;

pub use app::run;
pub use cli::{Cli, FormatArg};
pub use error::CliError;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is unset.
///
/// Unknown ids and failed fetches already get their own report lines, so
/// the library's warnings only show up from `-v` on.
#[must_use]
pub const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level via
/// [`default_log_level`]. Colour is only used when stderr is a terminal.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

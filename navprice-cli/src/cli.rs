//! Command-line arguments.
//!
//! ```bash
//! # Price every LifeStrategy fund
//! navprice
//!
//! # Price two funds, JSON lines, 5s per request
//! navprice ls20,ls80 --format json --timeout-secs 5
//! ```

use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use navprice::{NavpriceConfig, OutputFormat, split_fund_list};

/// Fetch current prices for Vanguard LifeStrategy funds.
#[derive(Debug, Parser)]
#[command(name = "navprice", author, version, about)]
pub struct Cli {
    /// Comma-separated fund ids, e.g. `ls20,ls60`. Prices every fund when omitted.
    pub funds: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Print the known funds and exit.
    #[arg(long)]
    pub list: bool,

    /// Raise log verbosity (default error, -v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Requested ids with stray empty fragments removed.
    #[must_use]
    pub fn requested_ids(&self) -> Vec<&str> {
        self.funds.as_deref().map(split_fund_list).unwrap_or_default()
    }

    /// Runtime configuration assembled from flags.
    #[must_use]
    pub fn config(&self) -> NavpriceConfig {
        NavpriceConfig {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..NavpriceConfig::default()
        }
    }
}

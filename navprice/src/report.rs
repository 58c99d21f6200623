use std::io::{self, Write};

use navprice_core::{
    ErrorKind, FetchOutcome, OutputFormat, RoundingStrategy, format_latency,
};
use serde::Serialize;

/// How outcomes are rendered.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    /// Output format.
    pub format: OutputFormat,
    /// Symbol printed before prices in text output.
    pub currency_symbol: String,
    /// Column width the fund name is padded to in text output.
    pub name_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            currency_symbol: "£".to_string(),
            name_width: 25,
        }
    }
}

impl ReportStyle {
    /// Default style with the given format.
    #[must_use]
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    id: &'a str,
    name: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    latency_ms: u64,
}

impl<'a> From<&'a FetchOutcome> for OutcomeRecord<'a> {
    fn from(o: &'a FetchOutcome) -> Self {
        let d = o.descriptor();
        Self {
            id: d.id(),
            name: d.display_name(),
            status: if o.is_success() { "ok" } else { "error" },
            price: o.price().map(|p| p.to_string()),
            reason: o.reason(),
            error: o.error().map(ToString::to_string),
            latency_ms: u64::try_from(o.latency().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Render a single outcome as a text line (no trailing newline).
///
/// ```text
/// LifeStrategy 20% Equity   £187.43 (412ms)
/// Failed to receive fund info for LifeStrategy 40% Equity: bad response from provider: HTTP 503
/// ```
#[must_use]
pub fn render_line(outcome: &FetchOutcome, style: &ReportStyle) -> String {
    match outcome {
        FetchOutcome::Success {
            descriptor,
            price,
            latency,
        } => {
            let price = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!(
                "{:<width$} {}{:.2} ({})",
                descriptor.display_name(),
                style.currency_symbol,
                price,
                format_latency(*latency),
                width = style.name_width,
            )
        }
        FetchOutcome::Failure {
            descriptor, error, ..
        } => format!(
            "Failed to receive fund info for {}: {}",
            descriptor.display_name(),
            error
        ),
    }
}

/// Write outcomes in the order given, one line each.
///
/// # Errors
/// Propagates write failures on `out`.
pub fn report<W: Write>(
    outcomes: &[FetchOutcome],
    style: &ReportStyle,
    out: &mut W,
) -> io::Result<()> {
    for outcome in outcomes {
        match style.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &OutcomeRecord::from(outcome))?;
                writeln!(out)?;
            }
            _ => writeln!(out, "{}", render_line(outcome, style))?,
        }
    }
    out.flush()
}

/// Write one warning line per unrecognised fund id.
///
/// # Errors
/// Propagates write failures on `out`.
pub fn report_unrecognised<W: Write, S: AsRef<str>>(ids: &[S], out: &mut W) -> io::Result<()> {
    for id in ids {
        writeln!(out, "Fund with ID {} not recognised", id.as_ref())?;
    }
    Ok(())
}

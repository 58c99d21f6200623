//! One CLI invocation: list the catalog, or resolve ids, fan out and report.

use std::io::Write;
use std::sync::Arc;

use navprice::{
    Catalog, NavError, Navprice, PriceSource, ReportStyle, report, report_unrecognised,
};

use crate::cli::Cli;
use crate::error::CliError;

/// Execute one invocation against `catalog`.
///
/// `make_source` is only called when prices are actually fetched, so
/// `--list` never builds an HTTP client. Results go to `stdout`,
/// unrecognised-id warnings to `stderr`. Per-fund failures are reported as
/// lines and do not make this fail.
///
/// # Errors
/// Source construction or orchestrator setup errors, an incomplete run, or a
/// failed write.
pub async fn run<F, O, E>(
    cli: &Cli,
    catalog: &Catalog,
    make_source: F,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<(), CliError>
where
    F: FnOnce(&Cli) -> Result<Arc<dyn PriceSource>, NavError>,
    O: Write,
    E: Write,
{
    if cli.list {
        list_catalog(catalog, stdout)?;
        return Ok(());
    }

    let requested = cli.requested_ids();
    let selection = catalog.resolve(requested.as_slice());
    report_unrecognised(&selection.unrecognised, stderr)?;

    let navprice = Navprice::builder()
        .with_source(make_source(cli)?)
        .config(cli.config())
        .build()?;
    let outcomes = navprice.run(&selection.worklist).await?;

    tracing::info!(
        funds = selection.worklist.len(),
        failed = outcomes.iter().filter(|o| !o.is_success()).count(),
        "run complete"
    );

    report(&outcomes, &ReportStyle::with_format(cli.format.into()), stdout)?;
    Ok(())
}

fn list_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> std::io::Result<()> {
    for fund in catalog.iter() {
        writeln!(out, "{:<6} {}", fund.id(), fund.display_name())?;
    }
    out.flush()
}

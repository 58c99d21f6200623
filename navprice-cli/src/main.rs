use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use navprice::{Catalog, PriceSource};
use navprice_cli::{Cli, CliError, init_tracing};
use navprice_vanguard::VanguardSource;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let catalog = Catalog::vanguard_lifestrategy()?;
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    navprice_cli::run(
        cli,
        &catalog,
        |cli| Ok(Arc::new(VanguardSource::new(&cli.config())?) as Arc<dyn PriceSource>),
        &mut stdout,
        &mut stderr,
    )
    .await
}

//! Hot tub evaporation calculator.

use std::io;

use clap::Parser;
use evap_cli::{Cli, Format, log_filter_from_verbosity, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin().lock();

    // Keep stdout parseable when it carries JSON.
    match cli.format {
        Format::Text => run(&cli, stdin, io::stdout(), io::stdout())?,
        Format::Json => run(&cli, stdin, io::stderr(), io::stdout())?,
    };

    Ok(())
}

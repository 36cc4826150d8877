//! examrep CLI — builds the per-instructor exam report.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "examrep",
    version,
    about = "Average exam score report per driving instructor"
)]
struct Cli {
    /// Exam results file (JSON array of records)
    source: PathBuf,

    /// File to write the report to
    report: PathBuf,

    /// Print a detailed log of every step
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let directive = if debug { "examrep=debug" } else { "examrep=info" };
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = examrep_core::load_config()?;
    tracing::debug!("using config: {config:?}");
    examrep_core::build(&cli.source, &cli.report, &config)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

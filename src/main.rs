use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use storytally::commands::scan::{self, OutputFormat, ScanOptions};
use storytally::fs::StoryFileFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storytally")]
#[command(about = "Summarise effort across story markdown files", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding story-*.md files
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Report format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Log each file and extracted record to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides
/// the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ScanOptions {
        dir: cli.dir,
        format: cli.format,
        filter: StoryFileFilter::default(),
    };

    let report = scan::execute(&options)?;
    print!("{report}");
    Ok(())
}

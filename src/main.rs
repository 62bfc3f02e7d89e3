//! Rollcall binary entry point.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rollcall::cli;
use rollcall::cli::input::PageSource;

#[derive(Parser)]
#[command(name = "rollcall", version, about = "Extract contact records from rendered directory pages")]
struct Cli {
    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress per-record output, print only the summary
    #[arg(long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract contact records from a saved directory page
    Extract {
        /// Path to the rendered HTML page, or `-` to read from stdin
        page: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Carry global flags through env so output helpers see them anywhere.
    if cli.json {
        std::env::set_var("ROLLCALL_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("ROLLCALL_QUIET", "1");
    }
    if cli.no_color {
        std::env::set_var("ROLLCALL_NO_COLOR", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rollcall=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Extract { page } => cli::extract_cmd::run(&PageSource::from_arg(&page)),
    }
}

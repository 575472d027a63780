//! pointshell command line interface
//!
//! Generates, sorts, converts and inspects point collections stored in any
//! format supported by pointcodec. The file extension selects the format.

mod commands;
mod session;
mod settings;
mod storage;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Point collection tool
#[derive(Parser, Debug)]
#[command(name = "pointshell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file layered over the user settings
    #[arg(short, long, env = "POINTSHELL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log codec activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail on malformed custom-format lines instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Write JSON, XML and SOAP without indentation
    #[arg(long, global = true)]
    pub compact: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random points and store them
    Generate {
        /// Output file (.bin, .soap, .xml, .json, .yaml, .custom)
        output: PathBuf,

        /// Number of points (default from settings)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Sort a stored collection
    Sort {
        /// File to sort
        input: PathBuf,

        /// Write the sorted points here instead of back to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read points in one format and write them in another
    Convert {
        /// Source file
        input: PathBuf,

        /// Destination file
        output: PathBuf,
    },

    /// Print a stored collection, one point per line
    Show {
        /// File to print
        input: PathBuf,
    },

    /// Start an interactive session
    Shell,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.strict {
        settings.strict_custom = true;
    }
    if cli.compact {
        settings.pretty = false;
    }
    init_tracing(&settings, cli.verbose);

    match cli.command {
        Commands::Generate { output, count, seed } => commands::generate(&settings, &output, count, seed),
        Commands::Sort { input, output } => commands::sort(&settings, &input, output.as_deref()),
        Commands::Convert { input, output } => commands::convert(&settings, &input, &output),
        Commands::Show { input } => commands::show(&settings, &input),
        Commands::Shell => commands::shell(&settings),
    }
}

fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

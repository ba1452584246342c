//! OxiGz CLI - extract gzip files next to themselves.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{cmd_extract, cmd_info, cmd_target, cmd_test};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxigz")]
#[command(author, version, about = "Extract gzip files next to themselves")]
#[command(long_about = "
OxiGz decompresses a single gzip file. The output is written next to the
input, named after it with the last extension removed. An existing file at
that path is overwritten.

Examples:
  oxigz extract 2018-01-01-15.json.gz
  oxigz info backup.tar.gz
  oxigz info --json backup.tar.gz
  oxigz test backup.tar.gz
  oxigz target backup.tar.gz
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress a gzip file next to itself
    #[command(alias = "x")]
    Extract {
        /// Gzip file to extract
        file: PathBuf,
    },

    /// Show gzip header information
    #[command(alias = "i")]
    Info {
        /// Gzip file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Test gzip integrity without writing output
    #[command(alias = "t")]
    Test {
        /// Gzip file to test
        file: PathBuf,
    },

    /// Print the path a file would be extracted to
    Target {
        /// Gzip file name
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Extract { file } => cmd_extract(&file, cli.verbose > 0),
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Test { file } => cmd_test(&file),
        Commands::Target { file } => cmd_target(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    // Warnings are shown by default, each -v adds a level.
    if let Err(error) = stderrlog::new()
        .quiet(quiet)
        .verbosity(1 + usize::from(verbose))
        .init()
    {
        eprintln!("Unable to initialize logger: {error}");
        std::process::exit(1);
    }
}

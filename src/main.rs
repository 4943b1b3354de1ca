use clap::Parser;
use sitedata::config::{DEFAULT_DOCUMENT_PATH, DOCUMENT_PATH_ENV};
use sitedata::domain::document::{DEFAULT_KEY, render_value};
use sitedata::infrastructure::json_file::load_document;
use sitedata::telemetry;
use std::path::PathBuf;
use std::process::ExitCode;

/// Prints the value stored under a key of the site-data document.
#[derive(Parser)]
#[command(author, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Key to look up
    #[arg(default_value = DEFAULT_KEY)]
    key: String,

    /// Path to the site-data JSON document
    #[arg(long, env = DOCUMENT_PATH_ENV, default_value = DEFAULT_DOCUMENT_PATH)]
    file: PathBuf,

    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init();

    if cli.version {
        println!("sitedata {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let result = load_document(&cli.file)
        .and_then(|document| document.lookup(&cli.key).map(render_value));

    match result {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

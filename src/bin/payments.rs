use clap::Parser;
use miette::{IntoDiagnostic, Result};
use sitedata::application::router::PaymentRouter;
use sitedata::config::{self, AccountSpec, DEFAULT_DOCUMENT_PATH, DOCUMENT_PATH_ENV};
use sitedata::domain::payment::PaymentOutcome;
use sitedata::infrastructure::in_memory::DocumentKeyStore;
use sitedata::infrastructure::json_file::load_document;
use sitedata::interfaces::csv::account_writer::AccountWriter;
use sitedata::interfaces::csv::payment_reader::PaymentRequestReader;
use sitedata::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Routes payments across bank accounts, trying each account in order.
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Cli {
    /// Payment requests CSV file (`payment, amount`). Runs the built-in scenario if omitted.
    requests: Option<PathBuf>,

    /// Path to the site-data JSON document holding the account keys
    #[arg(long, env = DOCUMENT_PATH_ENV, default_value = DEFAULT_DOCUMENT_PATH)]
    file: PathBuf,

    /// Account as ID=BALANCE, repeated in fallback order. Defaults to token1=1000, token2=2000.
    #[arg(long = "account", value_name = "ID=BALANCE")]
    accounts: Vec<AccountSpec>,
}

fn print_outcome(outcome: &PaymentOutcome) -> Result<()> {
    println!("{}", serde_json::to_string(outcome).into_diagnostic()?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init();

    println!("Payment system - version {}", env!("CARGO_PKG_VERSION"));

    // Load the document once and share it with the key-store
    let document = Arc::new(load_document(&cli.file).into_diagnostic()?);

    let specs = if cli.accounts.is_empty() {
        config::default_accounts()
    } else {
        cli.accounts
    };
    let router = PaymentRouter::new(
        specs.iter().map(AccountSpec::open).collect(),
        Box::new(DocumentKeyStore::new(document)),
    );

    match cli.requests {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let reader = PaymentRequestReader::new(file);
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let outcome = router.route(request).await.into_diagnostic()?;
                        print_outcome(&outcome)?;
                    }
                    Err(e) => {
                        eprintln!("Error reading payment request: {}", e);
                    }
                }
            }
        }
        None => {
            let outcomes = router
                .route_all(config::default_requests())
                .await
                .into_diagnostic()?;
            for outcome in &outcomes {
                print_outcome(outcome)?;
            }
        }
    }

    println!();
    println!("Payment history:");
    for outcome in router.list_history().await {
        print_outcome(&outcome)?;
    }

    println!();
    let accounts = router.accounts().await;
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(&accounts).into_diagnostic()?;

    Ok(())
}

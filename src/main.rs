//! Command-line front end for the swap pipeline.
//!
//! Uses a JSON-RPC node with unlocked accounts as the wallet.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use swap_pipeline::config::{load_config, PipelineConfig};
use swap_pipeline::observability::logging::init_logging;
use swap_pipeline::provider::NodeWallet;
use swap_pipeline::quote::{QuoteClient, QuoteRequest, QuoteSource};
use swap_pipeline::SwapFlow;

const DEFAULT_MESSAGE: &str = "Hello Interface team!";

#[derive(Parser)]
#[command(name = "swap-pipeline")]
#[command(about = "Fetch a swap quote and submit it through a wallet provider", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a quote and print the transaction draft
    Quote {
        #[arg(long)]
        user_address: String,
    },
    /// Sign a message with the first Ethereum account
    Sign {
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },
    /// Fetch a quote, build the transaction and send it
    Swap,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };
    init_logging(&config.observability.log_level)?;

    tracing::info!(
        quote_url = %config.quote.base_url,
        rpc_url = %config.node.rpc_url,
        chain_id = config.swap.chain_id,
        "Configuration loaded"
    );

    let quotes = Arc::new(QuoteClient::new(&config.quote)?);

    let outcome = match cli.command {
        Commands::Quote { user_address } => {
            let request = QuoteRequest::for_swap(user_address, &config.swap);
            let draft = quotes.fetch_quote(&request).await?;
            println!("{}", serde_json::to_string_pretty(&draft)?);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Sign { message } => {
            let flow = SwapFlow::new(Arc::new(NodeWallet::new(&config.node)?), quotes);
            flow.sign_message(&message).await
        }
        Commands::Swap => {
            let flow = SwapFlow::new(Arc::new(NodeWallet::new(&config.node)?), quotes);
            flow.execute_swap(&config.swap).await
        }
    };

    println!("{}", outcome);
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

use std::path::PathBuf;

use alph_ledger::{config::LedgerConfig, network::Network, Ledger, PagePolicy, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    version = "0.1",
    about = "Builds the transfer ledger of an Alephium wallet"
)]
struct Cli {
    /// Loads settings from a JSON config file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Sets the network whose explorer backend is queried
    #[arg(long, value_name = "NETWORK")]
    network: Option<Network>,

    /// Overrides the explorer backend url
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Drops transactions that fail to format instead of failing the page
    #[arg(long)]
    skip_failed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists the normalized transfers of one page of the address history
    Transfers {
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "20")]
        limit: u32,
    },
    /// Shows the ALPH and token balances of an address
    Balances {
        #[arg(long)]
        address: String,
    },
}

impl Cli {
    fn ledger_config(&self) -> Result<LedgerConfig> {
        let mut config = match &self.config {
            Some(path) => LedgerConfig::from_file(path)?,
            None => LedgerConfig::default(),
        };
        if let Some(network) = self.network {
            config.network = network;
        }
        if let Some(url) = &self.backend_url {
            config.backend_url = Some(url.clone());
        }
        if self.skip_failed {
            config.page_policy = PagePolicy::SkipFailed;
        }
        Ok(config)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.ledger_config()?;
    log::info!(
        "Querying {} ({})",
        config.backend_url(),
        config.network
    );
    let ledger = Ledger::from_config(&config);

    match cli.command {
        Command::Transfers {
            address,
            page,
            limit,
        } => print_json(&ledger.transfers(&address, page, limit).await?),
        Command::Balances { address } => print_json(&ledger.balances(&address).await?),
    }
}

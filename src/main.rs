use anyhow::Result;
use clap::Parser;
use eth_block_scanner::config::Config;
use eth_block_scanner::rpc::RpcClient;
use eth_block_scanner::scanner::Scanner;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "scanner")]
#[command(about = "Summarize the latest Ethereum block and its ERC-20 transfers", long_about = None)]
struct Cli {
    /// How many transactions of the block to print (overrides TX_DISPLAY_LIMIT)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(limit) = cli.limit {
        config.tx_display_limit = limit;
    }
    info!("Configuration loaded");

    let client = RpcClient::new(&config.json_rpc_url)?;
    info!("RPC client connected");

    let scanner = Scanner::new(client, &config);

    if let Err(e) = scanner.scan_latest_block().await {
        error!("Scanner error: {}", e);
        return Err(e);
    }

    Ok(())
}

use anyhow::{Context, Result};
use tracing::warn;

/// How many transactions of the block are printed when nothing overrides it.
pub const DEFAULT_TX_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub json_rpc_url: String,
    pub tx_display_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if dotenv::dotenv().is_err() {
            warn!(".env not found, using process environment");
        }

        Self::from_parts(
            std::env::var("JSON_RPC_URL").ok(),
            std::env::var("TX_DISPLAY_LIMIT").ok(),
        )
    }

    fn from_parts(json_rpc_url: Option<String>, tx_display_limit: Option<String>) -> Result<Self> {
        let json_rpc_url = json_rpc_url
            .filter(|url| !url.trim().is_empty())
            .context("JSON_RPC_URL must be set in .env or the environment")?;

        let tx_display_limit = match tx_display_limit {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid TX_DISPLAY_LIMIT: {raw}"))?,
            None => DEFAULT_TX_DISPLAY_LIMIT,
        };

        Ok(Config {
            json_rpc_url,
            tx_display_limit,
        })
    }
}

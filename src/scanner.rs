use crate::config::Config;
use crate::events;
use crate::format::{format_amount, format_eth, recipient_label};
use crate::rpc::RpcClient;
use crate::token::TokenResolver;
use alloy::consensus::Transaction as _;
use alloy::consensus::transaction::SignerRecoverable as _;
use alloy::rpc::types::{Transaction, TransactionReceipt};
use alloy_primitives::U256;
use anyhow::Result;
use chrono::DateTime;
use tracing::warn;

pub struct Scanner {
    client: RpcClient,
    tokens: TokenResolver,
    tx_limit: usize,
}

impl Scanner {
    pub fn new(client: RpcClient, config: &Config) -> Self {
        let tokens = TokenResolver::new(client.clone());
        Scanner {
            client,
            tokens,
            tx_limit: config.tx_display_limit,
        }
    }

    /// One pass over the chain tip. Header, block and chain-id fetches abort
    /// the scan; every per-transaction failure is logged and skipped.
    pub async fn scan_latest_block(&self) -> Result<()> {
        let header = self.client.latest_header().await?;
        let block = self.client.block_with_transactions(header.number).await?;

        println!("Block number: {}", block.header.number);
        println!("Block hash:   {}", block.header.hash);
        println!("Timestamp:    {}", format_timestamp(block.header.timestamp));
        println!("Transactions: {}", block.transactions.len());

        let chain_id = self.client.chain_id().await?;

        let transactions = block.transactions.as_transactions().unwrap_or(&[]);
        let mut total_wei = U256::ZERO;

        for (index, tx) in scan_window(transactions, self.tx_limit).iter().enumerate() {
            let tx_hash = tx.inner.tx_hash();

            println!();
            println!("TX #{}: {}", index + 1, tx_hash);

            // Replay protection travels with the envelope; a foreign chain id
            // means this signature was produced for another network.
            if let Some(tx_chain_id) = tx.chain_id() {
                if tx_chain_id != chain_id {
                    warn!("TX {tx_hash} carries chain id {tx_chain_id}, node reports {chain_id}");
                }
            }

            let from = match tx.inner.inner().recover_signer() {
                Ok(from) => from,
                Err(e) => {
                    warn!("Could not recover sender for {tx_hash}: {e}");
                    continue;
                }
            };
            println!("From: {}", from.to_checksum(None));
            println!("To: {}", recipient_label(tx.to()));

            let value = tx.value();
            total_wei += value;
            println!("Value: {} ETH", format_eth(value));

            // Second round trip per transaction; a failure here only skips the
            // event decoding, the value above already counts.
            let receipt = match self.client.transaction_receipt(*tx_hash).await {
                Ok(Some(receipt)) => receipt,
                Ok(None) => {
                    warn!("No receipt available for tx {tx_hash}");
                    continue;
                }
                Err(e) => {
                    warn!("Cannot get receipt for tx {tx_hash}: {e}");
                    continue;
                }
            };

            self.print_transfer_events(&receipt).await;
        }

        println!();
        println!(
            "Total ETH transferred in block: {} ETH",
            format_eth(total_wei)
        );

        Ok(())
    }

    async fn print_transfer_events(&self, receipt: &TransactionReceipt) {
        for log in receipt.inner.logs() {
            if !events::is_transfer_log(log) {
                continue;
            }

            let event = match events::decode_transfer_event(log) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Failed to decode Transfer log: {e}");
                    continue;
                }
            };

            let token = self.tokens.resolve(log.address()).await;
            let amount = format_amount(event.value, token.decimals_or_default());

            println!(
                "Token Transfer: {} -> {} | {} {} ({})",
                event.from.to_checksum(None),
                event.to.to_checksum(None),
                amount,
                token.symbol_or_default(),
                token.name_or_default(),
            );
        }
    }
}

/// The slice of transactions the scan prints: the whole block when it holds
/// `limit` or fewer, the first `limit` otherwise.
fn scan_window(transactions: &[Transaction], limit: usize) -> &[Transaction] {
    &transactions[..limit.min(transactions.len())]
}

fn format_timestamp(epoch_seconds: u64) -> String {
    DateTime::from_timestamp(epoch_seconds as i64, 0)
        .map(|timestamp| timestamp.to_string())
        .unwrap_or_else(|| epoch_seconds.to_string())
}

use alloy::network::TransactionBuilder;
use alloy::providers::fillers::FillProvider;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{Block, BlockNumberOrTag, Header, TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, B256};
use anyhow::{Context, Result};

type AlloyFullProvider = FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::Identity,
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::GasFiller,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::BlobGasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::NonceFiller,
                    alloy::providers::fillers::ChainIdFiller,
                >,
            >,
        >,
    >,
    alloy::providers::RootProvider,
>;

/// Thin wrapper over a single HTTP provider. One failed call is surfaced as-is:
/// no retry, no endpoint rotation, timeouts are the transport defaults.
#[derive(Clone)]
pub struct RpcClient {
    provider: AlloyFullProvider,
}

impl RpcClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let parsed_url = rpc_url
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid RPC URL: {}", rpc_url))?;
        let provider: AlloyFullProvider = ProviderBuilder::new().connect_http(parsed_url);

        Ok(RpcClient { provider })
    }

    /// Header of the chain tip.
    pub async fn latest_header(&self) -> Result<Header> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .context("Failed to fetch latest header")?
            .context("Endpoint returned no latest block")?;
        Ok(block.header)
    }

    /// Full block body, transactions included.
    pub async fn block_with_transactions(&self, number: u64) -> Result<Block> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .full()
            .await
            .with_context(|| format!("Failed to fetch block {number}"))?
            .with_context(|| format!("Block {number} not found"))?;
        Ok(block)
    }

    pub async fn chain_id(&self) -> Result<u64> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .context("Failed to fetch chain id")?;
        Ok(chain_id)
    }

    pub async fn transaction_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        let receipt = self
            .provider
            .get_transaction_receipt(hash)
            .await
            .with_context(|| format!("Failed to fetch receipt for {hash}"))?;
        Ok(receipt)
    }

    /// Read-only contract call (`eth_call`), decoded into the call's return type.
    pub async fn call_contract<C: SolCall>(&self, address: Address, call: C) -> Result<C::Return> {
        let request = TransactionRequest::default()
            .with_to(address)
            .with_input(call.abi_encode());
        let raw = self.provider.call(request).await?;
        Ok(C::abi_decode_returns(&raw)?)
    }
}

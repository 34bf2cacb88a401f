use crate::events::{decimalsCall, nameCall, symbolCall};
use crate::rpc::RpcClient;
use alloy_primitives::Address;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Best-effort ERC-20 metadata. `None` marks an accessor call that failed;
/// display falls back to an empty string / zero decimals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

impl TokenMetadata {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn symbol_or_default(&self) -> &str {
        self.symbol.as_deref().unwrap_or("")
    }

    pub fn decimals_or_default(&self) -> u8 {
        self.decimals.unwrap_or(0)
    }

    /// False when any field came back defaulted instead of resolved.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.symbol.is_some() && self.decimals.is_some()
    }
}

/// Memoizes metadata per contract address for the lifetime of the process.
/// Degraded results are cached too, so a failing token is queried once, not
/// once per matching log.
pub struct TokenResolver {
    client: RpcClient,
    cache: Mutex<HashMap<Address, TokenMetadata>>,
}

impl TokenResolver {
    pub fn new(client: RpcClient) -> Self {
        TokenResolver {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The lock spans the whole check-fetch-insert sequence: at most one
    /// resolution attempt per address per run, even with concurrent callers.
    pub async fn resolve(&self, address: Address) -> TokenMetadata {
        let mut cache = self.cache.lock().await;
        if let Some(metadata) = cache.get(&address) {
            return metadata.clone();
        }

        let metadata = self.fetch(address).await;
        cache.insert(address, metadata.clone());
        metadata
    }

    async fn fetch(&self, address: Address) -> TokenMetadata {
        debug!("Fetching token metadata for {address}");

        let name = match self.client.call_contract(address, nameCall {}).await {
            Ok(name) => Some(name),
            Err(e) => {
                debug!("name() call failed for {address}: {e}");
                None
            }
        };

        let symbol = match self.client.call_contract(address, symbolCall {}).await {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                debug!("symbol() call failed for {address}: {e}");
                None
            }
        };

        let decimals = match self.client.call_contract(address, decimalsCall {}).await {
            Ok(decimals) => Some(decimals),
            Err(e) => {
                debug!("decimals() call failed for {address}: {e}");
                None
            }
        };

        TokenMetadata {
            name,
            symbol,
            decimals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_and_zero() {
        let metadata = TokenMetadata::default();
        assert_eq!(metadata.name_or_default(), "");
        assert_eq!(metadata.symbol_or_default(), "");
        assert_eq!(metadata.decimals_or_default(), 0);
        assert!(!metadata.is_complete());
    }

    #[test]
    fn complete_means_all_three_fields_resolved() {
        let metadata = TokenMetadata {
            name: Some("Test Token".to_string()),
            symbol: Some("TT".to_string()),
            decimals: Some(6),
        };
        assert!(metadata.is_complete());

        let partial = TokenMetadata {
            decimals: None,
            ..metadata
        };
        assert!(!partial.is_complete());
    }
}

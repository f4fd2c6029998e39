use anyhow::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::sync::Arc;

/// Default mainnet RPC endpoint, overridable via SOLANA_RPC_URL
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Create a Solana client with confirmed commitment
pub fn create_solana_client(rpc_url: &str) -> Result<Arc<RpcClient>> {
    let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());

    Ok(Arc::new(client))
}

use crate::entity::WalletError;
use crate::solana::utils::parse_pubkey;
use async_trait::async_trait;
use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

/// Source of lamport balances for a wallet address
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn lamport_balance(&self, address: &str) -> Result<u64, WalletError>;
}

/// Balance source backed by a Solana RPC node
pub struct RpcBalanceSource {
    client: Arc<RpcClient>,
}

impl RpcBalanceSource {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BalanceSource for RpcBalanceSource {
    async fn lamport_balance(&self, address: &str) -> Result<u64, WalletError> {
        // A 44-char base58 string can still decode to the wrong byte length
        let pubkey = parse_pubkey(address).map_err(|_| WalletError::InvalidAddressFormat)?;

        let balance = self
            .client
            .get_balance(&pubkey)
            .await
            .map_err(|e| WalletError::Rpc(format!("Failed to get balance: {}", e)))?;

        debug!("Balance for {}: {} lamports", address, balance);

        Ok(balance)
    }
}

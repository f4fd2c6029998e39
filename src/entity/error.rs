#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet address is required")]
    MissingAddress,

    #[error("Invalid Solana address format")]
    InvalidAddressFormat,

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Price API error: {0}")]
    PriceApi(String),
}

// Re-export everything from submodules
pub mod balance;
pub mod client;
pub mod utils;

// Re-export commonly used items
pub use balance::{BalanceSource, RpcBalanceSource};
pub use client::{create_solana_client, MAINNET_RPC_URL};
pub use utils::{is_solana_address, lamports_to_sol, parse_pubkey};

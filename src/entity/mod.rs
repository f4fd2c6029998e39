mod error;
mod valuation;

pub use error::WalletError;
pub use valuation::WalletValuation;

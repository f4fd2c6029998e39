use crate::entity::{WalletError, WalletValuation};

pub fn usage_text() -> String {
    "Please provide a wallet address as an argument".to_string()
}

pub fn valuation_text(valuation: &WalletValuation) -> String {
    format!(
        "Wallet: {}\nBalance: {} SOL (${})\nSOL Price: ${}",
        valuation.address, valuation.sol_balance, valuation.usd_balance, valuation.sol_price
    )
}

pub fn error_text(error: &WalletError) -> String {
    format!("Error: {}", error)
}

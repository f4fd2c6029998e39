use serde::{Deserialize, Serialize};

use crate::solana::utils::lamports_to_sol;

/// Result of valuing a wallet: balance and price rendered as fixed-point
/// decimal strings, built in one place so rounding stays consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletValuation {
    pub address: String,     // Wallet address as given
    pub sol_balance: String, // SOL balance, 4 decimals
    pub usd_balance: String, // USD value of the balance, 2 decimals
    pub sol_price: String,   // SOL/USD rate, 2 decimals
}

impl WalletValuation {
    pub fn from_lamports(address: &str, lamports: u64, sol_price: f64) -> Self {
        let sol_balance = lamports_to_sol(lamports);
        let usd_balance = sol_balance * sol_price;

        Self {
            address: address.to_string(),
            sol_balance: format!("{:.4}", sol_balance),
            usd_balance: format!("{:.2}", usd_balance),
            sol_price: format!("{:.2}", sol_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_balance_price_and_usd_value() {
        let valuation = WalletValuation::from_lamports(
            "11111111111111111111111111111111111111111111",
            2_500_000_000,
            150.0,
        );

        assert_eq!(valuation.sol_balance, "2.5000");
        assert_eq!(valuation.usd_balance, "375.00");
        assert_eq!(valuation.sol_price, "150.00");
    }

    #[test]
    fn zero_balance_is_still_fully_populated() {
        let valuation = WalletValuation::from_lamports(
            "So11111111111111111111111111111111111111112",
            0,
            97.315,
        );

        assert_eq!(valuation.sol_balance, "0.0000");
        assert_eq!(valuation.usd_balance, "0.00");
        assert_eq!(valuation.sol_price, "97.32");
    }

    #[test]
    fn sub_lamport_precision_rounds_to_four_decimals() {
        let valuation = WalletValuation::from_lamports("addr", 123_456_789, 100.0);

        assert_eq!(valuation.sol_balance, "0.1235");
        assert_eq!(valuation.usd_balance, "12.35");
    }
}

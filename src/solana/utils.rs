use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

// Constants for conversion
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

// Validate Solana address: 44 characters, canonical base58 alphabet
// (digits 1-9, letters minus 0/O/I/l)
pub fn is_solana_address(address: &str) -> bool {
    lazy_static! {
        static ref BASE58_RE: Regex = Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{44}$").unwrap();
    }

    BASE58_RE.is_match(address)
}

// Parse Solana address and convert to pubkey
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|_| anyhow!("Invalid Solana address format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lamports_convert_at_1e9_per_sol() {
        assert_eq!(lamports_to_sol(2_500_000_000), 2.5);
        assert_eq!(lamports_to_sol(1), 1e-9);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn accepts_44_char_base58_strings() {
        assert!(is_solana_address(
            "11111111111111111111111111111111111111111111"
        ));
        assert!(is_solana_address(
            "So11111111111111111111111111111111111111112z"
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_solana_address(""));
        // 43 characters: a real system-program address, still rejected here
        assert!(!is_solana_address(
            "1111111111111111111111111111111111111111111"
        ));
        assert!(!is_solana_address(
            "111111111111111111111111111111111111111111111"
        ));
    }

    #[test]
    fn rejects_excluded_base58_characters() {
        // 0, O, I and l are not part of the base58 alphabet
        assert!(!is_solana_address(
            "0111111111111111111111111111111111111111111I"
        ));
        assert!(!is_solana_address(
            "O111111111111111111111111111111111111111111l"
        ));
        assert!(!is_solana_address(
            "+111111111111111111111111111111111111111111="
        ));
    }
}

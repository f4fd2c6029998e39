use crate::entity::{WalletError, WalletValuation};
use crate::price::PriceService;
use crate::solana::{is_solana_address, BalanceSource};
use log::info;

/// Values a wallet in strict sequence: validate the address, resolve the
/// lamport balance over RPC, resolve the SOL/USD rate, then format. A failure
/// at any step short-circuits the rest.
pub struct WalletValuer<B: BalanceSource, P: PriceService> {
    balance_source: B,
    price_service: P,
}

impl<B: BalanceSource, P: PriceService> WalletValuer<B, P> {
    pub fn new(balance_source: B, price_service: P) -> Self {
        Self {
            balance_source,
            price_service,
        }
    }

    pub async fn evaluate(&self, address: &str) -> Result<WalletValuation, WalletError> {
        if address.is_empty() {
            return Err(WalletError::MissingAddress);
        }

        if !is_solana_address(address) {
            return Err(WalletError::InvalidAddressFormat);
        }

        let lamports = self.balance_source.lamport_balance(address).await?;

        let sol_price = self.price_service.sol_usd_price().await?;

        info!("Valued {}: {} lamports at {} USD/SOL", address, lamports, sol_price);

        Ok(WalletValuation::from_lamports(address, lamports, sol_price))
    }
}

use crate::entity::WalletError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

/// Default CoinGecko simple-price endpoint, overridable via COINGECKO_API_URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

// Response shape: { "solana": { "usd": <number> } }
#[derive(Deserialize)]
struct SimplePriceResponse {
    solana: UsdQuote,
}

#[derive(Deserialize)]
struct UsdQuote {
    usd: f64,
}

/// Source of the current SOL/USD exchange rate
#[async_trait]
pub trait PriceService: Send + Sync {
    async fn sol_usd_price(&self) -> Result<f64, WalletError>;
}

/// Price service backed by the CoinGecko simple-price API
pub struct CoinGeckoPriceService {
    http_client: Client,
    api_url: String,
}

impl CoinGeckoPriceService {
    pub fn new(api_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            api_url: api_url.to_string(),
        }
    }
}

impl Default for CoinGeckoPriceService {
    fn default() -> Self {
        Self::new(COINGECKO_API_URL)
    }
}

#[async_trait]
impl PriceService for CoinGeckoPriceService {
    async fn sol_usd_price(&self) -> Result<f64, WalletError> {
        let url = format!(
            "{}/simple/price?ids=solana&vs_currencies=usd",
            self.api_url
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WalletError::PriceApi(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(WalletError::PriceApi(format!(
                "Unexpected status: {}",
                response.status()
            )));
        }

        let price_data: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| WalletError::PriceApi(format!("Failed to parse price response: {}", e)))?;

        debug!("SOL price: {} USD", price_data.solana.usd);

        Ok(price_data.solana.usd)
    }
}

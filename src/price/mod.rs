pub mod coingecko;

pub use coingecko::{CoinGeckoPriceService, PriceService, COINGECKO_API_URL};

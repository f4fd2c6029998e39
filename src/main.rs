//! Solana wallet valuer - Main executable
//!
//! Prints the SOL balance of a wallet address together with its USD value,
//! using a Solana RPC node for the balance and CoinGecko for the rate.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::env;
use wallet_valuer::price::{CoinGeckoPriceService, COINGECKO_API_URL};
use wallet_valuer::solana::{create_solana_client, RpcBalanceSource, MAINNET_RPC_URL};
use wallet_valuer::valuer::WalletValuer;
use wallet_valuer::view;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let address = match env::args().nth(1) {
        Some(address) => address,
        None => {
            println!("{}", view::usage_text());
            return Ok(());
        }
    };

    let rpc_url = env::var("SOLANA_RPC_URL").unwrap_or_else(|_| MAINNET_RPC_URL.to_string());
    let price_api_url =
        env::var("COINGECKO_API_URL").unwrap_or_else(|_| COINGECKO_API_URL.to_string());

    info!("Valuing wallet {} via {}", address, rpc_url);

    let solana_client =
        create_solana_client(&rpc_url).context("Failed to create Solana client")?;

    let valuer = WalletValuer::new(
        RpcBalanceSource::new(solana_client),
        CoinGeckoPriceService::new(&price_api_url),
    );

    // Errors surface as a single line on stdout, never as a partial result
    match valuer.evaluate(&address).await {
        Ok(valuation) => println!("{}", view::valuation_text(&valuation)),
        Err(e) => println!("{}", view::error_text(&e)),
    }

    Ok(())
}

//! Example: Fetching public market data from Wallex.
//!
//! This example uses only public endpoints, so no API key is needed.
//!
//! Run with: cargo run --example public_data
//! Set RUST_LOG=wallex_api_client=debug to see each request.

use time::{Duration, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use wallex_api_client::Resolution;
use wallex_api_client::rest::WallexClient;
use wallex_api_client::rest::public::CandlesRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = WallexClient::new();

    // Markets quoted in USDT
    println!("=== USDT Markets ===");
    let mut markets = client.markets().await?;
    markets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    for market in markets.iter().filter(|m| m.quote_asset == "USDT").take(5) {
        println!(
            "{}: last={} 24h={}% min_qty={}",
            market.symbol, market.stats.last_price, market.stats.change_24h, market.min_qty
        );
    }

    // Top currencies by market-cap rank
    println!("\n=== Currencies ===");
    let mut currencies = client.currencies().await?;
    currencies.sort_by_key(|c| c.rank.unwrap_or(u32::MAX));
    for currency in currencies.iter().take(5) {
        println!(
            "#{:?} {} ({}): price={}",
            currency.rank, currency.key, currency.name_en, currency.price
        );
    }

    // Order book
    println!("\n=== Order Book (BTCUSDT) ===");
    let book = client.order_book("BTCUSDT").await?;
    if let (Some(ask), Some(bid)) = (book.best_ask(), book.best_bid()) {
        println!("Best ask: {} @ {}", ask.quantity, ask.price);
        println!("Best bid: {} @ {}", bid.quantity, bid.price);
        if let (Some(ask), Some(bid)) = (ask.price.to_decimal(), bid.price.to_decimal()) {
            println!("Spread: {}", ask - bid);
        }
    }

    // Recent trades
    println!("\n=== Recent Trades (BTCUSDT) ===");
    for trade in client.market_trades("BTCUSDT").await?.iter().take(5) {
        println!("  {} @ {} ({:?})", trade.quantity, trade.price, trade.timestamp);
    }

    // Hourly candles for the last day
    println!("\n=== Candles (BTCUSDT, 1 hour) ===");
    let now = OffsetDateTime::now_utc();
    let request = CandlesRequest::new("BTCUSDT", Resolution::Hour, now - Duration::days(1), now);
    let candles = client.candles(&request).await?;
    for candle in candles.iter().rev().take(3) {
        println!(
            "  Time: {}, O: {}, H: {}, L: {}, C: {}, Vol: {}",
            candle.timestamp, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    Ok(())
}

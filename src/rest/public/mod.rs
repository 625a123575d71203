//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::error::WallexError;
use crate::rest::WallexClient;
use crate::rest::client::Envelope;
use crate::rest::endpoints::public;

#[derive(serde::Serialize)]
struct SymbolParams<'a> {
    symbol: &'a str,
}

impl WallexClient {
    /// Get all available markets and their stats.
    ///
    /// The server keys markets by symbol; they are returned as a flat list in
    /// no particular order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wallex_api_client::rest::WallexClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = WallexClient::new();
    ///     let markets = client.markets().await?;
    ///     for market in markets.iter().filter(|m| m.quote_asset == "USDT") {
    ///         println!("{} last={}", market.symbol, market.stats.last_price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn markets(&self) -> Result<Vec<Market>, WallexError> {
        #[derive(serde::Deserialize)]
        struct Markets {
            symbols: HashMap<String, Market>,
        }

        let envelope: Envelope<Markets> = self.public_get(public::MARKETS).await?;
        Ok(envelope.result.symbols.into_values().collect())
    }

    /// Get all available crypto-currencies and their stats.
    pub async fn currencies(&self) -> Result<Vec<Currency>, WallexError> {
        let envelope: Envelope<Vec<Currency>> = self.public_get(public::CURRENCIES).await?;
        Ok(envelope.result)
    }

    /// Get the order book for a market.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Market symbol (e.g., "BTCUSDT").
    pub async fn order_book(&self, symbol: &str) -> Result<OrderBook, WallexError> {
        let envelope: Envelope<OrderBook> = self
            .public_get_with_params(public::DEPTH, &SymbolParams { symbol })
            .await?;
        Ok(envelope.result)
    }

    /// Get the most recent trades in a market.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Market symbol (e.g., "BTCUSDT").
    pub async fn market_trades(&self, symbol: &str) -> Result<Vec<MarketTrade>, WallexError> {
        #[derive(serde::Deserialize)]
        struct LatestTrades {
            #[serde(rename = "latestTrades")]
            latest_trades: Vec<MarketTrade>,
        }

        let envelope: Envelope<LatestTrades> = self
            .public_get_with_params(public::TRADES, &SymbolParams { symbol })
            .await?;
        Ok(envelope.result.latest_trades)
    }

    /// Get OHLCV candles for a time interval.
    ///
    /// Unlike the other endpoints this one answers in TradingView UDF format
    /// (parallel `t`/`o`/`h`/`l`/`c`/`v` arrays) rather than a `result` envelope.
    ///
    /// # Arguments
    ///
    /// * `request` - Symbol, resolution and time bounds.
    pub async fn candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, WallexError> {
        let history: types::UdfHistory = self
            .public_get_with_params(public::UDF_HISTORY, request)
            .await?;
        Ok(history.into_candles())
    }
}

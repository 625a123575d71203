//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::serde_helpers::lenient_rfc3339;
use crate::types::{Number, Resolution};

/// Market information and 24h/7d statistics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Market {
    /// Market symbol (e.g. "BTCUSDT").
    pub symbol: String,
    /// Base asset.
    pub base_asset: String,
    /// Decimal places of the base asset.
    pub base_asset_precision: i32,
    /// Quote asset.
    pub quote_asset: String,
    /// Decimal places of the quote asset.
    pub quote_precision: i32,
    /// Persian market name.
    pub fa_name: String,
    /// Persian base asset name.
    pub fa_base_asset: String,
    /// Persian quote asset name.
    pub fa_quote_asset: String,
    /// Quantity step, as a number of decimals.
    pub step_size: i32,
    /// Price tick, as a number of decimals.
    pub tick_size: i32,
    /// Minimum order quantity.
    pub min_qty: Number,
    /// Minimum order value.
    pub min_notional: Number,
    /// Market statistics.
    pub stats: MarketStats,
    /// Listing time.
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub created_at: Option<OffsetDateTime>,
}

/// Rolling statistics for a market.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketStats {
    /// Best bid price.
    pub bid_price: Number,
    /// Best ask price.
    pub ask_price: Number,
    /// 24h change in percent.
    #[serde(rename = "24h_ch")]
    pub change_24h: Number,
    /// 7d change in percent.
    #[serde(rename = "7d_ch")]
    pub change_7d: Number,
    /// 24h base volume.
    #[serde(rename = "24h_volume")]
    pub volume_24h: Number,
    /// 7d base volume.
    #[serde(rename = "7d_volume")]
    pub volume_7d: Number,
    /// 24h quote volume.
    #[serde(rename = "24h_quoteVolume")]
    pub quote_volume_24h: Number,
    /// 24h high.
    #[serde(rename = "24h_highPrice")]
    pub high_price_24h: Number,
    /// 24h low.
    #[serde(rename = "24h_lowPrice")]
    pub low_price_24h: Number,
    /// Last trade price.
    pub last_price: Number,
    /// Last trade quantity.
    pub last_qty: Number,
    /// Side of the last trade ("BUY" or "SELL").
    pub last_trade_side: String,
    /// Total bid volume on the book.
    pub bid_volume: Number,
    /// Total ask volume on the book.
    pub ask_volume: Number,
    /// Number of bid levels.
    pub bid_count: Number,
    /// Number of ask levels.
    pub ask_count: Number,
    /// Recent buy/sell split.
    pub direction: TradeDirection,
}

/// Buy/sell split of recent trades.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct TradeDirection {
    /// Sell share.
    pub sell: i64,
    /// Buy share.
    pub buy: i64,
}

/// Crypto-currency information and price statistics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Currency {
    /// Currency key (e.g. "BTC").
    pub key: String,
    /// Persian name.
    pub name: String,
    /// English name.
    pub name_en: String,
    /// Market-cap rank.
    pub rank: Option<u32>,
    pub dominance: Number,
    pub volume_24h: Number,
    pub market_cap: Number,
    /// All-time high price.
    pub ath: Number,
    pub ath_change_percentage: Number,
    /// Time of the all-time high.
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub ath_date: Option<OffsetDateTime>,
    pub price: Number,
    pub daily_high_price: Number,
    pub daily_low_price: Number,
    pub weekly_high_price: Number,
    pub weekly_low_price: Number,
    pub percent_change_1h: Number,
    pub percent_change_24h: Number,
    pub percent_change_7d: Number,
    pub percent_change_14d: Number,
    pub percent_change_30d: Number,
    pub percent_change_60d: Number,
    pub percent_change_200d: Number,
    pub percent_change_1y: Number,
    pub price_change_24h: Number,
    pub price_change_7d: Number,
    pub price_change_14d: Number,
    pub price_change_30d: Number,
    pub price_change_60d: Number,
    pub price_change_200d: Number,
    pub price_change_1y: Number,
    pub max_supply: Number,
    pub total_supply: Number,
    pub circulating_supply: Number,
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub updated_at: Option<OffsetDateTime>,
}

/// A single price level in the order book.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderBookEntry {
    /// Price level.
    pub price: Number,
    /// Quantity at this level.
    pub quantity: Number,
    /// Price × quantity.
    pub sum: Number,
}

/// Order book for a market.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    /// Ask levels.
    pub ask: Vec<OrderBookEntry>,
    /// Bid levels.
    pub bid: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// The first ask level, if any.
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.ask.first()
    }

    /// The first bid level, if any.
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bid.first()
    }
}

/// A public trade in a market.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketTrade {
    /// Market symbol.
    pub symbol: String,
    /// Traded quantity.
    pub quantity: Number,
    /// Trade price.
    pub price: Number,
    /// Price × quantity.
    pub sum: Number,
    /// Execution time.
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub timestamp: Option<OffsetDateTime>,
}

/// Request parameters for OHLCV candles.
#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct CandlesRequest {
    /// Market symbol.
    pub symbol: String,
    /// Candle resolution.
    pub resolution: Resolution,
    /// Start of the interval (sent as Unix seconds).
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub from: OffsetDateTime,
    /// End of the interval (sent as Unix seconds).
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub to: OffsetDateTime,
}

impl CandlesRequest {
    /// Create a new candles request.
    pub fn new(
        symbol: impl Into<String>,
        resolution: Resolution,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            resolution,
            from,
            to,
        }
    }
}

/// An OHLCV candle.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Candle open time.
    pub timestamp: OffsetDateTime,
    pub open: Number,
    pub high: Number,
    pub low: Number,
    pub close: Number,
    pub volume: Number,
}

/// Column-oriented candle history in TradingView UDF format.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub(super) struct UdfHistory {
    #[serde_as(as = "Vec<TimestampSeconds<i64>>")]
    #[serde(default)]
    pub(super) t: Vec<OffsetDateTime>,
    #[serde(default)]
    pub(super) o: Vec<Number>,
    #[serde(default)]
    pub(super) h: Vec<Number>,
    #[serde(default)]
    pub(super) l: Vec<Number>,
    #[serde(default)]
    pub(super) c: Vec<Number>,
    #[serde(default)]
    pub(super) v: Vec<Number>,
}

impl UdfHistory {
    /// Zip the columns into candles, one per timestamp.
    ///
    /// A column shorter than `t` yields absent values for the missing rows.
    pub(super) fn into_candles(self) -> Vec<Candle> {
        let mut open = self.o.into_iter();
        let mut high = self.h.into_iter();
        let mut low = self.l.into_iter();
        let mut close = self.c.into_iter();
        let mut volume = self.v.into_iter();

        self.t
            .into_iter()
            .map(|timestamp| Candle {
                timestamp,
                open: open.next().unwrap_or_default(),
                high: high.next().unwrap_or_default(),
                low: low.next().unwrap_or_default(),
                close: close.next().unwrap_or_default(),
                volume: volume.next().unwrap_or_default(),
            })
            .collect()
    }
}

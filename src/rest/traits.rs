//! Trait definition for the Wallex REST API client.
//!
//! This module provides the `WallexApi` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., caching or metrics wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use wallex_api_client::rest::{WallexApi, WallexClient};
//!
//! async fn total_locked<C: WallexApi>(client: &C) -> Result<f64, wallex_api_client::WallexError> {
//!     let balances = client.balances().await?;
//!     Ok(balances.values().map(|b| b.locked.as_f64()).sum())
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use crate::error::WallexError;
use crate::rest::private::{
    Balance, BankAccount, BankingCard, FeeLevel, OpenOrdersRequest, Order, OrderParams, Profile,
    Trade, TradesRequest,
};
use crate::rest::public::{Candle, CandlesRequest, Currency, Market, MarketTrade, OrderBook};

/// Trait defining all Wallex REST API operations.
///
/// All methods are async and return `Result<T, WallexError>`.
pub trait WallexApi: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get all markets and their stats.
    fn markets(&self) -> impl Future<Output = Result<Vec<Market>, WallexError>> + Send;

    /// Get all crypto-currencies and their stats.
    fn currencies(&self) -> impl Future<Output = Result<Vec<Currency>, WallexError>> + Send;

    /// Get the order book for a market.
    fn order_book(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<OrderBook, WallexError>> + Send;

    /// Get recent trades in a market.
    fn market_trades(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Vec<MarketTrade>, WallexError>> + Send;

    /// Get OHLCV candles.
    fn candles(
        &self,
        request: &CandlesRequest,
    ) -> impl Future<Output = Result<Vec<Candle>, WallexError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the account profile.
    fn profile(&self) -> impl Future<Output = Result<Profile, WallexError>> + Send;

    /// Get balances keyed by asset.
    fn balances(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, Balance>, WallexError>> + Send;

    /// Get fee levels keyed by market.
    fn fee_levels(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, FeeLevel>, WallexError>> + Send;

    /// Get banking cards.
    fn banking_cards(&self) -> impl Future<Output = Result<Vec<BankingCard>, WallexError>> + Send;

    /// Get bank accounts.
    fn bank_accounts(&self) -> impl Future<Output = Result<Vec<BankAccount>, WallexError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place a new order.
    fn place_order(
        &self,
        params: &OrderParams,
    ) -> impl Future<Output = Result<Order, WallexError>> + Send;

    /// Cancel an order by client order id.
    fn cancel_order(
        &self,
        client_order_id: &str,
    ) -> impl Future<Output = Result<(), WallexError>> + Send;

    /// Get an order by client order id.
    fn order(
        &self,
        client_order_id: &str,
    ) -> impl Future<Output = Result<Order, WallexError>> + Send;

    /// Get open orders.
    fn open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> impl Future<Output = Result<Vec<Order>, WallexError>> + Send;

    /// Get the account's recent trades.
    fn trades(
        &self,
        request: Option<&TradesRequest>,
    ) -> impl Future<Output = Result<Vec<Trade>, WallexError>> + Send;
}

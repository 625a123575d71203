//! Blocking Wallex client.
//!
//! [`WallexClient`] wraps the async [`rest::WallexClient`](crate::rest::WallexClient)
//! and drives it on a runtime it owns, so every method blocks the calling
//! thread until the HTTP exchange completes or fails.
//!
//! The client is cheap to clone and may be shared between threads. It must
//! not be used from within an async context; use the async client there.
//!
//! ```rust,no_run
//! use wallex_api_client::blocking::WallexClient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WallexClient::new()?;
//!     let trades = client.market_trades("BTCUSDT")?;
//!     println!("{} recent trades", trades.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::error::WallexError;
use crate::rest::private::{
    Balance, BankAccount, BankingCard, FeeLevel, OpenOrdersRequest, Order, OrderParams, Profile,
    Trade, TradesRequest,
};
use crate::rest::public::{Candle, CandlesRequest, Currency, Market, MarketTrade, OrderBook};
use crate::rest::{self, WallexClientBuilder};

/// A blocking Wallex client.
#[derive(Clone)]
pub struct WallexClient {
    inner: rest::WallexClient,
    runtime: Arc<Runtime>,
}

impl WallexClient {
    /// Create a new client with default settings.
    ///
    /// The API key is taken from `WALLEX_API_KEY` when that variable is set.
    pub fn new() -> Result<Self, WallexError> {
        Self::from_async(rest::WallexClient::new())
    }

    /// Create a client from a configured builder.
    pub fn from_builder(builder: WallexClientBuilder) -> Result<Self, WallexError> {
        Self::from_async(builder.build())
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: rest::WallexClient) -> Result<Self, WallexError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("wallex-blocking")
            .enable_all()
            .build()?;

        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// The async client behind this one.
    pub fn as_async(&self) -> &rest::WallexClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Get all markets and their stats.
    pub fn markets(&self) -> Result<Vec<Market>, WallexError> {
        self.block_on(self.inner.markets())
    }

    /// Get all crypto-currencies and their stats.
    pub fn currencies(&self) -> Result<Vec<Currency>, WallexError> {
        self.block_on(self.inner.currencies())
    }

    /// Get the order book for a market.
    pub fn order_book(&self, symbol: &str) -> Result<OrderBook, WallexError> {
        self.block_on(self.inner.order_book(symbol))
    }

    /// Get recent trades in a market.
    pub fn market_trades(&self, symbol: &str) -> Result<Vec<MarketTrade>, WallexError> {
        self.block_on(self.inner.market_trades(symbol))
    }

    /// Get OHLCV candles.
    pub fn candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, WallexError> {
        self.block_on(self.inner.candles(request))
    }

    /// Get the account profile.
    pub fn profile(&self) -> Result<Profile, WallexError> {
        self.block_on(self.inner.profile())
    }

    /// Get balances keyed by asset.
    pub fn balances(&self) -> Result<HashMap<String, Balance>, WallexError> {
        self.block_on(self.inner.balances())
    }

    /// Get fee levels keyed by market.
    pub fn fee_levels(&self) -> Result<HashMap<String, FeeLevel>, WallexError> {
        self.block_on(self.inner.fee_levels())
    }

    /// Get banking cards.
    pub fn banking_cards(&self) -> Result<Vec<BankingCard>, WallexError> {
        self.block_on(self.inner.banking_cards())
    }

    /// Get bank accounts.
    pub fn bank_accounts(&self) -> Result<Vec<BankAccount>, WallexError> {
        self.block_on(self.inner.bank_accounts())
    }

    /// Place a new order.
    pub fn place_order(&self, params: &OrderParams) -> Result<Order, WallexError> {
        self.block_on(self.inner.place_order(params))
    }

    /// Cancel an order by client order id.
    pub fn cancel_order(&self, client_order_id: &str) -> Result<(), WallexError> {
        self.block_on(self.inner.cancel_order(client_order_id))
    }

    /// Get an order by client order id.
    pub fn order(&self, client_order_id: &str) -> Result<Order, WallexError> {
        self.block_on(self.inner.order(client_order_id))
    }

    /// Get open orders.
    pub fn open_orders(&self, request: Option<&OpenOrdersRequest>) -> Result<Vec<Order>, WallexError> {
        self.block_on(self.inner.open_orders(request))
    }

    /// Get the account's recent trades.
    pub fn trades(&self, request: Option<&TradesRequest>) -> Result<Vec<Trade>, WallexError> {
        self.block_on(self.inner.trades(request))
    }
}

impl std::fmt::Debug for WallexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::WallexClient")
            .field("inner", &self.inner)
            .finish()
    }
}

//! Wallex REST API endpoint constants.

/// Base URL for the Wallex REST API.
pub const WALLEX_BASE_URL: &str = "https://api.wallex.ir";

/// Public endpoints (no authentication required).
pub mod public {
    /// List markets and their stats.
    pub const MARKETS: &str = "/v1/markets";
    /// List currencies and their stats.
    pub const CURRENCIES: &str = "/v1/currencies/stats";
    /// Get order book depth.
    pub const DEPTH: &str = "/v1/depth";
    /// Get recent public trades.
    pub const TRADES: &str = "/v1/trades";
    /// Get OHLCV candles (TradingView UDF).
    pub const UDF_HISTORY: &str = "/v1/udf/history";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account profile.
    pub const PROFILE: &str = "/v1/account/profile";
    /// Get account balances.
    pub const BALANCES: &str = "/v1/account/balances";
    /// Get fee levels.
    pub const FEE: &str = "/v1/account/fee";
    /// List banking cards.
    pub const CARD_NUMBERS: &str = "/v1/account/card-numbers";
    /// List bank accounts.
    pub const IBANS: &str = "/v1/account/ibans";
    /// Place, cancel and query orders.
    pub const ORDERS: &str = "/v1/account/orders";
    /// List open orders.
    pub const OPEN_ORDERS: &str = "/v1/account/openOrders";
    /// List the account's recent trades.
    pub const TRADES: &str = "/v1/account/trades";
}

//! Types for private REST API endpoints.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::serde_helpers::{empty_string_as_none, is_blank, lenient_rfc3339};
use crate::types::{Number, OrderSide, OrderType};

// ============================================================================
// Account
// ============================================================================

/// A Wallex account profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub tracking_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub face_image: String,
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub birthday: Option<OffsetDateTime>,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub mobile_number: String,
    /// Verification state of the account.
    pub verification: String,
    pub email: String,
    pub invite_code: String,
    pub avatar: Option<String>,
    pub commission: i64,
    pub settings: Settings,
    /// Review state of each profile field.
    pub status: ProfileStatus,
    pub kyc_info: KycInfo,
    pub meta: ProfileMeta,
}

/// Postal address; every part may be unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub house_number: Option<String>,
}

/// Landline number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    pub area_code: String,
    pub main_number: String,
}

/// Account preferences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub mode: String,
    pub order_submit_confirm: bool,
    pub order_delete_confirm: bool,
    pub default_mode: bool,
    pub favorite_markets: Vec<String>,
    pub choose_trading_type: bool,
    pub coin_deposit: bool,
    pub coin_withdraw: bool,
    pub money_deposit: bool,
    pub money_withdraw: bool,
    pub logins: bool,
    pub trade: bool,
    pub api_key_expiration: bool,
    pub notification: Notification,
}

/// Notification preferences per delivery channel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub email: NotificationChannel,
    pub announcement: NotificationChannel,
    pub push: NotificationChannel,
}

/// One notification channel and its per-event switches.
///
/// Actions are keyed by event name (`coin_deposit`, `logins`, `price_alert`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationChannel {
    pub is_enable: bool,
    pub actions: BTreeMap<String, NotificationAction>,
    pub label: String,
}

impl NotificationChannel {
    /// Returns true if the channel and the given action are both enabled.
    pub fn is_action_enabled(&self, action: &str) -> bool {
        self.is_enable && self.actions.get(action).is_some_and(|a| a.is_enable)
    }
}

/// A single notification switch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationAction {
    pub is_enable: bool,
    pub label: String,
}

/// Review state of each profile field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileStatus {
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub national_card_image: String,
    pub face_image: String,
    pub birthday: String,
    pub address: String,
    pub phone_number: String,
    pub mobile_number: String,
    pub email: String,
}

/// KYC progress.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KycInfo {
    pub details: KycDetails,
    pub level: i32,
}

/// Completed KYC steps.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct KycDetails {
    pub mobile_activation: bool,
    pub personal_info: bool,
    pub financial_info: bool,
    pub phone_number: bool,
    pub national_card: bool,
    pub face_recognition: bool,
    pub admin_approval: bool,
}

/// Extra account metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileMeta {
    pub disabled_features: Vec<String>,
}

/// Holdings for one asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Balance {
    /// Asset symbol.
    pub asset: String,
    /// Persian asset name.
    #[serde(rename = "faName")]
    pub fa_name: String,
    /// Whether this is a fiat asset.
    pub fiat: bool,
    /// Total holdings.
    pub value: Number,
    /// Amount locked in open orders.
    pub locked: Number,
}

/// One named tier of the fee schedule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedFeeLevel {
    pub maker_fee: Number,
    pub taker_fee: Number,
    pub name: Number,
}

/// Fee schedule for a market and the account's current tier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeeLevel {
    /// All tiers, keyed by tier threshold.
    pub levels: HashMap<String, NamedFeeLevel>,
    /// Length of the look-back window in days.
    pub recent_days: i32,
    /// Traded volume in the look-back window.
    pub recent_days_sum: Number,
    /// Current maker fee.
    pub maker_fee: Number,
    /// Current taker fee.
    pub taker_fee: Number,
    /// Whether the fee is fixed regardless of volume.
    pub is_fixed: bool,
}

/// A registered banking card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BankingCard {
    pub id: i64,
    pub card_number: String,
    pub owners: Vec<String>,
    pub status: String,
    /// Non-zero for the default card.
    pub is_default: i32,
}

/// A registered bank account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    pub id: i64,
    pub iban: String,
    pub owners: Vec<String>,
    pub bank_name: String,
    pub status: String,
    /// Non-zero for the default account.
    pub is_default: i32,
    pub bank_details: BankDetails,
}

/// Bank identification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    pub code: String,
    pub label: String,
}

// ============================================================================
// Orders and trades
// ============================================================================

/// Request parameters to place an order.
///
/// Only fields that carry a value are sent: an absent price or quantity and a
/// missing or empty client id are left out of the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderParams {
    /// Market symbol.
    pub symbol: String,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side.
    pub side: OrderSide,
    /// Limit price.
    #[serde(skip_serializing_if = "Number::is_absent")]
    pub price: Number,
    /// Order quantity.
    #[serde(skip_serializing_if = "Number::is_absent")]
    pub quantity: Number,
    /// Caller-chosen identifier, used later to query or cancel the order.
    #[serde(skip_serializing_if = "is_blank")]
    pub client_id: Option<String>,
}

impl OrderParams {
    /// Create a limit order.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        price: impl Into<Number>,
        quantity: impl Into<Number>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            side,
            price: price.into(),
            quantity: quantity.into(),
            client_id: None,
        }
    }

    /// Create a market order.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: impl Into<Number>) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side,
            price: Number::absent(),
            quantity: quantity.into(),
            client_id: None,
        }
    }

    /// Set the client order id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// A placed order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Market symbol.
    #[serde(default)]
    pub symbol: String,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side.
    pub side: OrderSide,
    /// Limit price.
    #[serde(default)]
    pub price: Number,
    /// Original quantity.
    #[serde(default)]
    pub orig_qty: Number,
    /// Original value (price × quantity).
    #[serde(default)]
    pub orig_sum: Number,
    /// Average execution price, once filled.
    #[serde(default)]
    pub executed_price: Option<Number>,
    /// Filled quantity.
    #[serde(default)]
    pub executed_qty: Option<Number>,
    /// Filled value.
    #[serde(default)]
    pub executed_sum: Option<Number>,
    /// Filled percentage.
    #[serde(default)]
    pub executed_percent: Option<Number>,
    /// Order status (e.g. "NEW", "FILLED", "CANCELED").
    #[serde(default)]
    pub status: String,
    /// Whether the order is still on the book.
    #[serde(default)]
    pub active: bool,
    /// Client order id.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub client_order_id: Option<String>,
    /// Creation time.
    #[serde(
        rename = "created_at",
        deserialize_with = "lenient_rfc3339::deserialize",
        default
    )]
    pub created_at: Option<OffsetDateTime>,
}

/// Request parameters for open orders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenOrdersRequest {
    /// Restrict to one market; all markets when unset.
    #[serde(skip_serializing_if = "is_blank")]
    pub symbol: Option<String>,
}

impl OpenOrdersRequest {
    /// Create a request for one market.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

/// Request parameters for the account's trade history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradesRequest {
    /// Restrict to one market; all markets when unset.
    #[serde(skip_serializing_if = "is_blank")]
    pub symbol: Option<String>,
    /// Restrict to one side; both sides when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
}

impl TradesRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by market.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Filter by side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }
}

/// A fulfilled trade on the account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trade {
    /// Market symbol.
    pub symbol: String,
    /// Traded quantity.
    pub quantity: Number,
    /// Trade price.
    pub price: Number,
    /// Price × quantity.
    pub sum: Number,
    /// Fee charged.
    pub fee: Number,
    /// Fee rate.
    pub fee_coefficient: Number,
    /// Asset the fee was charged in.
    pub fee_asset: String,
    /// Whether the account was the buyer.
    pub is_buyer: bool,
    /// Execution time.
    #[serde(deserialize_with = "lenient_rfc3339::deserialize")]
    pub timestamp: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_market_order_omits_price_and_client_id() {
        let params = OrderParams::market("BTCUSDT", OrderSide::Sell, "0.5");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "symbol": "BTCUSDT",
                "type": "MARKET",
                "side": "SELL",
                "quantity": "0.5"
            })
        );
    }

    #[test]
    fn test_empty_client_id_is_omitted() {
        let params = OrderParams::limit("BTCUSDT", OrderSide::Buy, "100", "2").client_id("");
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("client_id").is_none());
        assert_eq!(json["price"], "100");
    }

    #[test]
    fn test_limit_order_from_decimal() {
        let price = Decimal::from_str("64000.10").unwrap();
        let params = OrderParams::limit("BTCUSDT", OrderSide::Buy, price, 0.25).client_id("my-1");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "symbol": "BTCUSDT",
                "type": "LIMIT",
                "side": "BUY",
                "price": "64000.10",
                "quantity": "0.250000",
                "client_id": "my-1"
            })
        );
    }

    #[test]
    fn test_order_decoding() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "type": "LIMIT",
            "side": "BUY",
            "price": "64000",
            "origQty": 0.001,
            "origSum": "64",
            "executedPrice": null,
            "executedQty": "0",
            "executedSum": "0",
            "executedPercent": 0,
            "status": "NEW",
            "active": true,
            "clientOrderId": "",
            "created_at": "2023-11-14T22:13:20Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.orig_qty.as_str(), "0.001000");
        assert!(order.executed_price.is_none());
        assert_eq!(order.executed_percent.unwrap().as_str(), "0.000000");
        assert!(order.client_order_id.is_none());
        assert_eq!(order.created_at.unwrap().unix_timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_notification_actions() {
        let json = r#"{
            "is_enable": true,
            "actions": {
                "logins": {"is_enable": true, "label": "Logins"},
                "trade": {"is_enable": false, "label": "Trade"}
            },
            "label": "Email"
        }"#;

        let channel: NotificationChannel = serde_json::from_str(json).unwrap();
        assert!(channel.is_action_enabled("logins"));
        assert!(!channel.is_action_enabled("trade"));
        assert!(!channel.is_action_enabled("price_alert"));
    }

    #[test]
    fn test_trades_request_query() {
        assert_eq!(serde_urlencoded::to_string(TradesRequest::new()).unwrap(), "");
        assert_eq!(
            serde_urlencoded::to_string(TradesRequest::new().symbol("ETHUSDT").side(OrderSide::Sell))
                .unwrap(),
            "symbol=ETHUSDT&side=SELL"
        );
        assert_eq!(
            serde_urlencoded::to_string(OpenOrdersRequest::default()).unwrap(),
            ""
        );
    }
}

use std::sync::Arc;

use wiremock::matchers::{any, body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wallex_api_client::auth::StaticCredentials;
use wallex_api_client::rest::private::{OpenOrdersRequest, OrderParams, TradesRequest};
use wallex_api_client::rest::{WallexApi, WallexClient};
use wallex_api_client::{OrderSide, OrderType, WallexError};

const TEST_KEY: &str = "test-api-key";

fn build_client(server: &MockServer) -> WallexClient {
    WallexClient::builder()
        .base_url(server.uri())
        .api_key(TEST_KEY)
        .build()
}

fn build_client_without_key(server: &MockServer) -> WallexClient {
    WallexClient::builder()
        .base_url(server.uri())
        .api_key_env("WALLEX_TEST_UNSET_PRIVATE")
        .build()
}

fn order_json() -> serde_json::Value {
    serde_json::json!({
        "symbol": "BTCUSDT",
        "type": "LIMIT",
        "side": "BUY",
        "price": "64000.5",
        "origQty": "0.01",
        "origSum": "640.005",
        "executedPrice": "0",
        "executedQty": 0,
        "executedSum": "0",
        "executedPercent": 0,
        "status": "NEW",
        "active": true,
        "clientOrderId": "my-order-1",
        "created_at": "2024-03-01T08:30:00Z"
    })
}

#[tokio::test]
async fn test_missing_api_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client_without_key(&server);
    assert!(!client.has_credentials());

    let order = OrderParams::market("BTCUSDT", OrderSide::Sell, "0.5");

    assert!(matches!(client.profile().await, Err(WallexError::MissingApiKey)));
    assert!(matches!(client.balances().await, Err(WallexError::MissingApiKey)));
    assert!(matches!(client.fee_levels().await, Err(WallexError::MissingApiKey)));
    assert!(matches!(
        client.banking_cards().await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.bank_accounts().await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.place_order(&order).await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.cancel_order("my-order-1").await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.order("my-order-1").await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.open_orders(None).await,
        Err(WallexError::MissingApiKey)
    ));
    assert!(matches!(
        client.trades(None).await,
        Err(WallexError::MissingApiKey)
    ));

    let err = client.profile().await.unwrap_err();
    assert_eq!(err.to_string(), "missing api key");
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_api_key_env_fallback() {
    // Cargo sets CARGO_PKG_NAME for test runs, so nothing here writes the environment.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/ibans"))
        .and(header("x-api-key", env!("CARGO_PKG_NAME")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = WallexClient::builder()
        .base_url(server.uri())
        .api_key_env("CARGO_PKG_NAME")
        .build();
    assert!(client.has_credentials());

    let accounts = client.bank_accounts().await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_explicit_key_wins_over_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/card-numbers"))
        .and(header("x-api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [{
                "id": 7,
                "card_number": "603799******1234",
                "owners": ["Sara Ahmadi"],
                "status": "APPROVED",
                "is_default": 1
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WallexClient::builder()
        .base_url(server.uri())
        .api_key_env("CARGO_PKG_NAME")
        .api_key(TEST_KEY)
        .build();

    let cards = client.banking_cards().await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 7);
    assert_eq!(cards[0].is_default, 1);
}

#[tokio::test]
async fn test_credentials_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/profile"))
        .and(header("x-api-key", "provider-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "tracking_id": 1024,
                "first_name": "Sara",
                "last_name": "Ahmadi",
                "email": "sara@example.com",
                "phone_number": {"area_code": "021", "main_number": "88888888"},
                "settings": {
                    "theme": "dark",
                    "favorite_markets": ["BTCUSDT"],
                    "notification": {
                        "email": {
                            "is_enable": true,
                            "actions": {"login": {"is_enable": true, "label": "Login"}},
                            "label": "Email"
                        }
                    }
                },
                "kyc_info": {"details": {"mobile_activation": true}, "level": 2},
                "meta": {"disabled_features": []}
            }
        })))
        .mount(&server)
        .await;

    let client = WallexClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("provider-key")))
        .build();

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.tracking_id, 1024);
    assert_eq!(profile.first_name, "Sara");
    assert_eq!(profile.phone_number.area_code, "021");
    assert_eq!(profile.settings.favorite_markets, vec!["BTCUSDT"]);
    assert!(profile.settings.notification.email.is_action_enabled("login"));
    assert!(!profile.settings.notification.push.is_action_enabled("login"));
    assert_eq!(profile.kyc_info.level, 2);
    assert!(profile.kyc_info.details.mobile_activation);
}

#[tokio::test]
async fn test_balances_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .and(header("x-api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "balances": {
                    "BTC": {"asset": "BTC", "faName": "بیت کوین", "fiat": false, "value": "0.015", "locked": "0"},
                    "TMN": {"asset": "TMN", "faName": "تومان", "fiat": true, "value": 1500000, "locked": null}
                }
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balances = client.balances().await.unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances["BTC"].value.as_str(), "0.015");
    assert!(!balances["BTC"].fiat);
    assert!(balances["TMN"].fiat);
    assert_eq!(balances["TMN"].value.as_f64(), 1_500_000.0);
    assert!(balances["TMN"].locked.is_absent());
}

#[tokio::test]
async fn test_fee_levels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "BTCUSDT": {
                    "levels": {
                        "1": {"maker_fee": "0.2", "taker_fee": "0.25", "name": 1}
                    },
                    "recent_days": 30,
                    "recent_days_sum": 0,
                    "maker_fee": "0.2",
                    "taker_fee": "0.25",
                    "is_fixed": false
                }
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let fees = client.fee_levels().await.unwrap();

    let btc = &fees["BTCUSDT"];
    assert_eq!(btc.recent_days, 30);
    assert_eq!(btc.taker_fee.as_str(), "0.25");
    assert_eq!(btc.levels["1"].maker_fee.as_f64(), 0.2);
}

#[tokio::test]
async fn test_place_limit_order_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/account/orders"))
        .and(header("x-api-key", TEST_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "symbol": "BTCUSDT",
            "type": "LIMIT",
            "side": "BUY",
            "price": "64000.5",
            "quantity": "0.01"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"result": order_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = OrderParams::limit("BTCUSDT", OrderSide::Buy, "64000.5", "0.01");
    let order = client.place_order(&params).await.unwrap();

    assert_eq!(order.order_type, OrderType::Limit);
    assert_eq!(order.side, OrderSide::Buy);
    assert_eq!(order.orig_qty.as_str(), "0.01");
    assert_eq!(order.status, "NEW");
    assert!(order.active);
    assert_eq!(order.client_order_id.as_deref(), Some("my-order-1"));
    assert!(order.created_at.is_some());
}

#[tokio::test]
async fn test_place_market_order_with_client_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/account/orders"))
        .and(body_json(serde_json::json!({
            "symbol": "USDTTMN",
            "type": "MARKET",
            "side": "SELL",
            "quantity": "25",
            "client_id": "sell-25"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": order_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = OrderParams::market("USDTTMN", OrderSide::Sell, "25").client_id("sell-25");
    client.place_order(&params).await.unwrap();
}

#[tokio::test]
async fn test_rejected_order_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/account/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "Insufficient balance",
            "success": false
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = OrderParams::limit("BTCUSDT", OrderSide::Buy, 64000.5, 10.0);
    let err = client.place_order(&params).await.unwrap_err();

    assert!(matches!(err, WallexError::BadRequest));
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/account/orders"))
        .and(query_param("clientOrderId", "my-order-1"))
        .and(header("x-api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string("not even json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.cancel_order("my-order-1").await.unwrap();
}

#[tokio::test]
async fn test_cancel_unknown_order_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/account/orders"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.cancel_order("missing").await.unwrap_err();
    assert!(matches!(err, WallexError::NotFound));
}

#[tokio::test]
async fn test_get_order_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/orders/my-order-1"))
        .and(header("x-api-key", TEST_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": order_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.order("my-order-1").await.unwrap();

    assert_eq!(order.symbol, "BTCUSDT");
    assert_eq!(order.executed_qty.as_ref().map(|q| q.as_str()), Some("0.000000"));
}

#[tokio::test]
async fn test_get_order_id_is_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/orders/a%2Fb"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": order_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.order("a/b").await.unwrap();
}

#[tokio::test]
async fn test_open_orders_all_markets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/openOrders"))
        .and(query_param_is_missing("symbol"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"orders": [order_json(), order_json()]}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.open_orders(None).await.unwrap();
    assert_eq!(orders.len(), 2);

    // A blank symbol filter is the same as no filter.
    let blank = OpenOrdersRequest::default();
    let orders = client.open_orders(Some(&blank)).await.unwrap();
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn test_open_orders_for_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/openOrders"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"orders": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OpenOrdersRequest::for_symbol("BTCUSDT");
    let orders = client.open_orders(Some(&request)).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_account_trades_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/trades"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "SELL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "AccountLatestTrades": [{
                    "symbol": "BTCUSDT",
                    "quantity": "0.002",
                    "price": "64100",
                    "sum": "128.2",
                    "fee": "0.3205",
                    "feeCoefficient": "0.0025",
                    "feeAsset": "USDT",
                    "isBuyer": false,
                    "timestamp": "2024-03-01T09:00:00Z"
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = TradesRequest::new().symbol("BTCUSDT").side(OrderSide::Sell);
    let trades = client.trades(Some(&request)).await.unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].fee_asset, "USDT");
    assert_eq!(trades[0].fee_coefficient.as_str(), "0.0025");
    assert!(!trades[0].is_buyer);
}

#[tokio::test]
async fn test_account_trades_unfiltered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/trades"))
        .and(query_param_is_missing("symbol"))
        .and(query_param_is_missing("side"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"AccountLatestTrades": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.trades(None).await.unwrap();
    assert!(trades.is_empty());
}

#[tokio::test]
async fn test_unauthorized_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.balances().await.unwrap_err();
    assert!(matches!(err, WallexError::Unauthorized));
}

async fn open_order_count<C: WallexApi>(client: &C) -> Result<usize, WallexError> {
    Ok(client.open_orders(None).await?.len())
}

#[tokio::test]
async fn test_trait_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/openOrders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"orders": [order_json()]}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(open_order_count(&client).await.unwrap(), 1);
}

//! Private REST API endpoints (authentication required).
//!
//! These endpoints require an API key to be configured on the client. Without
//! one they fail with [`WallexError::MissingApiKey`] before any request is sent.

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::error::WallexError;
use crate::rest::WallexClient;
use crate::rest::client::Envelope;
use crate::rest::endpoints::private;

impl WallexClient {
    /// Get the account profile.
    pub async fn profile(&self) -> Result<Profile, WallexError> {
        let envelope: Envelope<Profile> = self.private_get(private::PROFILE).await?;
        Ok(envelope.result)
    }

    /// Get account balances, keyed by asset.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wallex_api_client::rest::WallexClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = WallexClient::builder().api_key("key").build();
    ///
    ///     let balances = client.balances().await?;
    ///     for (asset, balance) in balances {
    ///         println!("{}: {} (locked {})", asset, balance.value, balance.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn balances(&self) -> Result<HashMap<String, Balance>, WallexError> {
        #[derive(serde::Deserialize)]
        struct Balances {
            balances: HashMap<String, Balance>,
        }

        let envelope: Envelope<Balances> = self.private_get(private::BALANCES).await?;
        Ok(envelope.result.balances)
    }

    /// Get fee levels, keyed by market symbol.
    pub async fn fee_levels(&self) -> Result<HashMap<String, FeeLevel>, WallexError> {
        let envelope: Envelope<HashMap<String, FeeLevel>> =
            self.private_get(private::FEE).await?;
        Ok(envelope.result)
    }

    /// Get the account's banking cards.
    pub async fn banking_cards(&self) -> Result<Vec<BankingCard>, WallexError> {
        let envelope: Envelope<Vec<BankingCard>> =
            self.private_get(private::CARD_NUMBERS).await?;
        Ok(envelope.result)
    }

    /// Get the account's bank accounts.
    pub async fn bank_accounts(&self) -> Result<Vec<BankAccount>, WallexError> {
        let envelope: Envelope<Vec<BankAccount>> = self.private_get(private::IBANS).await?;
        Ok(envelope.result)
    }

    /// Place a new order.
    ///
    /// # Arguments
    ///
    /// * `params` - Order parameters, sent as a JSON body.
    pub async fn place_order(&self, params: &OrderParams) -> Result<Order, WallexError> {
        let envelope: Envelope<Order> = self.private_post_json(private::ORDERS, params).await?;
        Ok(envelope.result)
    }

    /// Cancel a placed order by its client order id.
    pub async fn cancel_order(&self, client_order_id: &str) -> Result<(), WallexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            #[serde(rename = "clientOrderId")]
            client_order_id: &'a str,
        }

        self.private_delete_with_params(private::ORDERS, &Params { client_order_id })
            .await
    }

    /// Get a placed order by its client order id.
    pub async fn order(&self, client_order_id: &str) -> Result<Order, WallexError> {
        let envelope: Envelope<Order> = self
            .private_get_resource(private::ORDERS, client_order_id)
            .await?;
        Ok(envelope.result)
    }

    /// Get the account's open orders.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional market filter; all markets when `None`.
    pub async fn open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> Result<Vec<Order>, WallexError> {
        #[derive(serde::Deserialize)]
        struct OpenOrders {
            orders: Vec<Order>,
        }

        let envelope: Envelope<OpenOrders> = match request {
            Some(req) => {
                self.private_get_with_params(private::OPEN_ORDERS, req)
                    .await?
            }
            None => self.private_get(private::OPEN_ORDERS).await?,
        };
        Ok(envelope.result.orders)
    }

    /// Get the account's most recent trades.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional market and side filters; unfiltered when `None`.
    pub async fn trades(&self, request: Option<&TradesRequest>) -> Result<Vec<Trade>, WallexError> {
        #[derive(serde::Deserialize)]
        struct AccountTrades {
            #[serde(rename = "AccountLatestTrades")]
            account_latest_trades: Vec<Trade>,
        }

        let envelope: Envelope<AccountTrades> = match request {
            Some(req) => self.private_get_with_params(private::TRADES, req).await?,
            None => self.private_get(private::TRADES).await?,
        };
        Ok(envelope.result.account_latest_trades)
    }
}

//! Wallex REST API client implementation.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{API_KEY_HEADER, CredentialsProvider, DEFAULT_API_KEY_ENV, EnvCredentials, StaticCredentials};
use crate::error::WallexError;
use crate::rest::endpoints::WALLEX_BASE_URL;
use crate::rest::private::{
    Balance, BankAccount, BankingCard, FeeLevel, OpenOrdersRequest, Order, OrderParams, Profile,
    Trade, TradesRequest,
};
use crate::rest::public::{Candle, CandlesRequest, Currency, Market, MarketTrade, OrderBook};
use crate::rest::traits::WallexApi;

/// Process-wide transport used when the caller does not supply one.
///
/// `reqwest::Client` is reference counted, so every client built without an
/// explicit transport shares this connection pool.
static DEFAULT_HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    let user_agent = format!("wallex-api-client/{}", env!("CARGO_PKG_VERSION"));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("wallex-api-client"));
    headers.insert(USER_AGENT, header_value);

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// The Wallex REST API client.
///
/// Every method performs exactly one HTTP request. Nothing is cached or
/// retried, and calls on the same client are independent of each other.
///
/// # Example
///
/// ```rust,no_run
/// use wallex_api_client::rest::WallexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints need no credentials
///     let client = WallexClient::new();
///
///     for market in client.markets().await? {
///         println!("{}: {}", market.symbol, market.stats.last_price);
///     }
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide an API key (or set `WALLEX_API_KEY`):
///
/// ```rust,no_run
/// use wallex_api_client::rest::WallexClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WallexClient::builder().api_key("my-api-key").build();
///
///     let balances = client.balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WallexClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl WallexClient {
    /// Create a new client with default settings.
    ///
    /// The API key is taken from `WALLEX_API_KEY` when that variable is set.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> WallexClientBuilder {
        WallexClientBuilder::new()
    }

    /// Returns true if an API key is configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint_url::<()>(endpoint, None)?;
        let response = self.execute(Method::GET, url, None, None).await?;
        parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint, Some(params))?;
        let response = self.execute(Method::GET, url, None, None).await?;
        parse_response(response).await
    }

    /// Make an authenticated GET request.
    pub(crate) async fn private_get<T>(&self, endpoint: &str) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let url = self.endpoint_url::<()>(endpoint, None)?;
        let response = self.execute(Method::GET, url, Some(api_key), None).await?;
        parse_response(response).await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn private_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let api_key = self.api_key()?;
        let url = self.endpoint_url(endpoint, Some(params))?;
        let response = self.execute(Method::GET, url, Some(api_key), None).await?;
        parse_response(response).await
    }

    /// Make an authenticated GET request for a single resource below `endpoint`.
    ///
    /// `id` is appended as one percent-encoded path segment.
    pub(crate) async fn private_get_resource<T>(
        &self,
        endpoint: &str,
        id: &str,
    ) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let mut url = self.endpoint_url::<()>(endpoint, None)?;
        url.path_segments_mut()
            .map_err(|()| WallexError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        let response = self.execute(Method::GET, url, Some(api_key), None).await?;
        parse_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn private_post_json<T, B>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, WallexError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let api_key = self.api_key()?;
        let url = self.endpoint_url::<()>(endpoint, None)?;
        let body = serde_json::to_vec(body)?;
        let response = self
            .execute(Method::POST, url, Some(api_key), Some(body))
            .await?;
        parse_response(response).await
    }

    /// Make an authenticated DELETE request with query parameters.
    ///
    /// Only the status code is inspected; the body is discarded.
    pub(crate) async fn private_delete_with_params<Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<(), WallexError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let api_key = self.api_key()?;
        let url = self.endpoint_url(endpoint, Some(params))?;
        self.execute(Method::DELETE, url, Some(api_key), None)
            .await?;
        Ok(())
    }

    fn api_key(&self) -> Result<&str, WallexError> {
        self.credentials
            .as_ref()
            .map(|provider| provider.get_credentials().expose_api_key())
            .ok_or(WallexError::MissingApiKey)
    }

    fn endpoint_url<Q>(&self, endpoint: &str, params: Option<&Q>) -> Result<Url, WallexError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            endpoint
        ))?;
        if let Some(params) = params {
            let query_string = serde_urlencoded::to_string(params)?;
            if !query_string.is_empty() {
                url.set_query(Some(&query_string));
            }
        }
        Ok(url)
    }

    /// Send a request and map any non-success status to its error category.
    ///
    /// Every 2xx status is success. Anything else becomes a category error
    /// without the body being read.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        api_key: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, WallexError> {
        tracing::debug!(
            %method,
            path = url.path(),
            authenticated = api_key.is_some(),
            "sending wallex request"
        );

        let mut request = self.http_client.request(method, url);
        if let Some(api_key) = api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%status, "received wallex response");

        if !status.is_success() {
            return Err(WallexError::from_status(status));
        }
        Ok(response)
    }
}

/// Decode a successful response body.
async fn parse_response<T>(response: reqwest::Response) -> Result<T, WallexError>
where
    T: serde::de::DeserializeOwned,
{
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

impl Default for WallexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WallexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallexClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`WallexClient`].
pub struct WallexClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    api_key_env: String,
    http_client: Option<reqwest::Client>,
}

impl WallexClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: WALLEX_BASE_URL.to_string(),
            credentials: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            http_client: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authenticated requests.
    ///
    /// An empty key is ignored, leaving the environment fallback in place.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        if !api_key.is_empty() {
            self.credentials = Some(Arc::new(StaticCredentials::new(api_key)));
        }
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the environment variable consulted when no API key is given.
    ///
    /// Defaults to `WALLEX_API_KEY`.
    pub fn api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    /// Use a specific HTTP transport instead of the shared default.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> WallexClient {
        let credentials = self.credentials.or_else(|| {
            EnvCredentials::try_from_env_var(&self.api_key_env)
                .map(|creds| Arc::new(creds) as Arc<dyn CredentialsProvider>)
        });

        let reqwest_client = self
            .http_client
            .unwrap_or_else(|| DEFAULT_HTTP_CLIENT.clone());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        WallexClient {
            http_client: client,
            base_url: self.base_url,
            credentials,
        }
    }
}

impl Default for WallexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The `{"result": ...}` wrapper around every Wallex response.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) result: T,
}

// WallexApi trait implementation.

impl WallexApi for WallexClient {
    // ========== Public Endpoints ==========

    async fn markets(&self) -> Result<Vec<Market>, WallexError> {
        WallexClient::markets(self).await
    }

    async fn currencies(&self) -> Result<Vec<Currency>, WallexError> {
        WallexClient::currencies(self).await
    }

    async fn order_book(&self, symbol: &str) -> Result<OrderBook, WallexError> {
        WallexClient::order_book(self, symbol).await
    }

    async fn market_trades(&self, symbol: &str) -> Result<Vec<MarketTrade>, WallexError> {
        WallexClient::market_trades(self, symbol).await
    }

    async fn candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, WallexError> {
        WallexClient::candles(self, request).await
    }

    // ========== Private Endpoints - Account ==========

    async fn profile(&self) -> Result<Profile, WallexError> {
        WallexClient::profile(self).await
    }

    async fn balances(&self) -> Result<HashMap<String, Balance>, WallexError> {
        WallexClient::balances(self).await
    }

    async fn fee_levels(&self) -> Result<HashMap<String, FeeLevel>, WallexError> {
        WallexClient::fee_levels(self).await
    }

    async fn banking_cards(&self) -> Result<Vec<BankingCard>, WallexError> {
        WallexClient::banking_cards(self).await
    }

    async fn bank_accounts(&self) -> Result<Vec<BankAccount>, WallexError> {
        WallexClient::bank_accounts(self).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn place_order(&self, params: &OrderParams) -> Result<Order, WallexError> {
        WallexClient::place_order(self, params).await
    }

    async fn cancel_order(&self, client_order_id: &str) -> Result<(), WallexError> {
        WallexClient::cancel_order(self, client_order_id).await
    }

    async fn order(&self, client_order_id: &str) -> Result<Order, WallexError> {
        WallexClient::order(self, client_order_id).await
    }

    async fn open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> Result<Vec<Order>, WallexError> {
        WallexClient::open_orders(self, request).await
    }

    async fn trades(&self, request: Option<&TradesRequest>) -> Result<Vec<Trade>, WallexError> {
        WallexClient::trades(self, request).await
    }
}

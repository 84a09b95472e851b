//! HTTP client for the Nordnet nExt REST API, version 1.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    params::Params,
    types::{
        Account, AccountSummary, ChartPoint, Derivative, Index, Instrument, InstrumentRef, Ledger,
        List, LoggedInStatus, Login, Market, NewsItem, NewsPreview, NewsSource, Order, OrderReply,
        Position, RealtimeAccess, SystemStatus, Ticksize, Trade, TradingDay,
    },
    Error,
};

/// Base URL of the production system.
pub const BASE_URL: &str = "https://api.nordnet.se";

/// Base URL of the public test system.
pub const TEST_BASE_URL: &str = "https://api.test.nordnet.se";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Service name sent with login when none is configured.
const DEFAULT_SERVICE: &str = "NEXTAPI";

/// HTTP client for the nExt API.
///
/// Every argument travels as a query parameter, even on `POST`, `PUT`, and
/// `DELETE` calls; none of the endpoints take a request body. Once a session
/// key is held (from [`login`](Client::login) or
/// [`set_session_key`](Client::set_session_key)), it is attached to each
/// request as HTTP basic auth with the key as both username and password.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<String>,
    service: String,
    session_key: Option<String>,
}

impl Client {
    /// Creates a client pointing at the production system.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a client pointing at the public test system.
    pub fn test() -> Result<Self, Error> {
        Self::with_base_url(TEST_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nordnet_api/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            service: DEFAULT_SERVICE.to_string(),
            session_key: None,
        })
    }

    /// Sets the encrypted credential blob sent as the `auth` parameter at login.
    pub fn credentials(mut self, credentials: impl Into<String>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// Overrides the service name sent at login.
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Returns the active session key, if any.
    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    /// Adopts a session key obtained elsewhere. Subsequent calls
    /// authenticate with it as if it came from [`login`](Client::login).
    pub fn set_session_key(&mut self, session_key: impl Into<String>) {
        self.session_key = Some(session_key.into());
    }

    fn endpoint_url(&self, path: &str, params: Option<&Params>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Url(e)
        })?;
        Ok(match params {
            Some(params) => params.add_to_url(&url),
            None => url,
        })
    }

    fn require_session(&self) -> Result<&str, Error> {
        self.session_key.as_deref().ok_or(Error::MissingSession)
    }

    async fn call<T>(&self, method: Method, path: &str, params: Option<&Params>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path, params)?;
        tracing::debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method, url)
            .header("accept", "application/json");
        if let Some(key) = &self.session_key {
            request = request.basic_auth(key, Some(key));
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to decode response: {} | body: {}", e, snippet);
            Error::Decode {
                reason: e.to_string(),
                body: snippet,
            }
        })
    }

    /// Fetches the system status block from the service root. Works without
    /// a session.
    pub async fn get_system_status(&self) -> Result<SystemStatus, Error> {
        self.call(Method::GET, "/v1", None).await
    }

    /// Logs in with the configured credentials and stores the returned
    /// session key on the client.
    pub async fn login(&mut self) -> Result<Login, Error> {
        let credentials = self.credentials.clone().ok_or(Error::MissingCredentials)?;
        let params = Params::new()
            .with("auth", credentials)
            .with("service", self.service.clone());
        let login: Login = self.call(Method::POST, "/v1/login", Some(&params)).await?;
        self.session_key = Some(login.session_key.clone());
        Ok(login)
    }

    /// Ends the current session. The stored session key is cleared once the
    /// call succeeds.
    pub async fn logout(&mut self) -> Result<LoggedInStatus, Error> {
        let path = format!("/v1/login/{}", self.require_session()?);
        let status: LoggedInStatus = self.call(Method::DELETE, &path, None).await?;
        self.session_key = None;
        Ok(status)
    }

    /// Resets the expiry countdown of the current session.
    pub async fn touch(&self) -> Result<LoggedInStatus, Error> {
        let path = format!("/v1/login/{}", self.require_session()?);
        self.call(Method::PUT, &path, None).await
    }

    /// Fetches the markets the session has realtime data access to.
    pub async fn get_realtime_access(&self) -> Result<Vec<RealtimeAccess>, Error> {
        self.call(Method::GET, "/v1/realtime_access", None).await
    }

    /// Fetches the news sources available to the session.
    pub async fn get_news_sources(&self) -> Result<Vec<NewsSource>, Error> {
        self.call(Method::GET, "/v1/news_sources", None).await
    }

    /// Fetches news headlines, optionally filtered by source, instrument,
    /// or time window.
    pub async fn get_news_items(&self, params: Option<&Params>) -> Result<Vec<NewsPreview>, Error> {
        self.call(Method::GET, "/v1/news_items", params).await
    }

    /// Fetches a single news item with its body text.
    pub async fn get_news_item(&self, item_id: i64) -> Result<NewsItem, Error> {
        self.call(Method::GET, format!("/v1/news_items/{}", item_id).as_str(), None)
            .await
    }

    /// Fetches the accounts of the logged-in user.
    pub async fn get_accounts(&self) -> Result<Vec<Account>, Error> {
        self.call(Method::GET, "/v1/accounts", None).await
    }

    /// Fetches the balance summary of an account.
    pub async fn get_account(&self, accno: &str) -> Result<AccountSummary, Error> {
        self.call(Method::GET, format!("/v1/accounts/{}", accno).as_str(), None)
            .await
    }

    /// Fetches the cash balances of an account, one entry per currency.
    pub async fn get_account_ledgers(&self, accno: &str) -> Result<Vec<Ledger>, Error> {
        self.call(
            Method::GET,
            format!("/v1/accounts/{}/ledgers", accno).as_str(),
            None,
        )
        .await
    }

    /// Fetches the holdings of an account.
    pub async fn get_account_positions(&self, accno: &str) -> Result<Vec<Position>, Error> {
        self.call(
            Method::GET,
            format!("/v1/accounts/{}/positions", accno).as_str(),
            None,
        )
        .await
    }

    /// Fetches the order book of an account.
    pub async fn get_account_orders(&self, accno: &str) -> Result<Vec<Order>, Error> {
        self.call(
            Method::GET,
            format!("/v1/accounts/{}/orders", accno).as_str(),
            None,
        )
        .await
    }

    /// Fetches the trades executed for an account.
    pub async fn get_account_trades(&self, accno: &str) -> Result<Vec<Trade>, Error> {
        self.call(
            Method::GET,
            format!("/v1/accounts/{}/trades", accno).as_str(),
            None,
        )
        .await
    }

    /// Places an order. Takes parameters such as `identifier`, `marketID`,
    /// `price`, `volume`, `side`, and `currency`; the reply only confirms
    /// that the order was accepted for processing.
    pub async fn create_order(&self, accno: &str, params: &Params) -> Result<OrderReply, Error> {
        self.call(
            Method::POST,
            format!("/v1/accounts/{}/orders", accno).as_str(),
            Some(params),
        )
        .await
    }

    /// Modifies an order in the order book, for example with a new `price`
    /// or `volume`.
    pub async fn update_order(
        &self,
        accno: &str,
        order_id: i64,
        params: &Params,
    ) -> Result<OrderReply, Error> {
        self.call(
            Method::PUT,
            format!("/v1/accounts/{}/orders/{}", accno, order_id).as_str(),
            Some(params),
        )
        .await
    }

    /// Deletes an order from the order book.
    pub async fn delete_order(&self, accno: &str, order_id: i64) -> Result<OrderReply, Error> {
        self.call(
            Method::DELETE,
            format!("/v1/accounts/{}/orders/{}", accno, order_id).as_str(),
            None,
        )
        .await
    }

    /// Searches for instruments. Takes parameters such as `query`, `type`,
    /// and `country`.
    pub async fn get_instruments(&self, params: &Params) -> Result<Vec<Instrument>, Error> {
        self.call(Method::GET, "/v1/instruments", Some(params)).await
    }

    /// Looks up a single instrument by `identifier` and `marketID`. Unlike
    /// a search, this returns a bare object rather than an array.
    pub async fn get_instrument(&self, params: &Params) -> Result<Instrument, Error> {
        self.call(Method::GET, "/v1/instruments", Some(params)).await
    }

    /// Fetches intraday chart samples for an instrument named by
    /// `identifier` and `marketID`.
    pub async fn get_chart_data(&self, params: &Params) -> Result<Vec<ChartPoint>, Error> {
        self.call(Method::GET, "/v1/chart_data", Some(params)).await
    }

    /// Fetches the other markets an instrument trades on.
    pub async fn get_related_markets(&self, params: &Params) -> Result<Vec<InstrumentRef>, Error> {
        self.call(Method::GET, "/v1/related_markets", Some(params))
            .await
    }

    /// Fetches all instrument lists.
    pub async fn get_lists(&self) -> Result<Vec<List>, Error> {
        self.call(Method::GET, "/v1/lists", None).await
    }

    /// Fetches the instruments in a list.
    pub async fn get_list(&self, list_id: i64) -> Result<Vec<InstrumentRef>, Error> {
        self.call(Method::GET, format!("/v1/lists/{}", list_id).as_str(), None)
            .await
    }

    /// Fetches all markets and the order types they accept.
    pub async fn get_markets(&self) -> Result<Vec<Market>, Error> {
        self.call(Method::GET, "/v1/markets", None).await
    }

    /// Fetches the upcoming trading days of a market.
    pub async fn get_market_trading_days(&self, market_id: i64) -> Result<Vec<TradingDay>, Error> {
        self.call(
            Method::GET,
            format!("/v1/markets/{}/trading_days", market_id).as_str(),
            None,
        )
        .await
    }

    /// Fetches the indices available through the news and chart endpoints.
    pub async fn get_indices(&self) -> Result<Vec<Index>, Error> {
        self.call(Method::GET, "/v1/indices", None).await
    }

    /// Fetches a ticksize table.
    pub async fn get_ticksizes(&self, ticksize_id: i64) -> Result<Vec<Ticksize>, Error> {
        self.call(
            Method::GET,
            format!("/v1/ticksizes/{}", ticksize_id).as_str(),
            None,
        )
        .await
    }

    /// Fetches the countries that have derivatives of the given kind, as
    /// two-letter codes.
    pub async fn get_derivative_countries(
        &self,
        derivative_type: &str,
    ) -> Result<Vec<String>, Error> {
        self.call(
            Method::GET,
            format!("/v1/derivatives/{}", derivative_type).as_str(),
            None,
        )
        .await
    }

    /// Fetches the underlyings that have derivatives of the given kind in
    /// a country.
    pub async fn get_derivative_underlyings(
        &self,
        derivative_type: &str,
        country: &str,
    ) -> Result<Vec<InstrumentRef>, Error> {
        self.call(
            Method::GET,
            format!("/v1/derivatives/{}/underlyings/{}", derivative_type, country).as_str(),
            None,
        )
        .await
    }

    /// Fetches derivative contracts of the given kind, optionally filtered
    /// by underlying via `identifier` and `marketID`.
    pub async fn get_derivatives(
        &self,
        derivative_type: &str,
        params: Option<&Params>,
    ) -> Result<Vec<Derivative>, Error> {
        self.call(
            Method::GET,
            format!("/v1/derivatives/{}/derivatives", derivative_type).as_str(),
            params,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

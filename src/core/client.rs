//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::DashError;

/* ----------------------- Constants ----------------------- */

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Default base of the dashboard service (the local aggregator app).
pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

/// Endpoint path for the combined quote/news fetch (joined onto the base).
pub(crate) const STOCK_DATA_PATH: &str = "get_stock_data";

/* ----------------------- Client ----------------------- */

/// HTTP client for the dashboard service.
///
/// Cheap to clone; all configuration happens through [`DashClientBuilder`].
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_url: Url,
}

impl Default for DashClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DashClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DashClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the service base URL (e.g. the mock server address in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the default base URL constant fails to parse
    /// or the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<DashClient, DashError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DashClient { http, base_url })
    }
}

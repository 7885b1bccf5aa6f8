//! The single network operation: a combined quote/news fetch.

mod api;
pub(crate) mod wire;

use crate::core::{DashClient, DashError, Envelope};

/// Fetch quotes and news for a comma-separated symbol string in one round
/// trip (`POST /get_stock_data`).
///
/// # Errors
///
/// Returns a `DashError` if the request fails, the server responds with a
/// non-success status, or the response body cannot be decoded.
pub async fn dashboard(client: &DashClient, symbols: &str) -> Result<Envelope, DashError> {
    DashboardBuilder::new(client, symbols).fetch().await
}

/// A builder for one combined quote/news fetch.
///
/// Any non-2xx status is treated uniformly as failure. There is no retry;
/// a failed fetch must be resubmitted by the caller.
#[derive(Debug)]
pub struct DashboardBuilder {
    client: DashClient,
    symbols: String,
}

impl DashboardBuilder {
    /// Creates a new `DashboardBuilder` for a comma-separated symbol string.
    pub fn new(client: &DashClient, symbols: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbols: symbols.into(),
        }
    }

    /// Append a single symbol to the query.
    #[must_use]
    pub fn add_symbol(mut self, symbol: impl Into<String>) -> Self {
        if !self.symbols.is_empty() {
            self.symbols.push(',');
        }
        self.symbols.push_str(&symbol.into());
        self
    }

    /// Executes the request and fetches the envelope.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the request fails, the server responds with
    /// a non-success status, or the response body cannot be decoded.
    pub async fn fetch(self) -> Result<Envelope, DashError> {
        api::fetch_dashboard(&self.client, &self.symbols).await
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/* ----- QUOTES (shared by fetch/ and presenter/) ----- */

/// A single stock's snapshot at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Uppercase ticker symbol. Empty if the upstream omitted it.
    pub symbol: String,
    /// Last traded price. `None` when the upstream had no value.
    pub price: Option<f64>,
    /// Signed change since the previous close.
    pub change: Option<f64>,
    /// Traded volume.
    pub volume: Option<u64>,
}

/* ----- NEWS ----- */

/// A news item related to the queried symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// A short summary, when the upstream provided one.
    pub description: Option<String>,
    /// A direct link to the article.
    pub url: String,
    /// Publication time, when present and parseable.
    pub published_at: Option<DateTime<Utc>>,
}

/* ----- FETCH ENVELOPE ----- */

/// The full result of one dashboard fetch.
///
/// Partial success is legal: `errors` may be non-empty alongside non-empty
/// data lists (per-symbol upstream failures don't void the rest).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Envelope {
    pub quotes: Vec<Quote>,
    pub articles: Vec<Article>,
    pub errors: Vec<String>,
}

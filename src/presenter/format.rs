//! Display formatting for quote rows and news items.

use chrono::{DateTime, Utc};

use crate::core::{Article, Quote};

/// Display classification for a signed change value. Zero counts positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    #[must_use]
    pub fn of_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// `500` -> `"500"`, `2500` -> `"2.5K"`, `1_200_000` -> `"1.2M"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_volume(volume: u64) -> String {
    if volume >= 1_000_000 {
        format!("{:.1}M", volume as f64 / 1_000_000.0)
    } else if volume >= 1_000 {
        format!("{:.1}K", volume as f64 / 1_000.0)
    } else {
        volume.to_string()
    }
}

/// Price with a currency prefix and two decimal places.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Signed change with two decimals and an explicit leading `+` when
/// non-negative.
#[must_use]
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change:.2}")
    } else {
        format!("{change:.2}")
    }
}

/// One presentation-ready row of the quote table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRow {
    pub symbol: String,
    pub price: String,
    pub change: String,
    /// Positive/negative styling class for the change cell.
    pub tone: Tone,
    pub volume: String,
}

impl From<&Quote> for QuoteRow {
    fn from(quote: &Quote) -> Self {
        let change = quote.change.unwrap_or(0.0);
        Self {
            symbol: if quote.symbol.is_empty() {
                "N/A".to_string()
            } else {
                quote.symbol.clone()
            },
            price: format_price(quote.price.unwrap_or(0.0)),
            change: format_change(change),
            tone: Tone::of_change(change),
            volume: quote.volume.map_or_else(|| "N/A".to_string(), format_volume),
        }
    }
}

/// One presentation-ready news entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published: String,
}

impl From<&Article> for NewsItem {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article
                .description
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
            url: article.url.clone(),
            published: article
                .published_at
                .map_or_else(|| "Unknown date".to_string(), format_date),
        }
    }
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

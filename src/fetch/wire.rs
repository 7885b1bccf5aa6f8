use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct WireEnvelope {
    pub(crate) stock_data: Option<Vec<WireQuote>>,
    pub(crate) news_data: Option<Vec<WireArticle>>,
    pub(crate) errors: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub(crate) struct WireQuote {
    pub(crate) symbol: Option<String>,
    pub(crate) price: Option<RawNum>,
    pub(crate) change: Option<RawNum>,
    pub(crate) volume: Option<RawNum>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

/// Numeric fields arrive as either JSON numbers or decimal strings (the
/// aggregator forwards provider strings verbatim); accept both.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNum {
    Num(f64),
    Text(String),
}

impl RawNum {
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Num(v) if *v >= 0.0 => Some(*v as u64),
            Self::Num(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

use serde::Serialize;

use crate::{
    core::{Article, DashClient, DashError, Envelope, Quote, client::STOCK_DATA_PATH},
    fetch::wire,
};

#[derive(Serialize)]
struct SymbolsPayload<'a> {
    symbols: &'a str,
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub(super) async fn fetch_dashboard(
    client: &DashClient,
    symbols: &str,
) -> Result<Envelope, DashError> {
    let url = client.base_url().join(STOCK_DATA_PATH)?;
    let payload = SymbolsPayload { symbols };

    let resp = client.http().post(url).json(&payload).send().await?;

    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::WireEnvelope = serde_json::from_str(&body).map_err(DashError::Json)?;

    Ok(from_wire(envelope))
}

fn from_wire(env: wire::WireEnvelope) -> Envelope {
    let quotes = env
        .stock_data
        .unwrap_or_default()
        .into_iter()
        .map(|raw| Quote {
            symbol: raw.symbol.unwrap_or_default(),
            price: raw.price.as_ref().and_then(wire::RawNum::as_f64),
            change: raw.change.as_ref().and_then(wire::RawNum::as_f64),
            volume: raw.volume.as_ref().and_then(wire::RawNum::as_u64),
        })
        .collect();

    let articles = env
        .news_data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            // Items without a headline are not renderable; skip them.
            let title = raw.title?;

            // An unparseable timestamp degrades to "unknown date" rather
            // than failing the whole fetch.
            let published_at = raw.published_at.as_deref().and_then(|s| {
                chrono::DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&chrono::Utc))
            });

            Some(Article {
                title,
                description: raw.description,
                url: raw.url.unwrap_or_default(),
                published_at,
            })
        })
        .collect();

    Envelope {
        quotes,
        articles,
        errors: env.errors.unwrap_or_default(),
    }
}

//! marketdash: client-side presenter for a stock quote + news dashboard.
//!
//! One network round trip (`POST /get_stock_data`) populates two in-memory
//! lists (quotes and news articles); search, filter, and sort are derived
//! views computed on demand, never mutations of the stored data. The crate
//! ends at presentation-ready plain data (formatted rows plus region
//! placeholders); binding those to an actual UI is the host's job.

pub mod core;
pub mod fetch;
pub mod presenter;

pub use crate::core::{Article, DashClient, DashClientBuilder, DashError, Envelope, Quote};
pub use crate::fetch::DashboardBuilder;
pub use crate::presenter::{
    Debouncer, MAX_SYMBOLS, NewsCategory, NewsItem, PendingFetch, Phase, Presenter, QuoteRow,
    Region, SortColumn, SortDirection, Tone, ViewState,
};

//! The Results Presenter: owned fetch state plus derived views.
//!
//! A [`Presenter`] holds the two in-memory lists populated by one network
//! round trip and derives filtered/sorted/formatted views of them on demand.
//! Displayed content is always a pure function of (stored list, view state);
//! filtering and sorting never mutate the stored lists.

mod debounce;
pub mod format;
pub mod view;

pub use debounce::Debouncer;
pub use format::{NewsItem, QuoteRow, Tone, format_change, format_price, format_volume};
pub use view::{
    NewsCategory, SortColumn, SortDirection, ViewState, filter_news, filter_quotes, sort_quotes,
};

use crate::{
    core::{Article, DashClient, DashError, Envelope, Quote},
    fetch,
};

/// Maximum number of symbols accepted per submission.
pub const MAX_SYMBOLS: usize = 10;

/// Fetch lifecycle. Terminal outcomes return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Content of a display region.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<T> {
    /// Nothing to show: no fetch has completed yet, or the data came back
    /// empty while server errors render in the error region instead.
    Empty,
    /// A request is in flight; show a loading placeholder.
    Loading,
    /// The last fetch completed with no data and no errors; show the
    /// explicit "no data" placeholder.
    NoData,
    /// The filtered/sorted view of the stored list. May be empty when the
    /// current search matches nothing.
    Rows(Vec<T>),
}

/// Collects symbols from user input, submits them to the fetch service, and
/// exposes the results as renderable regions.
#[derive(Debug)]
pub struct Presenter {
    client: DashClient,
    phase: Phase,
    quotes: Vec<Quote>,
    news: Vec<Article>,
    errors: Vec<String>,
    fetched: bool,
    view: ViewState,
}

impl Presenter {
    #[must_use]
    pub fn new(client: DashClient) -> Self {
        Self {
            client,
            phase: Phase::Idle,
            quotes: Vec::new(),
            news: Vec::new(),
            errors: Vec::new(),
            fetched: false,
            view: ViewState::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the submit control should currently be enabled.
    #[must_use]
    pub fn submit_allowed(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The stored quote list, untouched by any filter or sort.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// The stored article list, untouched by any filter.
    #[must_use]
    pub fn news(&self) -> &[Article] {
        &self.news
    }

    /// Messages for the error display region, one entry per message.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Validate the raw input and, if it passes, flip to [`Phase::Loading`]
    /// and hand back the prepared request.
    ///
    /// Input is normalized by splitting on commas, trimming, dropping empty
    /// segments, and uppercasing. The returned [`PendingFetch`] does not
    /// borrow the presenter, so while it runs the host can keep rendering:
    /// both regions report loading placeholders, `submit_allowed()` is
    /// false, and a second submission is rejected. Feed the outcome back
    /// with [`Presenter::finish_submit`].
    ///
    /// # Errors
    ///
    /// Returns `DashError::EmptySymbols` or `DashError::TooManySymbols` when
    /// validation blocks the call (no request is issued), and
    /// `DashError::Busy` if a request is already in flight.
    pub fn begin_submit(&mut self, raw: &str) -> Result<PendingFetch, DashError> {
        if self.phase == Phase::Loading {
            return Err(DashError::Busy);
        }

        let symbols = normalize_symbols(raw);
        if symbols.is_empty() {
            return Err(DashError::EmptySymbols);
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(DashError::TooManySymbols {
                count: symbols.len(),
            });
        }

        self.phase = Phase::Loading;
        Ok(PendingFetch {
            client: self.client.clone(),
            symbols: symbols.join(","),
        })
    }

    /// Apply the outcome of a pending fetch and return to idle.
    ///
    /// A completed response replaces both stored lists wholesale, replaces
    /// the error messages with the server's, and resets the view state. A
    /// transport or decode failure leaves the stored lists untouched and
    /// renders a single generic failure message; it is an outcome, not an
    /// `Err`.
    pub fn finish_submit(&mut self, outcome: Result<Envelope, DashError>) {
        self.phase = Phase::Idle;
        match outcome {
            Ok(envelope) => self.apply_envelope(envelope),
            Err(err) => {
                // Prior stored lists stay rendered; only the failure message
                // replaces the error region.
                self.errors = vec![format!("Failed to fetch data: {err}")];
            }
        }
    }

    /// One-shot convenience over [`Presenter::begin_submit`] and
    /// [`Presenter::finish_submit`]: validate, fetch, apply.
    ///
    /// Hosts that need to observe the loading state while the request is
    /// pending should drive the two halves themselves.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`Presenter::begin_submit`]; a
    /// transport failure is a rendered outcome, not an `Err`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn submit_query(&mut self, raw: &str) -> Result<(), DashError> {
        let pending = self.begin_submit(raw)?;
        let outcome = pending.fetch().await;
        self.finish_submit(outcome);
        Ok(())
    }

    fn apply_envelope(&mut self, envelope: Envelope) {
        let Envelope {
            quotes,
            articles,
            errors,
        } = envelope;
        self.quotes = quotes;
        self.news = articles;
        self.errors = errors;
        self.view = ViewState::default();
        self.fetched = true;
    }

    /// The quote table region: the stored quotes filtered by the current
    /// search and sorted by the current column/direction, as formatted rows.
    #[must_use]
    pub fn quotes_region(&self) -> Region<QuoteRow> {
        if self.phase == Phase::Loading {
            return Region::Loading;
        }
        if !self.quotes.is_empty() {
            let filtered = filter_quotes(&self.quotes, &self.view.quote_search);
            let sorted = sort_quotes(&filtered, self.view.sort_column, self.view.sort_direction);
            return Region::Rows(sorted.iter().map(QuoteRow::from).collect());
        }
        if self.fetched && self.errors.is_empty() {
            Region::NoData
        } else {
            Region::Empty
        }
    }

    /// The news list region: the stored articles filtered by the current
    /// search and category, as formatted items.
    #[must_use]
    pub fn news_region(&self) -> Region<NewsItem> {
        if self.phase == Phase::Loading {
            return Region::Loading;
        }
        if !self.news.is_empty() {
            let filtered = filter_news(&self.news, &self.view.news_search, self.view.news_category);
            return Region::Rows(filtered.iter().map(NewsItem::from).collect());
        }
        if self.fetched && self.errors.is_empty() {
            Region::NoData
        } else {
            Region::Empty
        }
    }

    /* -------- view-state mutators (stored data untouched) -------- */

    pub fn set_quote_search(&mut self, search: impl Into<String>) {
        self.view.quote_search = search.into();
    }

    pub fn set_news_search(&mut self, search: impl Into<String>) {
        self.view.news_search = search.into();
    }

    pub fn set_news_category(&mut self, category: NewsCategory) {
        self.view.news_category = category;
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.view.sort_column = column;
        self.view.sort_direction = direction;
    }

    /// Header-click semantics: same column toggles direction, a different
    /// column resets to ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.view.toggle_sort(column);
    }
}

/// An accepted submission whose network call has not completed yet.
///
/// Returned by [`Presenter::begin_submit`]. Holds its own client handle
/// rather than borrowing the presenter, so the presenter stays queryable
/// (and reports loading placeholders) while the request runs.
#[derive(Debug)]
pub struct PendingFetch {
    client: DashClient,
    symbols: String,
}

impl PendingFetch {
    /// Execute the request.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the request fails, the server responds with
    /// a non-success status, or the response body cannot be decoded.
    pub async fn fetch(self) -> Result<Envelope, DashError> {
        fetch::DashboardBuilder::new(&self.client, self.symbols)
            .fetch()
            .await
    }
}

fn normalize_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

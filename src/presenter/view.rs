//! Pure view transformations over the stored lists.
//!
//! Every function here takes plain data and returns plain data: the stored
//! lists are never mutated, so a rendered view is always recomputable from
//! (stored list, view state).

use std::cmp::Ordering;

use crate::core::{Article, Quote};

/// Sortable columns of the quote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Symbol,
    Price,
    Change,
    Volume,
}

/// Sort direction for the quote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// News category filters.
///
/// Each category other than `All` requires a fixed keyword in the article
/// title or description, on top of the search match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsCategory {
    #[default]
    All,
    Market,
    Tech,
    Finance,
}

impl NewsCategory {
    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Market => &["market"],
            Self::Tech => &["tech", "technology"],
            Self::Finance => &["finance", "financial"],
        }
    }
}

/// Transient filter/sort/search settings, distinct from the stored data.
///
/// Reset to defaults whenever a fetch replaces the stored lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub quote_search: String,
    pub news_search: String,
    pub news_category: NewsCategory,
}

impl ViewState {
    /// Header-click semantics: clicking the current sort column toggles the
    /// direction; clicking a different column resets to ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }
}

/// Case-insensitive substring match against the symbol, or a literal
/// substring match against the price rendered as a plain decimal string.
///
/// An empty search matches everything; a search matching nothing yields an
/// empty set, never an error.
#[must_use]
pub fn filter_quotes(quotes: &[Quote], search: &str) -> Vec<Quote> {
    let needle = search.to_lowercase();
    quotes
        .iter()
        .filter(|q| {
            q.symbol.to_lowercase().contains(&needle)
                || q.price
                    .map(|p| p.to_string())
                    .unwrap_or_default()
                    .contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sort a quote list by column and direction.
///
/// `Symbol` compares case-insensitively; numeric columns treat missing
/// values as 0. The sort is stable, so ties keep the stored list's
/// insertion order in both directions.
#[must_use]
pub fn sort_quotes(quotes: &[Quote], column: SortColumn, direction: SortDirection) -> Vec<Quote> {
    let mut sorted = quotes.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Symbol => a.symbol.to_lowercase().cmp(&b.symbol.to_lowercase()),
            SortColumn::Price => num_ord(a.price, b.price),
            SortColumn::Change => num_ord(a.change, b.change),
            SortColumn::Volume => a.volume.unwrap_or(0).cmp(&b.volume.unwrap_or(0)),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

fn num_ord(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

/// Filter articles by search text and category.
///
/// The search is a case-insensitive substring match over title OR
/// description (missing descriptions match as empty text). Categories other
/// than [`NewsCategory::All`] additionally require one of their keywords in
/// the title or description.
#[must_use]
pub fn filter_news(articles: &[Article], search: &str, category: NewsCategory) -> Vec<Article> {
    let needle = search.to_lowercase();
    let keywords = category.keywords();
    articles
        .iter()
        .filter(|a| {
            let title = a.title.to_lowercase();
            let description = a.description.as_deref().unwrap_or_default().to_lowercase();

            let matches_search = title.contains(&needle) || description.contains(&needle);
            let matches_category = keywords.is_empty()
                || keywords
                    .iter()
                    .any(|kw| title.contains(kw) || description.contains(kw));

            matches_search && matches_category
        })
        .cloned()
        .collect()
}

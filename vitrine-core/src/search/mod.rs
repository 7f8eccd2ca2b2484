//! Search domain - debounced text search and category filtering over the
//! blog and project card collections

pub mod debounce;
pub mod filter;

use std::fmt;

use tokio::sync::mpsc::UnboundedSender;
use vitrine_config::SearchSettings;

pub use self::debounce::QueryDebouncer;
pub use self::filter::{CatalogEntry, CatalogFilter, CategoryFilter, Visibility};
use crate::error::Result;

/// Searchable card collections on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKey {
    Blog,
    Projects,
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKey::Blog => f.write_str("blog"),
            CatalogKey::Projects => f.write_str("projects"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// Raw text from the search box, before debouncing.
    QueryChanged(CatalogKey, String),
    /// Debounced, lowercased query ready to apply.
    QueryCommitted(CatalogKey, String),
    /// A category filter button was activated (`None` for its attribute
    /// being absent).
    CategorySelected(CatalogKey, Option<String>),
}

impl SearchMessage {
    pub fn key(&self) -> CatalogKey {
        match self {
            SearchMessage::QueryChanged(key, _)
            | SearchMessage::QueryCommitted(key, _)
            | SearchMessage::CategorySelected(key, _) => *key,
        }
    }
}

/// Search state for one catalog: its entries, the active filter and the
/// debouncer feeding committed queries back through the message channel.
#[derive(Debug)]
pub struct CatalogSearch {
    key: CatalogKey,
    entries: Vec<CatalogEntry>,
    filter: CatalogFilter,
    debouncer: QueryDebouncer,
}

impl CatalogSearch {
    pub fn new(
        key: CatalogKey,
        entries: Vec<CatalogEntry>,
        settings: &SearchSettings,
        sender: UnboundedSender<SearchMessage>,
    ) -> Self {
        Self {
            key,
            entries,
            filter: CatalogFilter::new(),
            debouncer: QueryDebouncer::new(key, settings.debounce(), sender),
        }
    }

    pub fn key(&self) -> CatalogKey {
        self.key
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Visibility of every entry under the current filter.
    pub fn visibility(&self) -> Vec<Visibility> {
        self.filter.apply(&self.entries)
    }

    /// Handle a message for this catalog. Returns the new visibility list
    /// when the filter changed, `None` while a query is still debouncing.
    pub fn update(
        &mut self,
        message: SearchMessage,
    ) -> Result<Option<Vec<Visibility>>> {
        match message {
            SearchMessage::QueryChanged(_, raw) => {
                self.debouncer.input(&raw)?;
                Ok(None)
            }
            SearchMessage::QueryCommitted(_, term) => {
                self.filter.set_term(&term);
                tracing::debug!(
                    "{} search applied term {:?}",
                    self.key,
                    self.filter.term()
                );
                Ok(Some(self.visibility()))
            }
            SearchMessage::CategorySelected(_, attribute) => {
                self.filter.set_category(CategoryFilter::from_attribute(
                    attribute.as_deref(),
                ));
                tracing::debug!(
                    "{} search category {:?}",
                    self.key,
                    self.filter.category()
                );
                Ok(Some(self.visibility()))
            }
        }
    }
}

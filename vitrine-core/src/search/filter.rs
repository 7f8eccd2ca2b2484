use serde::{Deserialize, Serialize};

/// Text a host extracted from one searchable card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    /// Value of the card's category attribute, when it has one.
    pub category: Option<String>,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Build from the active filter button's category attribute. A missing
    /// attribute or the literal `all` select every category.
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        match attribute.map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(name) => CategoryFilter::Named(name.to_string()),
        }
    }

    fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => category == Some(name.as_str()),
        }
    }
}

/// Whether a card should be displayed after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Search term plus category constraint over a card collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    term: String,
    category: CategoryFilter,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: &str) -> Self {
        self.set_term(term);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Terms are matched case-insensitively; the stored form is lowercase.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_lowercase();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// True when the entry passes both the term and the category.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let matches_term = self.term.is_empty()
            || entry.title.to_lowercase().contains(&self.term)
            || entry.description.to_lowercase().contains(&self.term);
        matches_term && self.category.admits(entry.category.as_deref())
    }

    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<Visibility> {
        entries
            .iter()
            .map(|entry| {
                if self.matches(entry) {
                    Visibility::Shown
                } else {
                    Visibility::Hidden
                }
            })
            .collect()
    }
}

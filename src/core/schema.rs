//! Record and slug types shared by the loader, slug pass and renderer.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Directory (relative to the output root) holding one sub-directory per restaurant.
pub const RESTAURANTS_DIR: &str = "restaurants";

/// One restaurant row from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based data-row number (the header row is not counted)
    pub row: usize,

    /// Display name; falls back to `Restaurant <row>` when the name cell is blank
    pub name: String,

    /// Column name to value, in header order
    pub fields: IndexMap<String, String>,
}

impl Record {
    /// Build a record, deriving the display name from `name_column`.
    pub fn new(row: usize, fields: IndexMap<String, String>, name_column: &str) -> Self {
        let name = fields
            .get(name_column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Restaurant {row}"));
        Record { row, name, fields }
    }

    /// Value of a column, if present and non-blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// True if every field of the row is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }
}

/// URL-safe identifier of a record: `[a-z0-9-]`, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wrap an already-normalized slug. Returns `None` if `value` is not URL-safe.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let valid = !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        valid.then_some(Slug(value))
    }

    /// Wrap output of the slug pass, which only ever yields valid slugs.
    pub(crate) fn from_normalized(value: String) -> Self {
        debug_assert!(Slug::new(value.clone()).is_some(), "invalid slug: {value:?}");
        Slug(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record paired with its assigned slug.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteEntry {
    pub record: Record,
    pub slug: Slug,
}

impl SiteEntry {
    /// Relative link from the index page, e.g. `restaurants/golden-dragon/`.
    pub fn href(&self) -> String {
        format!("{}/{}/", RESTAURANTS_DIR, self.slug)
    }

    /// Detail page path relative to the output root.
    pub fn page_path(&self) -> String {
        format!("{}/{}/index.html", RESTAURANTS_DIR, self.slug)
    }
}

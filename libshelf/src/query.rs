//! Presentation-side query helpers
//!
//! Search and sort are front-end concerns applied to store snapshots; neither
//! touches store state or survives the process.

use std::str::FromStr;

use crate::types::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("Invalid sort order: '{}'. Valid options: asc, desc", s)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Filter items whose title contains `term`, case-insensitively.
///
/// An empty term matches everything.
pub fn filter_by_title(items: &[Item], term: &str) -> Vec<Item> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sort items lexicographically by title, in place
pub fn sort_by_title(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::Descending => items.sort_by(|a, b| b.title.cmp(&a.title)),
    }
}

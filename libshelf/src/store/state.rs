//! Collection state and its transitions
//!
//! The state value is a plain struct; every mutation the store can make is
//! one of the named transition methods below. The store applies them while
//! holding its lock, so each transition is atomic with respect to the others.

use serde::Serialize;

use crate::types::{FetchStatus, Item};

/// In-memory mirror of the remote collection
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionState {
    /// Fetch order, with created items appended
    pub items: Vec<Item>,
    /// Lifecycle of the most recent fetch-all; mutations never touch it
    pub status: FetchStatus,
    /// Last fetch/create/update failure message
    pub error: Option<String>,
}

impl CollectionState {
    /// A fetch-all was invoked; the remote call has not resolved yet
    pub(crate) fn fetch_started(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Fetch-all resolved: the remote collection replaces the local one
    pub(crate) fn fetch_succeeded(&mut self, items: Vec<Item>) {
        self.status = FetchStatus::Succeeded;
        self.items = items;
    }

    /// Fetch-all failed; previously fetched items are kept
    pub(crate) fn fetch_failed(&mut self, message: String) {
        self.status = FetchStatus::Failed;
        self.error = Some(message);
    }

    /// A create resolved: append the server-returned item
    pub(crate) fn create_succeeded(&mut self, item: Item) {
        self.items.push(item);
    }

    /// An update resolved: replace the entry with the matching id.
    /// No-op if the id is no longer present.
    pub(crate) fn update_succeeded(&mut self, item: Item) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
    }

    /// A delete resolved: drop the entry with the matching id
    pub(crate) fn delete_succeeded(&mut self, id: i64) {
        self.items.retain(|i| i.id != id);
    }

    /// A create or update was rejected, locally or remotely
    pub(crate) fn mutation_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Whether any item carries this exact title (case-sensitive, untrimmed)
    pub fn has_title(&self, title: &str) -> bool {
        self.items.iter().any(|i| i.title == title)
    }

    /// Whether an item other than `id` carries this exact title
    pub fn has_title_elsewhere(&self, title: &str, id: i64) -> bool {
        self.items.iter().any(|i| i.title == title && i.id != id)
    }

    /// Look up an item by id
    pub fn find(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

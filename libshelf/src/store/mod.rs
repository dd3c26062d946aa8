//! Resource store
//!
//! The canonical in-memory mirror of the remote collection, mutated only by
//! the four operations defined here. Each operation raises the global loading
//! flag for its full extent, performs its remote call outside the state lock,
//! and applies exactly one transition when the call resolves. A check made at
//! invocation time (like the duplicate-title guard) sees the state as it was
//! when the user acted, and the mutation lands atomically when the network
//! answers.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libshelf::remote::http::HttpRemote;
//! use libshelf::store::ItemStore;
//! use libshelf::types::ItemDraft;
//!
//! # async fn example() -> libshelf::Result<()> {
//! let remote = HttpRemote::new("https://jsonplaceholder.typicode.com")?;
//! let store = ItemStore::new(Arc::new(remote));
//!
//! store.fetch_all().await?;
//! let created = store.create(ItemDraft::new("title", "body", 1)).await?;
//! println!("created item {}", created.id);
//!
//! let snapshot = store.snapshot();
//! println!("{} items, status {}", snapshot.items.len(), snapshot.status);
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod loading;
pub mod state;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::error::{Result, ShelfError};
use crate::remote::Remote;
use crate::types::{FetchStatus, Item, ItemDraft};

use self::events::{Event, EventBus, EventReceiver};
use self::loading::{LoadingFlag, LoadingGuard};
use self::state::CollectionState;

/// Per-subscriber event buffer size
const EVENT_CAPACITY: usize = 100;

/// The resource store
///
/// Owns the collection state exclusively; the presentation layer gets owned
/// snapshots and never mutates them directly. Cheap to share behind an `Arc`.
pub struct ItemStore {
    remote: Arc<dyn Remote>,
    state: Mutex<CollectionState>,
    loading: Arc<LoadingFlag>,
    events: EventBus,
}

impl ItemStore {
    /// Create a store over the given remote
    pub fn new(remote: Arc<dyn Remote>) -> Self {
        Self {
            remote,
            state: Mutex::new(CollectionState::default()),
            loading: Arc::new(LoadingFlag::new()),
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    /// Replace the local collection with the full remote one.
    ///
    /// `status` moves to `Loading` immediately, then to `Succeeded` or
    /// `Failed` when the call resolves. A failed fetch records the error and
    /// keeps whatever items were already held.
    pub async fn fetch_all(&self) -> Result<Vec<Item>> {
        let _guard = LoadingGuard::acquire(&self.loading, &self.events);

        self.with_state(|s| s.fetch_started());
        self.events.emit(Event::FetchStarted);

        match self.remote.fetch_all().await {
            Ok(items) => {
                info!(count = items.len(), remote = self.remote.name(), "fetched collection");
                self.with_state(|s| s.fetch_succeeded(items.clone()));
                self.events.emit(Event::FetchCompleted { count: items.len() });
                Ok(items)
            }
            Err(e) => {
                warn!(remote = self.remote.name(), error = %e, "fetch failed");
                let message = e.to_string();
                self.with_state(|s| s.fetch_failed(message.clone()));
                self.events.emit(Event::FetchFailed { error: message });
                Err(e.into())
            }
        }
    }

    /// Create an item from a draft.
    ///
    /// Fails with [`ShelfError::DuplicateTitle`], without any network
    /// traffic, when an existing item already carries the draft's exact
    /// title. On success the server-returned item (with its assigned id) is
    /// appended to the collection. `status` is untouched either way.
    pub async fn create(&self, draft: ItemDraft) -> Result<Item> {
        let _guard = LoadingGuard::acquire(&self.loading, &self.events);

        if self.with_state(|s| s.has_title(&draft.title)) {
            return Err(self.reject_duplicate(draft.title));
        }

        match self.remote.create(&draft).await {
            Ok(item) => {
                info!(id = item.id, title = %item.title, "created item");
                self.with_state(|s| s.create_succeeded(item.clone()));
                self.events.emit(Event::ItemCreated {
                    id: item.id,
                    title: item.title.clone(),
                });
                Ok(item)
            }
            Err(e) => Err(self.reject_mutation(e, "create")),
        }
    }

    /// Replace an existing item.
    ///
    /// Fails with [`ShelfError::DuplicateTitle`] when a *different* item
    /// already carries the new title; updating an item to its own unchanged
    /// title succeeds. On success the entry with the matching id is replaced
    /// by the server-returned item; if the id has meanwhile disappeared from
    /// the collection, the success is a silent no-op.
    pub async fn update(&self, item: Item) -> Result<Item> {
        let _guard = LoadingGuard::acquire(&self.loading, &self.events);

        if self.with_state(|s| s.has_title_elsewhere(&item.title, item.id)) {
            return Err(self.reject_duplicate(item.title));
        }

        match self.remote.update(&item).await {
            Ok(updated) => {
                info!(id = updated.id, "updated item");
                self.with_state(|s| s.update_succeeded(updated.clone()));
                self.events.emit(Event::ItemUpdated { id: updated.id });
                Ok(updated)
            }
            Err(e) => Err(self.reject_mutation(e, "update")),
        }
    }

    /// Remove an item by id.
    ///
    /// A remote failure is returned to the caller but, unlike the other
    /// operations, is not recorded into collection state. Removing an id the
    /// collection no longer holds is a no-op after the remote call succeeds.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let _guard = LoadingGuard::acquire(&self.loading, &self.events);

        self.remote.delete(id).await?;

        info!(id, "deleted item");
        self.with_state(|s| s.delete_succeeded(id));
        self.events.emit(Event::ItemDeleted { id });
        Ok(())
    }

    /// Owned snapshot of the collection state
    pub fn snapshot(&self) -> CollectionState {
        self.with_state(|s| s.clone())
    }

    /// Fetch-all lifecycle status
    pub fn status(&self) -> FetchStatus {
        self.with_state(|s| s.status)
    }

    /// Whether any operation currently holds the loading flag
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Subscribe to store events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R {
        // Transitions cannot leave the state half-applied, so a poisoned
        // lock still holds a coherent value
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn reject_duplicate(&self, title: String) -> ShelfError {
        let error = ShelfError::DuplicateTitle(title);
        let message = error.to_string();
        warn!(error = %message, "duplicate title rejected");
        self.with_state(|s| s.mutation_failed(message.clone()));
        self.events.emit(Event::MutationRejected { error: message });
        error
    }

    fn reject_mutation(&self, error: crate::error::RemoteError, operation: &str) -> ShelfError {
        warn!(operation, error = %error, "mutation failed");
        let message = error.to_string();
        self.with_state(|s| s.mutation_failed(message.clone()));
        self.events.emit(Event::MutationRejected { error: message });
        error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::remote::mock::MockRemote;

    fn item(id: i64, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            body: "body".to_string(),
            user_id: 1,
        }
    }

    fn store_with(remote: MockRemote) -> (ItemStore, Arc<MockRemote>) {
        let remote = Arc::new(remote);
        (ItemStore::new(remote.clone()), remote)
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_items_and_sets_status() {
        let (store, _remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        assert_eq!(store.status(), FetchStatus::Idle);

        let items = store.fetch_all().await.unwrap();

        assert_eq!(items.len(), 1);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, FetchStatus::Succeeded);
        assert_eq!(snapshot.items, vec![item(1, "A")]);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_all_failure_records_error() {
        let (store, _remote) =
            store_with(MockRemote::fetch_failure(RemoteError::Transport("down".to_string())));

        let result = store.fetch_all().await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, FetchStatus::Failed);
        assert_eq!(snapshot.error.as_deref(), Some("Network error: down"));
    }

    #[tokio::test]
    async fn test_create_appends_server_item() {
        let (store, remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        store.fetch_all().await.unwrap();

        let created = store.create(ItemDraft::new("B", "y", 1)).await.unwrap();

        assert_eq!(created.id, 2);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[1].title, "B");
        assert_eq!(remote.create_call_count(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_title_makes_no_remote_call() {
        let (store, remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        store.fetch_all().await.unwrap();

        let result = store.create(ItemDraft::new("A", "y", 1)).await;

        assert!(matches!(result, Err(ShelfError::DuplicateTitle(_))));
        assert_eq!(remote.create_call_count(), 0);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("An item with this title already exists.")
        );
        // Mutations never move the fetch status
        assert_eq!(snapshot.status, FetchStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_create_remote_failure_leaves_items_unchanged() {
        let (store, _remote) = store_with(MockRemote::create_failure(
            vec![item(1, "A")],
            RemoteError::Status {
                status: 500,
                body: "server error".to_string(),
            },
        ));
        store.fetch_all().await.unwrap();

        let result = store.create(ItemDraft::new("B", "y", 1)).await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert!(snapshot.error.as_deref().unwrap().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_update_to_taken_title_fails_locally() {
        let (store, remote) = store_with(MockRemote::with_items(vec![item(1, "A"), item(2, "B")]));
        store.fetch_all().await.unwrap();

        let result = store.update(item(2, "A")).await;

        assert!(matches!(result, Err(ShelfError::DuplicateTitle(_))));
        assert_eq!(remote.update_call_count(), 0);
        assert_eq!(store.snapshot().items[1].title, "B");
    }

    #[tokio::test]
    async fn test_update_to_own_title_succeeds() {
        let (store, remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        store.fetch_all().await.unwrap();

        let mut updated = item(1, "A");
        updated.body = "new body".to_string();
        store.update(updated).await.unwrap();

        assert_eq!(remote.update_call_count(), 1);
        assert_eq!(store.snapshot().items[0].body, "new body");
    }

    #[tokio::test]
    async fn test_update_vanished_id_is_silent_noop() {
        let (store, _remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        store.fetch_all().await.unwrap();

        store.update(item(99, "ghost")).await.unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].title, "A");
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let (store, remote) = store_with(MockRemote::with_items(vec![item(1, "A"), item(5, "E")]));
        store.fetch_all().await.unwrap();

        store.delete(5).await.unwrap();

        assert_eq!(remote.delete_call_count(), 1);
        let snapshot = store.snapshot();
        assert!(snapshot.find(5).is_none());
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_is_returned_but_not_recorded() {
        let (store, _remote) = store_with(MockRemote::delete_failure(
            vec![item(1, "A")],
            RemoteError::Transport("down".to_string()),
        ));
        store.fetch_all().await.unwrap();

        let result = store.delete(1).await;

        assert!(result.is_err());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_loading_flag_lowered_after_local_rejection() {
        let (store, _remote) = store_with(MockRemote::with_items(vec![item(1, "A")]));
        store.fetch_all().await.unwrap();

        let _ = store.create(ItemDraft::new("A", "y", 1)).await;

        assert!(!store.is_loading());
    }
}

//! Mock remote implementation for testing
//!
//! A configurable in-memory stand-in for the board that can simulate
//! successes, failures, and latency. Integration tests use it to verify the
//! store's synchronization logic without network access, and its call
//! counters make "no request was made" assertions direct instead of inferred.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::RemoteError;
use crate::remote::{Remote, RemoteResult};
use crate::types::{Item, ItemDraft};

/// Configuration for mock remote behavior
#[derive(Debug, Clone, Default)]
pub struct MockRemoteConfig {
    /// Items served by fetch_all
    pub items: Vec<Item>,

    /// Error to return from fetch_all instead of items
    pub fetch_error: Option<RemoteError>,

    /// Error to return from create
    pub create_error: Option<RemoteError>,

    /// Error to return from update
    pub update_error: Option<RemoteError>,

    /// Error to return from delete
    pub delete_error: Option<RemoteError>,

    /// Delay before completing operations (simulates network latency)
    pub delay: Duration,
}

/// Per-operation call counters, shared with the test through `Arc`
#[derive(Debug, Default)]
struct CallCounts {
    fetch: Mutex<usize>,
    create: Mutex<usize>,
    update: Mutex<usize>,
    delete: Mutex<usize>,
}

/// Mock remote for testing
pub struct MockRemote {
    config: MockRemoteConfig,
    next_id: AtomicI64,
    calls: Arc<CallCounts>,
    created: Mutex<Vec<ItemDraft>>,
}

impl MockRemote {
    /// Create a new mock remote with the given configuration.
    ///
    /// Ids assigned to created items continue from the highest seeded id.
    pub fn new(config: MockRemoteConfig) -> Self {
        let next_id = config.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            config,
            next_id: AtomicI64::new(next_id),
            calls: Arc::new(CallCounts::default()),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock remote serving an empty collection
    pub fn empty() -> Self {
        Self::new(MockRemoteConfig::default())
    }

    /// Create a mock remote serving the given items
    pub fn with_items(items: Vec<Item>) -> Self {
        Self::new(MockRemoteConfig {
            items,
            ..Default::default()
        })
    }

    /// Create a mock remote whose fetch_all fails
    pub fn fetch_failure(error: RemoteError) -> Self {
        Self::new(MockRemoteConfig {
            fetch_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock remote serving items but failing create
    pub fn create_failure(items: Vec<Item>, error: RemoteError) -> Self {
        Self::new(MockRemoteConfig {
            items,
            create_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock remote serving items but failing delete
    pub fn delete_failure(items: Vec<Item>, error: RemoteError) -> Self {
        Self::new(MockRemoteConfig {
            items,
            delete_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock remote that answers after a delay
    pub fn with_delay(items: Vec<Item>, delay: Duration) -> Self {
        Self::new(MockRemoteConfig {
            items,
            delay,
            ..Default::default()
        })
    }

    /// Get the number of times fetch_all was called
    pub fn fetch_call_count(&self) -> usize {
        *self.calls.fetch.lock().unwrap()
    }

    /// Get the number of times create was called
    pub fn create_call_count(&self) -> usize {
        *self.calls.create.lock().unwrap()
    }

    /// Get the number of times update was called
    pub fn update_call_count(&self) -> usize {
        *self.calls.update.lock().unwrap()
    }

    /// Get the number of times delete was called
    pub fn delete_call_count(&self) -> usize {
        *self.calls.delete.lock().unwrap()
    }

    /// Get all drafts that were submitted through create
    pub fn created_drafts(&self) -> Vec<ItemDraft> {
        self.created.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }
    }
}

#[async_trait]
impl Remote for MockRemote {
    async fn fetch_all(&self) -> RemoteResult<Vec<Item>> {
        *self.calls.fetch.lock().unwrap() += 1;
        self.simulate_latency().await;

        match &self.config.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.config.items.clone()),
        }
    }

    async fn create(&self, draft: &ItemDraft) -> RemoteResult<Item> {
        *self.calls.create.lock().unwrap() += 1;
        self.simulate_latency().await;

        if let Some(error) = &self.config.create_error {
            return Err(error.clone());
        }

        self.created.lock().unwrap().push(draft.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(draft.clone().with_id(id))
    }

    async fn update(&self, item: &Item) -> RemoteResult<Item> {
        *self.calls.update.lock().unwrap() += 1;
        self.simulate_latency().await;

        match &self.config.update_error {
            Some(error) => Err(error.clone()),
            // The board echoes the updated resource back
            None => Ok(item.clone()),
        }
    }

    async fn delete(&self, _id: i64) -> RemoteResult<()> {
        *self.calls.delete.lock().unwrap() += 1;
        self.simulate_latency().await;

        match &self.config.delete_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            body: "body".to_string(),
            user_id: 1,
        }
    }

    #[tokio::test]
    async fn test_mock_serves_seeded_items() {
        let remote = MockRemote::with_items(vec![item(1, "A"), item(2, "B")]);

        let items = remote.fetch_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(remote.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_empty() {
        let remote = MockRemote::empty();
        assert!(remote.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_assigns_ids_after_seeded_items() {
        let remote = MockRemote::with_items(vec![item(7, "A")]);

        let first = remote.create(&ItemDraft::new("B", "y", 1)).await.unwrap();
        let second = remote.create(&ItemDraft::new("C", "z", 1)).await.unwrap();

        assert_eq!(first.id, 8);
        assert_eq!(second.id, 9);
        assert_eq!(remote.create_call_count(), 2);
        assert_eq!(remote.created_drafts().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_fetch_failure() {
        let remote = MockRemote::fetch_failure(RemoteError::Transport("down".to_string()));

        let result = remote.fetch_all().await;
        assert!(result.is_err());
        assert_eq!(remote.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_create_failure() {
        let remote = MockRemote::create_failure(
            vec![],
            RemoteError::Status {
                status: 500,
                body: "server error".to_string(),
            },
        );

        let result = remote.create(&ItemDraft::new("A", "x", 1)).await;
        assert!(result.is_err());
        assert!(remote.created_drafts().is_empty());
    }

    #[tokio::test]
    async fn test_mock_update_echoes_item() {
        let remote = MockRemote::with_items(vec![item(1, "A")]);

        let updated = remote.update(&item(1, "A2")).await.unwrap();
        assert_eq!(updated.title, "A2");
        assert_eq!(remote.update_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_delete_counts_calls() {
        let remote = MockRemote::with_items(vec![item(1, "A")]);

        remote.delete(1).await.unwrap();
        remote.delete(1).await.unwrap();
        assert_eq!(remote.delete_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_with_delay() {
        let remote = MockRemote::with_delay(vec![], Duration::from_millis(50));

        let start = std::time::Instant::now();
        remote.fetch_all().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}

//! Remote board abstraction and implementations
//!
//! This module provides a unified trait for the remote item collection. The
//! store only ever talks to the board through this seam, which keeps the
//! synchronization logic testable against an in-memory double.
//!
//! # Examples
//!
//! ```no_run
//! use libshelf::remote::{Remote, http::HttpRemote};
//! use libshelf::types::ItemDraft;
//!
//! # async fn example() -> Result<(), libshelf::error::RemoteError> {
//! let remote = HttpRemote::new("https://jsonplaceholder.typicode.com")?;
//!
//! let items = remote.fetch_all().await?;
//! println!("{} items on the board", items.len());
//!
//! let created = remote.create(&ItemDraft::new("title", "body", 1)).await?;
//! println!("created item {}", created.id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::types::{Item, ItemDraft};

pub mod http;

// Mock remote is available for all builds (not just tests) to support
// integration tests
pub mod mock;

/// Result type for remote operations
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Remote trait for the item collection endpoint
///
/// One method per HTTP verb the board exposes. Implementations must be safe
/// to share across tasks; the store holds one behind an `Arc`.
#[async_trait]
pub trait Remote: Send + Sync {
    /// Retrieve the full collection
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Status` for a non-2xx response,
    /// `RemoteError::Transport` for connectivity failures, and
    /// `RemoteError::Decode` when the body is not item-shaped JSON.
    async fn fetch_all(&self) -> RemoteResult<Vec<Item>>;

    /// Create an item from a draft
    ///
    /// Returns the created item with its server-assigned id.
    async fn create(&self, draft: &ItemDraft) -> RemoteResult<Item>;

    /// Replace an existing item
    ///
    /// The full item is sent; the server echoes the updated resource back.
    async fn update(&self, item: &Item) -> RemoteResult<Item>;

    /// Remove an item by id
    ///
    /// Success is implied by a non-error status; no body is expected.
    async fn delete(&self, id: i64) -> RemoteResult<()>;

    /// Identifier for this remote, used in logs (e.g. a base URL or "mock")
    fn name(&self) -> &str;
}

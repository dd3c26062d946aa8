//! Core types for shelf

use serde::{Deserialize, Serialize};

/// A single item on the board.
///
/// The wire format uses camelCase keys (`userId`), matching the remote
/// collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, unique and immutable once created
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Owner reference, opaque to this client
    pub user_id: i64,
}

/// Creation payload: an item before the server has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    /// Promote this draft to a full item with a server-assigned id
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}

/// Lifecycle state of the most recent fetch-all operation.
///
/// Create/update/delete never move this; only fetch-all does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

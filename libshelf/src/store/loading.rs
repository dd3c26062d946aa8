//! Global loading flag
//!
//! A single process-wide boolean the presentation layer uses to drive a
//! busy indicator. Every store operation holds a [`LoadingGuard`] for its
//! full extent; the guard raises the flag on acquisition and lowers it when
//! dropped, on success and failure paths alike.
//!
//! The flag is NOT reference-counted: when operations overlap, whichever
//! guard drops first lowers the flag even though another operation is still
//! in flight. Consumers that need exact in-flight tracking should count
//! started/completed events from the store's event stream instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::events::{Event, EventBus};

#[derive(Debug, Default)]
pub struct LoadingFlag {
    active: AtomicBool,
}

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation currently holds the flag
    pub fn is_loading(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// RAII guard that lowers the loading flag when dropped
pub(crate) struct LoadingGuard {
    flag: Arc<LoadingFlag>,
    events: EventBus,
}

impl LoadingGuard {
    /// Raise the flag for the duration of the returned guard
    pub(crate) fn acquire(flag: &Arc<LoadingFlag>, events: &EventBus) -> Self {
        flag.active.store(true, Ordering::SeqCst);
        events.emit(Event::LoadingChanged { loading: true });
        Self {
            flag: Arc::clone(flag),
            events: events.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.active.store(false, Ordering::SeqCst);
        self.events.emit(Event::LoadingChanged { loading: false });
    }
}

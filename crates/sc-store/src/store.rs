//! Lock-guarded save map with per-entry expiration timers.
//!
//! Every insert schedules one timer that sleeps for the retention window and
//! then removes its entry. There is no sweep and no capacity bound: between
//! expirations the map grows with the insert rate.

use bytes::Bytes;
use parking_lot::Mutex;
use sc_core::config::DEFAULT_RETENTION_SECS;
use sc_core::{Handle, Result, ScError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, warn};

type Entries = Mutex<HashMap<String, Bytes>>;

/// In-memory store of compressed saves keyed by generated handle.
///
/// Cloning is cheap and every clone shares the same map. Entries are never
/// updated in place; a new payload always gets a new handle.
#[derive(Clone)]
pub struct SaveStore {
    entries: Arc<Entries>,
    retention: Duration,
}

impl SaveStore {
    pub fn new() -> Self {
        Self::with_retention(Duration::from_secs(DEFAULT_RETENTION_SECS))
    }

    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            retention,
        }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Store `payload` under a fresh handle and schedule its removal.
    ///
    /// The expiry timer runs on the current Tokio runtime. Outside a runtime
    /// it falls back to a dedicated thread.
    pub fn insert(&self, payload: Bytes) -> Handle {
        let handle = Handle::generate();
        let size = payload.len();
        self.entries.lock().insert(handle.as_str().to_owned(), payload);
        self.schedule_expiry(handle.clone());
        debug!(%handle, bytes = size, retention_secs = self.retention.as_secs(), "save stored");
        handle
    }

    /// Fetch the payload for `handle`. Reads never extend the entry's life.
    pub fn lookup(&self, handle: &str) -> Result<Bytes> {
        self.entries
            .lock()
            .get(handle)
            .cloned()
            .ok_or_else(|| ScError::not_found(handle))
    }

    /// Remove `handle` if present. Returns whether an entry was removed;
    /// removing an absent handle is a no-op.
    pub fn expire(&self, handle: &str) -> bool {
        expire_entry(&self.entries, handle)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn schedule_expiry(&self, handle: Handle) {
        // The timer must not keep a dropped store alive.
        let entries = Arc::downgrade(&self.entries);
        let retention = self.retention;

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    tokio::time::sleep(retention).await;
                    expire_weak(&entries, handle.as_str());
                });
            }
            Err(_) => {
                warn!(%handle, "no Tokio runtime, expiring save from a dedicated thread");
                std::thread::spawn(move || {
                    std::thread::sleep(retention);
                    expire_weak(&entries, handle.as_str());
                });
            }
        }
    }
}

fn expire_weak(entries: &Weak<Entries>, handle: &str) {
    if let Some(entries) = entries.upgrade() {
        expire_entry(&entries, handle);
    }
}

fn expire_entry(entries: &Entries, handle: &str) -> bool {
    let removed = entries.lock().remove(handle).is_some();
    if removed {
        debug!(handle, "save expired");
    }
    removed
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SaveStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveStore")
            .field("entries", &self.len())
            .field("retention", &self.retention)
            .finish()
    }
}

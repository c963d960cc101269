// src/services/edge_cache.rs
use std::{
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;

/// A recorded upstream outcome, successful or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Arc<[u8]>,
}

impl CachedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    response: CachedResponse,
    stored_at: Instant,
}

/// Short-lived cache of upstream responses keyed by request URL.
/// Everything is cached, error statuses and non-JSON bodies included.
#[derive(Clone)]
pub struct EdgeCache {
    inner: Arc<DashMap<String, Entry>>,
    ttl: Duration,
}

impl Debug for EdgeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.inner.len())
            .finish()
    }
}

impl EdgeCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fresh entry for `key`, evicting it if it has outlived the TTL.
    pub fn get(&self, key: &str) -> Option<CachedResponse> {
        if !self.is_enabled() {
            return None;
        }
        let now = Instant::now();
        let fresh = self.inner.get(key).and_then(|entry| {
            if now.duration_since(entry.stored_at) < self.ttl {
                Some(entry.response.clone())
            } else {
                None
            }
        });
        if fresh.is_none() {
            self.inner
                .remove_if(key, |_, entry| now.duration_since(entry.stored_at) >= self.ttl);
        }
        fresh
    }

    pub fn insert(&self, key: impl Into<String>, response: CachedResponse) {
        if !self.is_enabled() {
            return;
        }
        self.inner.insert(
            key.into(),
            Entry {
                response,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every expired entry. Returns number removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.inner.retain(|_, entry| {
            let fresh = now.duration_since(entry.stored_at) < self.ttl;
            if !fresh {
                removed += 1;
            }
            fresh
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

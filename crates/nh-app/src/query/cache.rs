//! In-memory query cache keyed by [`QueryKey`].
//! 以查询键为索引的内存缓存。
//!
//! Each entry holds the last result, its freshness timestamp and an in-flight
//! flag. Invalidation clears whole namespaces and bumps a generation counter
//! so results of fetches started before the invalidation are discarded.

use std::collections::HashMap;
use std::sync::Arc;

use nh_core::ports::ClockPort;
use nh_core::NotesPage;
use tokio::sync::Mutex;
use tracing::debug;

use super::QueryKey;

pub struct QueryCache {
    inner: Mutex<Inner>,
    clock: Arc<dyn ClockPort>,
    stale_time_ms: i64,
}

#[derive(Default)]
pub(crate) struct Inner {
    entries: HashMap<QueryKey, CacheEntry>,
    generation: u64,
}

#[derive(Default)]
struct CacheEntry {
    data: Option<NotesPage>,
    error: Option<String>,
    updated_at_ms: i64,
    fetching: bool,
}

/// Proof that the holder owns the in-flight fetch for a key.
#[derive(Debug)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// Snapshot of one cache entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedQuery {
    pub data: Option<NotesPage>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub is_fresh: bool,
}

impl QueryCache {
    pub fn new(clock: Arc<dyn ClockPort>, stale_time_ms: u64) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            clock,
            stale_time_ms: stale_time_ms as i64,
        }
    }

    pub async fn get(&self, key: &QueryKey) -> Option<CachedQuery> {
        let now = self.clock.now_ms();
        let inner = self.inner.lock().await;
        inner.entries.get(key).map(|entry| CachedQuery {
            data: entry.data.clone(),
            error: entry.error.clone(),
            is_fetching: entry.fetching,
            is_fresh: entry.is_fresh(now, self.stale_time_ms),
        })
    }

    pub async fn data(&self, key: &QueryKey) -> Option<NotesPage> {
        let inner = self.inner.lock().await;
        inner.entries.get(key).and_then(|entry| entry.data.clone())
    }

    pub async fn is_fresh(&self, key: &QueryKey) -> bool {
        let now = self.clock.now_ms();
        let inner = self.inner.lock().await;
        inner
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(now, self.stale_time_ms))
    }

    /// Claim the fetch for `key`.
    ///
    /// Returns `None` when the entry is still fresh or another fetch for the
    /// same key is already in flight.
    pub async fn try_begin_fetch(&self, key: &QueryKey) -> Option<FetchTicket> {
        let now = self.clock.now_ms();
        let mut inner = self.inner.lock().await;
        let generation = inner.generation;
        let entry = inner.entries.entry(key.clone()).or_default();

        if entry.fetching || entry.is_fresh(now, self.stale_time_ms) {
            return None;
        }

        entry.fetching = true;
        Some(FetchTicket {
            key: key.clone(),
            generation,
        })
    }

    /// Record the outcome of a fetch. Returns `false` when the result was
    /// discarded because the namespace was invalidated after the fetch began.
    pub async fn settle(&self, ticket: FetchTicket, outcome: Result<NotesPage, String>) -> bool {
        let now = self.clock.now_ms();
        let mut inner = self.inner.lock().await;

        if ticket.generation != inner.generation {
            debug!(key = %ticket.key, "discarding result fetched before invalidation");
            return false;
        }

        let entry = inner.entries.entry(ticket.key).or_default();
        entry.fetching = false;
        match outcome {
            Ok(page) => {
                entry.data = Some(page);
                entry.error = None;
                entry.updated_at_ms = now;
            }
            Err(message) => {
                entry.error = Some(message);
            }
        }
        true
    }

    /// Hold the cache lock, stalling every other cache call until dropped.
    #[cfg(test)]
    pub(crate) async fn lock_inner(&self) -> tokio::sync::MutexGuard<'_, Inner> {
        self.inner.lock().await
    }

    /// Clear every entry in `namespace`. In-flight fetches for those entries
    /// will have their results discarded.
    pub async fn invalidate_namespace(&self, namespace: &str) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.entries.len();
        inner.entries.retain(|key, _| key.namespace() != namespace);
        inner.generation += 1;
        let removed = before - inner.entries.len();
        debug!(namespace, removed, "invalidated cached queries");
        removed
    }
}

impl CacheEntry {
    fn is_fresh(&self, now_ms: i64, stale_time_ms: i64) -> bool {
        self.data.is_some() && self.error.is_none() && now_ms - self.updated_at_ms < stale_time_ms
    }
}

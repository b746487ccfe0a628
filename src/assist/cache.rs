use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::assist::key::QueryKey;

struct CachedResult<E> {
    key: QueryKey,
    value: Arc<[E]>,
}

/// Single-slot memoization of the most recent assist query.
///
/// The whole compare-fetch-store sequence runs under one lock, so concurrent
/// callers with the same key trigger at most one fetch and all observe the
/// same value. Any successful miss evicts the previous entry.
///
/// The lock is a plain `std::sync::Mutex` owned by the cache. Callers that need
/// another discipline (an async lock, a dedicated actor) wrap the cache rather
/// than inject one.
pub struct AssistCache<E> {
    slot: Mutex<Option<CachedResult<E>>>,
}

impl<E> Default for AssistCache<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AssistCache<E> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    // The slot is only written after `fetch` succeeds, so a panic inside
    // `fetch` leaves a consistent entry behind and the guard can be reused.
    fn lock_slot(&self) -> MutexGuard<'_, Option<CachedResult<E>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the assists for `key`, calling `fetch` only on a miss.
    ///
    /// On a hit the cached sequence is returned as-is. On a miss `fetch` runs
    /// while the lock is held; its result replaces the cached entry. If
    /// `fetch` fails the cache is left untouched and the error is returned.
    pub fn get_assists<F, Err>(&self, key: QueryKey, fetch: F) -> Result<Arc<[E]>, Err>
    where
        F: FnOnce() -> Result<Vec<E>, Err>,
    {
        let mut slot = self.lock_slot();

        if let Some(cached) = slot.as_ref().filter(|cached| cached.key == key) {
            debug!("Assist cache hit for {}", key);
            return Ok(Arc::clone(&cached.value));
        }

        debug!("Assist cache miss for {}", key);
        let value: Arc<[E]> = fetch()?.into();
        *slot = Some(CachedResult {
            key,
            value: Arc::clone(&value),
        });

        Ok(value)
    }

    /// Key of the currently cached entry, if any
    pub fn cached_key(&self) -> Option<QueryKey> {
        self.lock_slot().as_ref().map(|cached| cached.key.clone())
    }

    /// Drop the cached entry
    pub fn clear(&self) {
        self.lock_slot().take();
    }

    /// Drop the cached entry if its key matches `predicate`.
    ///
    /// The check and the removal happen under one lock. Returns true if an
    /// entry was dropped.
    pub fn clear_if<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&QueryKey) -> bool,
    {
        let mut slot = self.lock_slot();
        if slot.as_ref().is_some_and(|cached| predicate(&cached.key)) {
            slot.take();
            true
        } else {
            false
        }
    }
}

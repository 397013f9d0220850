//! Memoization of per-subset computations.
//!
//! Tables are immutable once built, so a partition (or a diversity count)
//! computed for one attribute subset stays valid for the lifetime of the
//! table. [`SubsetCache`] keeps those results keyed by the resolved column
//! positions and shares them as [`Arc`]s, so concurrent callers can reuse one
//! result without copying it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

/// A cache keyed by resolved column positions.
///
/// The cache never evicts; it holds at most one entry per distinct subset
/// that has been queried.
pub struct SubsetCache<V> {
    map: RwLock<HashMap<Vec<usize>, Arc<V>>>,
    enabled: bool,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<V> SubsetCache<V> {
    pub fn new(enabled: bool) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            enabled,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
    /// Get the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Returns the number of cached subsets.
    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry. Statistics are kept.
    pub fn clear(&self) {
        self.map.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Get the cached result for `key`, computing and storing it on a miss.
    ///
    /// With caching disabled, `compute` runs on every call.
    pub fn get_or_insert_with<F>(&self, key: &[usize], compute: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        if !self.enabled {
            return Arc::new(compute());
        }

        if let Some(value) = self
            .map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("cache: hit for columns {:?}", key);
            return Arc::clone(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("cache: miss for columns {:?}", key);
        let value = Arc::new(compute());

        // Another caller may have filled the slot in the meantime; keep the first.
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(map.entry(key.to_vec()).or_insert(value))
    }
}

impl<V> Clone for SubsetCache<V> {
    fn clone(&self) -> Self {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            map: RwLock::new(map),
            enabled: self.enabled,
            hits: AtomicUsize::new(self.hits()),
            misses: AtomicUsize::new(self.misses()),
        }
    }
}

impl<V> std::fmt::Debug for SubsetCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubsetCache")
            .field("enabled", &self.enabled)
            .field("len", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}

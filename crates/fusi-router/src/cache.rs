//! Pattern lookup memoization
//!
//! Caches the outcome of `match_pattern` keyed by `(candidate, fallback)`.
//! Values are positions in the router's append-only route list, so a
//! cached hit stays valid until the next registration, which clears the
//! cache.

use parking_lot::RwLock;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Max entries in cache
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 128 }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub max_entries: usize,
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    /// Route position, `None` for a cached miss
    slot: Option<usize>,
    inserted: u64,
}

/// Entries for one candidate, one per distinct fallback
type Slots = SmallVec<[(Option<String>, CacheEntry); 2]>;

#[derive(Debug, Default)]
struct Entries {
    /// Candidate -> per-fallback entries, looked up by `&str`
    map: HashMap<String, Slots>,
    len: usize,
    seq: u64,
}

impl Entries {
    fn find(&self, candidate: &str, fallback: Option<&str>) -> Option<&CacheEntry> {
        self.map
            .get(candidate)?
            .iter()
            .find(|(f, _)| f.as_deref() == fallback)
            .map(|(_, e)| e)
    }

    fn remove_oldest(&mut self) {
        let oldest = self
            .map
            .iter()
            .flat_map(|(candidate, slots)| {
                slots.iter().map(move |(f, e)| (candidate, f, e.inserted))
            })
            .min_by_key(|(_, _, inserted)| *inserted)
            .map(|(candidate, f, _)| (candidate.clone(), f.clone()));

        if let Some((candidate, fallback)) = oldest {
            if let Some(slots) = self.map.get_mut(&candidate) {
                slots.retain(|(f, _)| *f != fallback);
                if slots.is_empty() {
                    self.map.remove(&candidate);
                }
            }
            self.len -= 1;
        }
    }
}

/// Bounded cache of pattern lookups
#[derive(Debug)]
pub(crate) struct PatternCache {
    entries: RwLock<Entries>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PatternCache {
    pub(crate) fn new(config: &CacheConfig) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            max_entries: config.max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Outer `None` is a cache miss, inner `None` a cached no-match
    pub(crate) fn get(&self, candidate: &str, fallback: Option<&str>) -> Option<Option<usize>> {
        let found = self.entries.read().find(candidate, fallback).map(|e| e.slot);

        match found {
            Some(slot) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(candidate, ?fallback, ?slot, "pattern cache hit");
                Some(slot)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(candidate, ?fallback, "pattern cache miss");
                None
            }
        }
    }

    pub(crate) fn set(&self, candidate: &str, fallback: Option<&str>, slot: Option<usize>) {
        if self.max_entries == 0 {
            return;
        }
        let mut entries = self.entries.write();
        entries.seq += 1;
        let entry = CacheEntry {
            slot,
            inserted: entries.seq,
        };

        if let Some(slots) = entries.map.get_mut(candidate) {
            if let Some((_, existing)) = slots.iter_mut().find(|(f, _)| f.as_deref() == fallback) {
                *existing = entry;
                return;
            }
        }

        // Full: remove oldest
        if entries.len >= self.max_entries {
            entries.remove_oldest();
        }

        entries
            .map
            .entry(candidate.to_string())
            .or_default()
            .push((fallback.map(str::to_string), entry));
        entries.len += 1;
    }

    pub(crate) fn clear(&self) {
        let mut entries = self.entries.write();
        if entries.len > 0 {
            tracing::trace!(evicted = entries.len, "pattern cache invalidated");
        }
        entries.map.clear();
        entries.len = 0;
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.read().len,
            max_entries: self.max_entries,
        }
    }
}

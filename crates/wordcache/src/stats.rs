//! Lookup counters, split by where each answer came from

use std::sync::atomic::{AtomicU64, Ordering};

use crate::cache::Provenance;

/// Per-provenance lookup counts and cache churn
#[derive(Debug, Default)]
pub struct CacheStats {
    from_cache: AtomicU64,
    from_index: AtomicU64,
    absent: AtomicU64,
    evictions: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished lookup
    pub fn record(&self, provenance: Provenance) {
        let counter = match provenance {
            Provenance::Cache => &self.from_cache,
            Provenance::Index => &self.from_index,
            Provenance::Absent => &self.absent,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Lookups served from the cache
    pub fn hits(&self) -> u64 {
        self.from_cache.load(Ordering::Relaxed)
    }

    /// Lookups answered by the index; each one filled a cache slot
    pub fn index_hits(&self) -> u64 {
        self.from_index.load(Ordering::Relaxed)
    }

    /// Lookups found nowhere
    pub fn absent(&self) -> u64 {
        self.absent.load(Ordering::Relaxed)
    }

    /// Lookups the cache could not answer, found or not
    pub fn misses(&self) -> u64 {
        self.index_hits() + self.absent()
    }

    /// All recorded lookups
    pub fn lookups(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Slots evicted
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Share of found words served by the cache, 0.0 before any hit.
    ///
    /// Absent lookups are left out: they could never have been cached.
    pub fn hit_ratio(&self) -> f64 {
        let found = self.hits() + self.index_hits();
        match found {
            0 => 0.0,
            n => self.hits() as f64 / n as f64,
        }
    }
}

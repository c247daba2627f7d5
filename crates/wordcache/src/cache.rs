//! WordCache: recency cache wrapping an InvertedIndex

use std::fmt;
use std::sync::Arc;
use parking_lot::Mutex;
use tracing::debug;
use wordindex::{DocId, DocumentSet, EntryId, InvertedIndex};

use crate::recency::RecencyCache;
use crate::stats::CacheStats;

/// Default number of cached words
pub const DEFAULT_CAPACITY: usize = 5;

/// Where a lookup result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Served from the recency cache
    Cache,
    /// Found in the index and now cached
    Index,
    /// Not indexed
    Absent,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Cache => write!(f, "cache"),
            Provenance::Index => write!(f, "index"),
            Provenance::Absent => write!(f, "absent"),
        }
    }
}

/// Result of [`WordCache::lookup`], borrowing the index's document set
#[derive(Clone, Copy)]
pub struct Lookup<'a> {
    provenance: Provenance,
    documents: Option<&'a DocumentSet>,
    index: &'a InvertedIndex,
}

impl<'a> Lookup<'a> {
    /// Where the result came from
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// The word's document set, `None` when absent
    pub fn document_set(&self) -> Option<&'a DocumentSet> {
        self.documents
    }

    /// Matching documents, most recently indexed first
    pub fn documents(&self) -> impl Iterator<Item = DocId> + 'a {
        self.documents.into_iter().flat_map(|set| set.iter())
    }

    /// Names of the matching documents
    pub fn document_names(&self) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.index;
        self.documents().filter_map(move |doc| index.document_name(doc))
    }

    /// Check if any document matched
    pub fn is_found(&self) -> bool {
        self.documents.is_some()
    }

    /// Number of matching documents
    pub fn len(&self) -> usize {
        self.documents.map_or(0, DocumentSet::len)
    }

    /// Check if no document matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("provenance", &self.provenance)
            .field("documents", &self.document_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Cache-then-index lookup over a built, read-only index
pub struct WordCache {
    /// Canonical word data, frozen after the build phase
    index: Arc<InvertedIndex>,

    /// Recently looked-up words, holding entry handles into `index`
    cache: Mutex<RecencyCache<EntryId>>,

    /// Lookup statistics
    stats: CacheStats,
}

impl WordCache {
    /// Create a WordCache over a built index
    ///
    /// # Arguments
    /// * `index` - Fully built index; no further inserts are possible
    /// * `capacity` - Maximum number of cached words
    ///
    /// # Panics
    /// If `capacity` is zero
    pub fn new(index: InvertedIndex, capacity: usize) -> Self {
        Self::from_shared(Arc::new(index), capacity)
    }

    /// Create a WordCache over an index already shared elsewhere
    pub fn from_shared(index: Arc<InvertedIndex>, capacity: usize) -> Self {
        Self {
            index,
            cache: Mutex::new(RecencyCache::new(capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Look up a normalized word
    ///
    /// Checks the cache first. On a miss, consults the index and caches
    /// the entry if found. Absent words are never cached.
    pub fn lookup(&self, word: &str) -> Lookup<'_> {
        let (provenance, documents) = self.resolve(word);
        self.stats.record(provenance);
        Lookup {
            provenance,
            documents,
            index: &self.index,
        }
    }

    fn resolve(&self, word: &str) -> (Provenance, Option<&DocumentSet>) {
        if word.is_empty() {
            return (Provenance::Absent, None);
        }

        // One critical section covers both get and put.
        let mut cache = self.cache.lock();

        if let Some(&id) = cache.get(word) {
            if let Some(documents) = self.index.document_set(id) {
                return (Provenance::Cache, Some(documents));
            }
        }

        let Some(id) = self.index.find_entry(word) else {
            return (Provenance::Absent, None);
        };

        if let Some(shared) = self.index.word(id) {
            if let Some((evicted, _)) = cache.put(Arc::clone(shared), id) {
                self.stats.record_eviction();
                debug!("Evicted '{}' from cache", evicted);
            }
        }

        (Provenance::Index, self.index.document_set(id))
    }

    /// Cached words, most recently used first
    pub fn cached_words(&self) -> Vec<String> {
        self.cache.lock().words().map(str::to_owned).collect()
    }

    /// Get lookup statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// The underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

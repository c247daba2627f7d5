//! Inverted index implementation
//!
//! Layout:
//! - `entries`: append-only arena of (word, document set) pairs
//! - `buckets`: one chain of entry handles per hash slot; a chain is
//!   scanned newest-first and matched on the full word, never the hash alone

use std::sync::Arc;
use tracing::debug;

use crate::docset::{DocId, DocumentSet};
use crate::documents::DocumentTable;
use crate::error::{Error, Result};

/// Default bucket count, a prime near the expected vocabulary size
pub const DEFAULT_BUCKETS: usize = 10007;

/// Stable handle to an index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

struct IndexEntry {
    word: Arc<str>,
    documents: DocumentSet,
}

/// Shape of the hash table, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct words
    pub words: usize,
    /// Registered documents
    pub documents: usize,
    /// Bucket count
    pub buckets: usize,
    /// Buckets holding at least one entry
    pub used_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

/// djb2 over the word's bytes, reduced modulo `buckets`
pub fn hash_word(word: &str, buckets: usize) -> usize {
    let mut h: u64 = 5381;
    for &b in word.as_bytes() {
        h = (h << 5).wrapping_add(h).wrapping_add(u64::from(b));
    }
    (h % buckets as u64) as usize
}

/// Word to document-set index with separately chained buckets
pub struct InvertedIndex {
    buckets: Vec<Vec<EntryId>>,
    entries: Vec<IndexEntry>,
    documents: DocumentTable,
}

impl InvertedIndex {
    /// Create an index with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create an index with a specific bucket count
    ///
    /// # Panics
    /// If `buckets` is zero
    pub fn with_buckets(buckets: usize) -> Self {
        assert!(buckets > 0, "Bucket count must be greater than 0");

        Self {
            buckets: vec![Vec::new(); buckets],
            entries: Vec::new(),
            documents: DocumentTable::new(),
        }
    }

    /// Register a document name, returning its handle
    ///
    /// # Panics
    /// If more than `u32::MAX` distinct documents are registered
    pub fn add_document(&mut self, name: &str) -> DocId {
        self.documents.intern(name)
    }

    /// Record that `word` occurs in `doc`
    ///
    /// Inserting a pair that is already present changes nothing.
    ///
    /// # Returns
    /// * `Result<EntryId>` - Handle of the word's entry, or `Error::EmptyWord`
    pub fn insert(&mut self, word: &str, doc: DocId) -> Result<EntryId> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        let bucket = hash_word(word, self.buckets.len());
        let id = match self.scan_chain(bucket, word) {
            Some(id) => id,
            None => {
                // Fully build the entry before linking it into the chain.
                let id = EntryId(self.entries.len());
                self.entries.push(IndexEntry {
                    word: Arc::from(word),
                    documents: DocumentSet::new(),
                });
                self.buckets[bucket].push(id);
                id
            }
        };

        self.entries[id.0].documents.insert(doc);
        Ok(id)
    }

    /// Index one document: register its name and insert every word
    ///
    /// # Arguments
    /// * `name` - Document name
    /// * `words` - Normalized words, typically from [`crate::tokenizer::tokenize`]
    ///
    /// Empty words are skipped.
    ///
    /// # Panics
    /// If more than `u32::MAX` distinct documents are registered
    pub fn index_document<I, S>(&mut self, name: &str, words: I) -> DocId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doc = self.add_document(name);
        let mut count = 0usize;

        for word in words {
            if self.insert(word.as_ref(), doc).is_ok() {
                count += 1;
            }
        }

        debug!("Indexed {} words from {}", count, name);
        doc
    }

    /// Find the document set for `word`
    pub fn find(&self, word: &str) -> Option<&DocumentSet> {
        self.find_entry(word).map(|id| &self.entries[id.0].documents)
    }

    /// Find the entry handle for `word`
    pub fn find_entry(&self, word: &str) -> Option<EntryId> {
        if word.is_empty() {
            return None;
        }
        self.scan_chain(hash_word(word, self.buckets.len()), word)
    }

    /// Shared word string of an entry
    pub fn word(&self, id: EntryId) -> Option<&Arc<str>> {
        self.entries.get(id.0).map(|entry| &entry.word)
    }

    /// Document set of an entry
    pub fn document_set(&self, id: EntryId) -> Option<&DocumentSet> {
        self.entries.get(id.0).map(|entry| &entry.documents)
    }

    /// Resolve a document handle to its name
    pub fn document_name(&self, doc: DocId) -> Option<&str> {
        self.documents.name(doc)
    }

    /// Look up a document handle by name
    pub fn document_id(&self, name: &str) -> Option<DocId> {
        self.documents.get(name)
    }

    /// Number of registered documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate words in first-seen order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| &*entry.word)
    }

    /// Table shape statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.entries.len(),
            documents: self.documents.len(),
            buckets: self.buckets.len(),
            used_buckets: self.buckets.iter().filter(|chain| !chain.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    fn scan_chain(&self, bucket: usize, word: &str) -> Option<EntryId> {
        self.buckets[bucket]
            .iter()
            .rev()
            .copied()
            .find(|id| &*self.entries[id.0].word == word)
    }

    #[cfg(test)]
    fn chain(&self, bucket: usize) -> Vec<&str> {
        self.buckets[bucket]
            .iter()
            .rev()
            .map(|id| &*self.entries[id.0].word)
            .collect()
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn names<'a>(index: &'a InvertedIndex, word: &str) -> Vec<&'a str> {
        index
            .find(word)
            .map(|set| set.iter().filter_map(|d| index.document_name(d)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_djb2_known_values() {
        // h("") = 5381, h("a") = 5381 * 33 + 97
        assert_eq!(hash_word("", usize::MAX), 5381);
        assert_eq!(hash_word("a", usize::MAX), 177670);
        assert_eq!(hash_word("a", 10007), 177670 % 10007);
        assert_eq!(hash_word("test", 10007), hash_word("test", 10007));
    }

    #[test]
    fn test_insert_and_find() {
        let mut index = InvertedIndex::new();
        let doc = index.add_document("doc1.txt");

        index.insert("alpha", doc).unwrap();

        assert_eq!(names(&index, "alpha"), vec!["doc1.txt"]);
        assert!(index.find("beta").is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_idempotent_insert() {
        let mut index = InvertedIndex::new();
        let doc = index.add_document("doc1.txt");

        let first = index.insert("data", doc).unwrap();
        for _ in 0..5 {
            assert_eq!(index.insert("data", doc).unwrap(), first);
        }

        assert_eq!(index.find("data").unwrap().len(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_word_rejected() {
        let mut index = InvertedIndex::new();
        let doc = index.add_document("doc1.txt");

        assert!(matches!(index.insert("", doc), Err(Error::EmptyWord)));
        assert!(index.find("").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_index_document_skips_empty_words() {
        let mut index = InvertedIndex::new();
        index.index_document("doc1", ["", "kept", ""]);

        assert_eq!(index.words().collect::<Vec<_>>(), vec!["kept"]);
        assert_eq!(names(&index, "kept"), vec!["doc1"]);
    }

    #[test]
    fn test_collisions_use_full_comparison() {
        // A single bucket forces every word into one chain.
        let mut index = InvertedIndex::with_buckets(1);
        let d1 = index.add_document("one");
        let d2 = index.add_document("two");

        index.insert("apple", d1).unwrap();
        index.insert("banana", d2).unwrap();
        index.insert("cherry", d1).unwrap();
        index.insert("banana", d1).unwrap();

        assert_eq!(index.chain(0), vec!["cherry", "banana", "apple"]);
        assert_eq!(names(&index, "apple"), vec!["one"]);
        assert_eq!(names(&index, "banana"), vec!["one", "two"]);
        assert!(index.find("apples").is_none());

        let stats = index.stats();
        assert_eq!(stats.longest_chain, 3);
        assert_eq!(stats.used_buckets, 1);
    }

    #[test]
    fn test_index_document_scenario() {
        let mut index = InvertedIndex::new();
        index.index_document("doc1", tokenize("test small"));
        index.index_document("doc2", tokenize("alpha"));
        index.index_document("doc3", tokenize("small test"));

        assert_eq!(names(&index, "test"), vec!["doc3", "doc1"]);
        assert_eq!(names(&index, "alpha"), vec!["doc2"]);
        assert!(index.find("missing").is_none());
        assert_eq!(index.document_count(), 3);
        assert_eq!(index.words().collect::<Vec<_>>(), vec!["test", "small", "alpha"]);
    }

    #[test]
    fn test_case_and_punctuation_fold_together() {
        let mut index = InvertedIndex::new();
        index.index_document("a", tokenize("Data"));
        index.index_document("b", tokenize("DATA"));
        index.index_document("c", tokenize("data,"));

        assert_eq!(names(&index, "data"), vec!["c", "b", "a"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_reindexing_same_name_reuses_handle() {
        let mut index = InvertedIndex::new();
        let first = index.index_document("doc1", tokenize("one two"));
        let second = index.index_document("doc1", tokenize("two three"));

        assert_eq!(first, second);
        assert_eq!(index.find("two").unwrap().len(), 1);
        assert_eq!(index.document_id("doc1"), Some(first));
    }

    #[test]
    fn test_handles_are_stable() {
        let mut index = InvertedIndex::with_buckets(7);
        let doc = index.add_document("d");
        let id = index.insert("stable", doc).unwrap();

        for i in 0..100 {
            index.insert(&format!("w{}", i), doc).unwrap();
        }

        assert_eq!(index.word(id).map(|w| &**w), Some("stable"));
        assert_eq!(index.find_entry("stable"), Some(id));
        assert!(index.document_set(id).unwrap().contains(doc));
    }
}

//! Per-word document sets

use std::fmt;

/// Handle for a document registered with the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(u32);

impl DocId {
    /// # Panics
    /// If `idx` does not fit in a `u32`
    pub(crate) fn from_index(idx: usize) -> Self {
        match u32::try_from(idx) {
            Ok(raw) => DocId(raw),
            Err(_) => panic!("Document table overflow: {} documents", idx),
        }
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw numeric value of the handle
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Duplicate-free set of documents attached to one word.
///
/// Iteration yields the most recently added document first. The set only
/// grows; nothing is ever removed once the index owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    docs: Vec<DocId>,
}

impl DocumentSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a document. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, doc: DocId) -> bool {
        // Words repeat within a document, so the newest member is the
        // likeliest duplicate.
        if self.docs.last() == Some(&doc) || self.docs.contains(&doc) {
            return false;
        }
        self.docs.push(doc);
        true
    }

    /// Check membership
    pub fn contains(&self, doc: DocId) -> bool {
        self.docs.contains(&doc)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = DocId> + DoubleEndedIterator + '_ {
        self.docs.iter().rev().copied()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = DocId;
    type IntoIter = std::iter::Copied<std::iter::Rev<std::slice::Iter<'a, DocId>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter().rev().copied()
    }
}

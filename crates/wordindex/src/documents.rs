//! Document name interning

use std::collections::HashMap;
use std::sync::Arc;
use ahash::RandomState;

use crate::docset::DocId;

/// Maps document names to compact [`DocId`] handles and back
#[derive(Debug, Default)]
pub struct DocumentTable {
    names: Vec<Arc<str>>,
    ids: HashMap<Arc<str>, DocId, RandomState>,
}

impl DocumentTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning the existing handle if already known
    ///
    /// # Panics
    /// If more than `u32::MAX` distinct names are registered
    pub fn intern(&mut self, name: &str) -> DocId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = DocId::from_index(self.names.len());
        let name: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&name));
        self.ids.insert(name, id);
        id
    }

    /// Resolve a handle to its name
    pub fn name(&self, id: DocId) -> Option<&str> {
        self.names.get(id.index()).map(|name| &**name)
    }

    /// Look up the handle for `name` without registering it
    pub fn get(&self, name: &str) -> Option<DocId> {
        self.ids.get(name).copied()
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no documents are registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_same_name() {
        let mut table = DocumentTable::new();
        let a = table.intern("doc1.txt");
        let b = table.intern("doc2.txt");
        let again = table.intern("doc1.txt");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_resolve() {
        let mut table = DocumentTable::new();
        let id = table.intern("alpha.txt");

        assert_eq!(table.name(id), Some("alpha.txt"));
        assert_eq!(table.get("alpha.txt"), Some(id));
        assert_eq!(table.get("beta.txt"), None);
        assert_eq!(table.name(DocId::from_index(7)), None);
    }
}

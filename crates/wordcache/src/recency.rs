//! Move-to-front recency cache
//!
//! Slots live in a small array ordered by recency, index 0 being the most
//! recently used. With K in the single digits a linear scan beats any
//! auxiliary map.

use std::sync::Arc;

struct Slot<V> {
    word: Arc<str>,
    value: V,
}

/// Fixed-capacity LRU cache keyed by word
pub struct RecencyCache<V> {
    slots: Vec<Slot<V>>,
    capacity: usize,
}

impl<V> RecencyCache<V> {
    /// Create a new cache with the given capacity
    ///
    /// # Panics
    /// If `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Get the value for `word`, promoting it to most recently used
    pub fn get(&mut self, word: &str) -> Option<&V> {
        let idx = self.position(word)?;
        self.move_to_front(idx);
        Some(&self.slots[0].value)
    }

    /// Insert or refresh `word`, making it most recently used
    ///
    /// # Returns
    /// * `Option<(Arc<str>, V)>` - The least recently used slot, if one was evicted
    pub fn put(&mut self, word: Arc<str>, value: V) -> Option<(Arc<str>, V)> {
        if let Some(idx) = self.position(&word) {
            self.slots[idx].value = value;
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.slots.len() >= self.capacity {
            self.slots.pop().map(|slot| (slot.word, slot.value))
        } else {
            None
        };
        self.slots.insert(0, Slot { word, value });
        evicted
    }

    /// Check for `word` without changing recency
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Words in recency order, most recent first
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| &*slot.word)
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.slots.iter().position(|slot| &*slot.word == word)
    }

    fn move_to_front(&mut self, idx: usize) {
        // Shifts slots 0..idx down by one and keeps their order.
        self.slots[..=idx].rotate_right(1);
    }
}

//! # wordcache
//!
//! Bounded recency cache in front of a [`wordindex::InvertedIndex`].
//!
//! ## Architecture
//! - **RecencyCache**: fixed array of at most K slots, most recent first,
//!   move-to-front on hit, evicts the last slot when full
//! - **Slots**: hold the index's shared word and an entry handle; document
//!   sets are never copied into the cache
//! - **WordCache**: cache-then-index lookup, populating the cache on an
//!   index hit and never caching misses

#![warn(missing_docs)]

mod cache;
mod recency;
mod stats;

pub use cache::{Lookup, Provenance, WordCache, DEFAULT_CAPACITY};
pub use recency::RecencyCache;
pub use stats::CacheStats;

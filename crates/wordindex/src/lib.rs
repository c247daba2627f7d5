//! # wordindex
//!
//! In-memory inverted index mapping normalized words to the documents that
//! contain them.
//!
//! ## Architecture
//! - **Buckets**: djb2 hash over a prime-sized table, one chain per bucket
//! - **Entries**: append-only arena; an [`EntryId`] stays valid for the
//!   life of the index, so callers can hold handles instead of copies
//! - **Documents**: names interned once into [`DocId`] handles
//! - **Tokenizer**: lazy, `nom`-based splitter producing lowercase
//!   alphanumeric words
//!
//! Indexing is a one-shot build phase: feed every document through
//! [`InvertedIndex::index_document`], then serve lookups.

#![warn(missing_docs)]

mod docset;
mod documents;
mod error;
mod index;
pub mod tokenizer;

pub use docset::{DocId, DocumentSet};
pub use documents::DocumentTable;
pub use error::{Error, Result};
pub use index::{hash_word, EntryId, IndexStats, InvertedIndex, DEFAULT_BUCKETS};

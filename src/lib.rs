//! Concurrent in-memory document repository with multi-criteria search.
//!
//! `document-store` provides a keyed upsert store with identifier generation,
//! point lookup, and a composable predicate engine over four optional filter
//! dimensions: title prefix, content substring, author identity, and
//! creation-time range. Persistence, transport, and serialization formats are
//! the concern of collaborators layered on top of this core.

pub mod document;
pub mod search;
pub mod store;
pub mod types;

pub use crate::document::{Author, Document};
pub use crate::search::SearchRequest;
pub use crate::store::DocumentStore;
pub use crate::types::identifiers::{AuthorId, DocumentId, IdentifierError};

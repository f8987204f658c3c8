use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::document::Document;
use crate::search::{self, SearchRequest};
use crate::types::identifiers::DocumentId;

/// Concurrent in-memory document repository.
///
/// Instantiable, no globals: each store owns its own map, so independent
/// instances (one per test, one per tenant) never interfere. All three
/// operations take `&self` and are safe to call from multiple threads; a
/// search racing a save may or may not observe the new document.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Upsert a document. Always succeeds.
    ///
    /// A document without an identifier gets a freshly generated one. When
    /// the identifier already names a stored document, the stored creation
    /// time wins over whatever the caller supplied; every other field is
    /// replaced. An identifier unknown to the store inserts the document
    /// as-is, caller-supplied creation time included, even when unset.
    pub fn save(&self, mut document: Document) -> Document {
        let mut documents = self.write();

        let id = document.id.take().unwrap_or_else(DocumentId::random);
        if let Some(existing) = documents.get(&id) {
            document.created = existing.created;
        }
        document.id = Some(id.clone());

        documents.insert(id, document.clone());
        document
    }

    /// Look up a document by identifier. A miss is `None`, not an error.
    pub fn find_by_id(&self, id: &DocumentId) -> Option<Document> {
        self.read().get(id).cloned()
    }

    /// All stored documents satisfying every filter dimension of the
    /// request. Iteration order is the map's, i.e. unspecified; callers must
    /// not depend on result ordering.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        self.read()
            .values()
            .filter(|document| search::matches(document, request))
            .cloned()
            .collect()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock only means another caller panicked while holding it;
    // no multi-step invariant spans a panic here, so the map is still valid.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<DocumentId, Document>> {
        self.documents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<DocumentId, Document>> {
        self.documents.write().unwrap_or_else(PoisonError::into_inner)
    }
}

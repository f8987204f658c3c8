use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::Author;
use crate::types::identifiers::DocumentId;

/// The atomic unit of content.
///
/// `id: None` marks a document that has not been persisted yet; the store
/// assigns an identifier on save and never changes it afterwards. `created`
/// is likewise owned by the store once first persisted: whatever a caller
/// supplies on a subsequent save of the same identifier is discarded in
/// favor of the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Build an unsaved document. The store assigns the identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Document {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Build a document addressed at a specific identifier, for updates or
    /// caller-keyed inserts.
    pub fn with_id(
        id: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Document {
            id: Some(id),
            ..Document::new(title, content, author, created)
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// Author data embedded in a document, by value. The identifier is the only
/// field with meaning to the store; the display name is carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Author {
            id,
            name: name.into(),
        }
    }
}

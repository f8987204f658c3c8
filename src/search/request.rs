use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// A set of independent, optional filter criteria.
///
/// Every field may be empty, meaning "no constraint on this dimension".
/// Within a dimension the candidate values combine by OR; across dimensions
/// the criteria combine by AND. The request is a pure value and is never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title must start with at least one of these, case-insensitively.
    pub title_prefixes: Vec<String>,
    /// Content must contain at least one of these, case-insensitively.
    pub contains_contents: Vec<String>,
    /// Author id must exactly equal one of these.
    pub author_ids: Vec<AuthorId>,
    /// Inclusive lower bound on creation time.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on creation time.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// A request with no constraints; matches every stored document.
    pub fn unconstrained() -> Self {
        SearchRequest::default()
    }
}

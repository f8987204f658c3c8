use crate::document::Document;
use crate::search::request::SearchRequest;

/// One filter dimension. An empty criterion always passes, imposing no
/// constraint; adding a dimension means adding one function to `DIMENSIONS`.
type Predicate = fn(&Document, &SearchRequest) -> bool;

const DIMENSIONS: [Predicate; 4] = [
    title_prefix,
    content_substring,
    author_id,
    created_range,
];

/// True if the document satisfies every filter dimension of the request.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    DIMENSIONS.iter().all(|dimension| dimension(document, request))
}

fn title_prefix(document: &Document, request: &SearchRequest) -> bool {
    if request.title_prefixes.is_empty() {
        return true;
    }
    let title = document.title.to_lowercase();
    request
        .title_prefixes
        .iter()
        .any(|prefix| title.starts_with(&prefix.to_lowercase()))
}

fn content_substring(document: &Document, request: &SearchRequest) -> bool {
    if request.contains_contents.is_empty() {
        return true;
    }
    let content = document.content.to_lowercase();
    request
        .contains_contents
        .iter()
        .any(|needle| content.contains(&needle.to_lowercase()))
}

fn author_id(document: &Document, request: &SearchRequest) -> bool {
    request.author_ids.is_empty() || request.author_ids.contains(&document.author.id)
}

fn created_range(document: &Document, request: &SearchRequest) -> bool {
    if request.created_from.is_none() && request.created_to.is_none() {
        return true;
    }
    // A document without a timestamp cannot satisfy a bounded range.
    let Some(created) = document.created else {
        return false;
    };
    request.created_from.map_or(true, |from| created >= from)
        && request.created_to.map_or(true, |to| created <= to)
}

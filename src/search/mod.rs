pub mod filters;
pub mod request;

pub use filters::matches;
pub use request::SearchRequest;

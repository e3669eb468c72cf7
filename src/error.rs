//! Error types for timeline extraction.
//!
//! Only conditions that abort a whole document (or never let it start) live
//! here. Recoverable problems inside a document go through
//! [`crate::report::ErrorReporter`] instead.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A response kind name with no registered instructions path.
    #[error("no instructions path registered for response kind \"{0}\"")]
    UnregisteredKind(String),

    /// An entry type we have no mapping for. The document uses a schema
    /// variant that needs a new extractor.
    #[error("unexpected timeline entry type found: {entry_type}")]
    UnexpectedEntryType { entry_type: String, entry: Value },

    #[error("failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid request URL \"{url}\": {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

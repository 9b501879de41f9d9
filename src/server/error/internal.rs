use std::num::ParseIntError;
use thiserror::Error;

/// Stored data that should never exist. Always a 500.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord ID in the session or the store is not a u64.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Stored level caps document no longer matches the expected shape.
    #[error("Malformed level caps document: {0}")]
    MalformedLevelCaps(#[source] serde_json::Error),
}

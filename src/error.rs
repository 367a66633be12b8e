// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VocabError>;

/// All failure modes of the generator. Identifier and chapter-config
/// problems are data-quality errors and abort the run; they are never
/// silently defaulted.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The identifier does not match any of the accepted shapes
    /// (`341`, `341-2`, `341-violence`, `341-2-violently`).
    #[error("malformed identifier `{0}`: expected a leading entry number")]
    MalformedIdentifier(String),

    /// Two entries resolve to the same `(main, sub)` number pair.
    #[error("duplicate identifier: `{first}` and `{second}` both resolve to entry {key}")]
    DuplicateIdentifier {
        first: String,
        second: String,
        key: String,
    },

    #[error("chapter threshold {0} is configured twice")]
    DuplicateThreshold(u32),

    #[error("invalid chapter threshold key `{0}`: expected a decimal number")]
    InvalidThreshold(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

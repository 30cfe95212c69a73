// crates/georesolve-core/src/error.rs

use thiserror::Error;

/// Errors raised at the engine's I/O seams.
///
/// Nothing here escapes `Resolver::resolve`: backend trouble is absorbed as
/// "zero results" and payload trouble as missing fields, per the recovery
/// policy. The type exists so the seams stay honest about what can go wrong.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Socket-level trouble talking to the index backend.
    #[error("index backend I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The backend replied with something we could not interpret.
    #[error("malformed backend reply: {0}")]
    Protocol(String),

    /// The requested rank is outside the last query's result set.
    #[error("no record at rank {0}")]
    NoSuchRank(u64),

    /// Autocomplete service trouble.
    #[cfg(feature = "autocomplete")]
    #[error("autocomplete request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Autocomplete reply did not parse.
    #[cfg(feature = "autocomplete")]
    #[error("autocomplete reply: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ResolveError>;

//! Error types for webhook delivery.

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a single `send` call.
///
/// A delivery either fully succeeds or fails with exactly one of these;
/// there are no partial states and no local recovery.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The outbound message could not be encoded, or the response body
    /// could not be decoded.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP round trip itself failed (connect, timeout, read).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server accepted the request but reported an application-level
    /// failure. `message` is the server-supplied `errmsg`.
    #[error("robot API error {code}: {message}")]
    Remote { code: i64, message: String },
}

use thiserror::Error;

/// Errors from the upstream pricing API.
///
/// Callers do not branch on the kind: the web view logs the message
/// and keeps its last-known-good results, the CLI prints it and exits
/// nonzero.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout and body-read failures.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned HTTP {0}")]
    Status(u16),

    /// The body arrived but did not match the expected envelope.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

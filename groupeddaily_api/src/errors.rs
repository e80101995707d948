//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when fetching grouped daily bars.
#[derive(Error, Debug)]
pub enum Error {
    /// The outbound request could not be completed (refused connection,
    /// DNS failure, timeout, or a failure reading the body).
    #[error("Connection failed")]
    Connection(#[from] reqwest::Error),
    /// The response body could not be coerced into the grouped daily shape.
    #[error("Failed to parse response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        /// Truncated copy of the offending body, for diagnostics.
        snippet: String,
    },
    /// The injected base URL is not a valid URL.
    #[error("Invalid base URL")]
    InvalidUrl(#[from] url::ParseError),
}

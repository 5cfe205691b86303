//! Error types for the client.

use std::fmt;

use crate::response::ApiResponse;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong with an API call.
///
/// Every failure is returned to the immediate caller; the client never
/// retries and never logs-and-swallows. The two documented leniencies live
/// elsewhere: `Timestamp::lenient` and the error-body parse inside
/// classification.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path could not be resolved against the base URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A network-level failure (DNS, connect, TLS, read) unrelated to
    /// cancellation. No response envelope is available.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The call context's deadline passed before or during the call. When a
    /// transport failure and an expired deadline are observed together, this
    /// error wins.
    #[error("deadline exceeded")]
    Cancelled,

    /// The service answered with a status outside 200–299. The envelope
    /// rides inside, so headers and pagination stay inspectable.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body did not match the expected shape. A blank body
    /// (empty or whitespace only) is never a decode failure; it decodes to
    /// no value.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The client could not be constructed from the given options. Never
    /// produced by a call.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// A structured error for a non-success response.
///
/// Renders as a single line embedding method, URL, numeric status, and the
/// server's messages, e.g.
/// `POST https://acme.example-billing.com/subscriptions: 422 ["can't be blank"]`.
#[derive(Debug, Clone, thiserror::Error)]
pub struct ApiError {
    /// Snapshot of the response that produced this error.
    pub response: ApiResponse,
    /// Server-supplied messages in order; empty when the error body was
    /// absent or malformed.
    pub errors: Vec<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {:?}",
            self.response.method,
            self.response.url,
            self.response.status.as_u16(),
            self.errors
        )
    }
}

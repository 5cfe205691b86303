//! Response envelope and status classification.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

/// An owned snapshot of an API response.
///
/// The executor reads the response body exactly once per call, so what a
/// caller keeps is this envelope plus the decoded payload; by the time a
/// call returns, the underlying connection is already back in the pool.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Method of the request that produced this response.
    pub method: Method,
    /// Final URL of the request that produced this response.
    pub url: Url,
    /// Next page of a paginated listing.
    ///
    /// The service has not documented its pagination metadata format, so all
    /// four page fields stay `0` for now; zero also means "not paginated"
    /// on endpoints that return bare arrays or single resources.
    pub next_page: u32,
    /// Previous page of a paginated listing. See [`ApiResponse::next_page`].
    pub prev_page: u32,
    /// First page of a paginated listing. See [`ApiResponse::next_page`].
    pub first_page: u32,
    /// Last page of a paginated listing. See [`ApiResponse::next_page`].
    pub last_page: u32,
}

impl ApiResponse {
    /// Snapshots `response` before its body is consumed.
    pub(crate) fn new(method: Method, response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            method,
            url: response.url().clone(),
            next_page: 0,
            prev_page: 0,
            first_page: 0,
            last_page: 0,
        }
    }

    /// Classifies this response by status code alone: 200–299 inclusive is
    /// success regardless of body shape; anything else becomes an
    /// [`ApiError`] carrying whatever messages the body held.
    ///
    /// The error body is expected to look like `{"errors": ["...", ...]}`.
    /// An empty or malformed body yields an error with no messages rather
    /// than a secondary parse failure.
    pub(crate) fn check(self, body: &[u8]) -> Result<Self, ApiError> {
        if self.status.is_success() {
            return Ok(self);
        }
        let errors = serde_json::from_slice::<ErrorBody>(body)
            .map(|parsed| parsed.errors)
            .unwrap_or_default();
        debug!(status = %self.status, messages = errors.len(), "non-success response");
        Err(ApiError {
            response: self,
            errors,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

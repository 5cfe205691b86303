//! The client: configuration, request construction, and the transport
//! executor every resource service runs through.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

use crate::customers::CustomersService;
use crate::error::{Error, Result};
use crate::products::ProductsService;
use crate::response::ApiResponse;
use crate::subscriptions::SubscriptionsService;

/// User agent sent with every request unless overridden.
const DEFAULT_USER_AGENT: &str = concat!("example-billing-client/", env!("CARGO_PKG_VERSION"));

/// Fixed basic-auth password; the service authenticates on the username
/// (the API key) alone and ignores this value.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Computes the per-tenant base URL, `https://{tenant}.example-billing.com/`.
fn tenant_base_url(subdomain: &str) -> std::result::Result<Url, url::ParseError> {
    Url::parse(&format!("https://{subdomain}.example-billing.com/"))
}

/// Per-call execution context carrying an optional deadline.
///
/// A context without a deadline never cancels. Expiry before the call starts
/// means nothing is sent; expiry mid-call aborts the network wait. Dropping
/// the call future is the other way to cancel, as with any Rust future.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that never cancels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that cancels `timeout` from now.
    ///
    /// A timeout too large to represent as an instant (`Duration::MAX` and
    /// friends) behaves as no deadline at all.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// A context that cancels at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= Instant::now())
    }

    /// Time left before the deadline, or `None` when there is no deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

/// Construction options for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Replaces the per-tenant base URL derived from the subdomain. Useful
    /// for pointing the client at a local stand-in for the service.
    pub base_url: Option<String>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Replaces the default HTTP client, e.g. to tune pooling or proxies.
    pub http: Option<reqwest::Client>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: None,
        }
    }
}

/// Client for the Example Billing API.
///
/// Configuration is immutable after construction and every call allocates
/// its own request and envelope, so one client is freely shared across
/// concurrent calls. Connection pooling lives in the inner
/// [`reqwest::Client`]; the executor fully drains every response body, which
/// is what keeps those connections reusable.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    user_agent: HeaderValue,
}

impl Client {
    /// Creates a client for the tenant at `subdomain`, authenticating every
    /// request with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when the subdomain does not form a valid host.
    pub fn new(subdomain: &str, api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(subdomain, api_key, ClientOptions::default())
    }

    /// Creates a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when the subdomain (or base-URL override) is
    /// invalid, and [`Error::Configuration`] when the user agent is not a
    /// legal header value.
    pub fn with_options(
        subdomain: &str,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self> {
        let base_url = match options.base_url {
            Some(ref raw) => Url::parse(raw)?,
            None => tenant_base_url(subdomain)?,
        };
        let user_agent = HeaderValue::from_str(&options.user_agent).map_err(|_| {
            Error::Configuration(format!("invalid user agent {:?}", options.user_agent))
        })?;

        Ok(Self {
            http: options.http.unwrap_or_default(),
            base_url,
            api_key: api_key.into(),
            user_agent,
        })
    }

    /// Product catalog operations.
    #[must_use]
    pub fn products(&self) -> ProductsService<'_> {
        ProductsService { client: self }
    }

    /// Customer operations.
    #[must_use]
    pub fn customers(&self) -> CustomersService<'_> {
        CustomersService { client: self }
    }

    /// Subscription operations.
    #[must_use]
    pub fn subscriptions(&self) -> SubscriptionsService<'_> {
        SubscriptionsService { client: self }
    }

    /// Builds a request for `path` resolved against the base URL.
    ///
    /// `path` is relative and given without a leading slash, e.g.
    /// `"products"` or `"subscriptions/14900541"`. A `body` is serialized to
    /// JSON and sets `Content-Type`; `Accept`, basic auth, and the user
    /// agent are always set. Building has no other side effects, and the
    /// request is used for exactly one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when `path` does not resolve against the base
    /// URL and [`Error::Encode`] when `body` cannot be serialized.
    pub fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.clone());

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        builder.build().map_err(Error::Transport)
    }

    /// Sends `request` under `cx` and decodes the JSON body into `T`.
    ///
    /// Exactly one attempt is made; there are no retries. The envelope is
    /// returned together with the decoded value, or with `None` when the
    /// body was blank (empty or whitespace only — some endpoints answer a
    /// success with nothing but a newline). A classification failure
    /// ([`Error::Api`]) carries the envelope inside the error, so headers
    /// and pagination remain inspectable even then.
    ///
    /// # Errors
    ///
    /// [`Error::Cancelled`] when `cx` expires before or during the call,
    /// [`Error::Transport`] on network failure, [`Error::Api`] for statuses
    /// outside 200–299, and [`Error::Decode`] when a non-blank body does not
    /// match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        cx: &CallContext,
        request: Request,
    ) -> Result<(ApiResponse, Option<T>)> {
        let (envelope, body) = self.roundtrip(cx, request).await?;
        let envelope = envelope.check(&body)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok((envelope, None));
        }
        let value = serde_json::from_slice(&body).map_err(Error::Decode)?;
        Ok((envelope, Some(value)))
    }

    /// Sends `request` under `cx` and returns the body verbatim.
    ///
    /// No JSON parsing is attempted; status classification still applies.
    ///
    /// # Errors
    ///
    /// As [`Client::execute`], minus [`Error::Decode`].
    pub async fn execute_raw(
        &self,
        cx: &CallContext,
        request: Request,
    ) -> Result<(ApiResponse, Vec<u8>)> {
        let (envelope, body) = self.roundtrip(cx, request).await?;
        let envelope = envelope.check(&body)?;
        Ok((envelope, body))
    }

    /// One attempt on the wire: send, snapshot the envelope, drain the body.
    ///
    /// The single `bytes()` read here is the only place a response body is
    /// consumed, on every path, which keeps the connection reusable and
    /// makes "drain exactly once" structural rather than a convention.
    async fn roundtrip(
        &self,
        cx: &CallContext,
        request: Request,
    ) -> Result<(ApiResponse, Vec<u8>)> {
        if cx.is_expired() {
            return Err(Error::Cancelled);
        }

        debug!(method = %request.method(), url = %request.url(), "sending request");

        let outcome = match cx.remaining() {
            Some(remaining) => {
                match tokio::time::timeout(remaining, self.transfer(request)).await {
                    Ok(outcome) => outcome,
                    Err(_elapsed) => return Err(Error::Cancelled),
                }
            }
            None => self.transfer(request).await,
        };

        match outcome {
            Ok((envelope, body)) => {
                debug!(status = %envelope.status, bytes = body.len(), "response received");
                Ok((envelope, body))
            }
            // The transport can fail *because* the deadline passed mid-call;
            // the expired deadline is the more specific failure.
            Err(err) if cx.is_expired() => {
                debug!(error = %err, "transport failure after deadline");
                Err(Error::Cancelled)
            }
            Err(err) => Err(Error::Transport(err)),
        }
    }

    /// Sends one request and fully reads its response body.
    async fn transfer(
        &self,
        request: Request,
    ) -> std::result::Result<(ApiResponse, Vec<u8>), reqwest::Error> {
        let method = request.method().clone();
        let response = self.http.execute(request).await?;
        let envelope = ApiResponse::new(method, &response);
        let body = response.bytes().await?.to_vec();
        Ok((envelope, body))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;

    use super::*;

    fn test_client() -> Client {
        Client::new("acme", "abc123").unwrap()
    }

    #[test]
    fn base_url_is_a_function_of_the_subdomain() {
        let client = test_client();
        assert_eq!(
            client.base_url.as_str(),
            "https://acme.example-billing.com/"
        );
        assert_eq!(
            tenant_base_url("general-goods").unwrap().as_str(),
            "https://general-goods.example-billing.com/"
        );
    }

    #[test]
    fn relative_paths_resolve_against_the_base() {
        let client = test_client();
        let request = client
            .request(Method::GET, "subscriptions/14900541", None::<&()>)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://acme.example-billing.com/subscriptions/14900541"
        );
    }

    #[test]
    fn unresolvable_paths_are_url_errors() {
        let client = test_client();
        let result = client.request(Method::GET, "https://[", None::<&()>);
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn bodyless_requests_carry_auth_accept_and_agent_only() {
        let client = test_client();
        let request = client.request(Method::GET, "products", None::<&()>).unwrap();

        // "abc123:X" in base64.
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic YWJjMTIzOlg="
        );
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(
            request.headers().get(USER_AGENT).unwrap(),
            &client.user_agent
        );
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn json_bodies_set_content_type_and_serialize_exactly() {
        let client = test_client();
        let payload = serde_json::json!({"subscription": {"product_handle": "standard"}});
        let request = client
            .request(Method::POST, "subscriptions", Some(&payload))
            .unwrap();

        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = request.body().unwrap().as_bytes().unwrap();
        assert_eq!(body, serde_json::to_vec(&payload).unwrap().as_slice());
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        let client = test_client();
        assert_eq!(client.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn base_url_override_wins() {
        let options = ClientOptions {
            base_url: Some("http://127.0.0.1:9999/".to_string()),
            ..ClientOptions::default()
        };
        let client = Client::with_options("ignored", "key", options).unwrap();
        assert_eq!(client.base_url.as_str(), "http://127.0.0.1:9999/");
    }

    #[test]
    fn invalid_user_agent_is_a_configuration_error() {
        let options = ClientOptions {
            user_agent: "bad\nagent".to_string(),
            ..ClientOptions::default()
        };
        let result = Client::with_options("acme", "key", options);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[tokio::test]
    async fn zero_timeout_context_is_expired_immediately() {
        let cx = CallContext::with_timeout(Duration::ZERO);
        assert!(cx.is_expired());
        assert_eq!(cx.remaining(), Some(Duration::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn context_expires_when_its_deadline_passes() {
        let cx = CallContext::with_timeout(Duration::from_secs(30));
        assert!(!cx.is_expired());

        tokio::time::advance(Duration::from_secs(31)).await;
        assert!(cx.is_expired());
        assert_eq!(cx.remaining(), Some(Duration::ZERO));
    }

    #[tokio::test]
    async fn context_without_deadline_never_expires() {
        let cx = CallContext::new();
        assert!(!cx.is_expired());
        assert_eq!(cx.remaining(), None);
    }

    #[tokio::test]
    async fn oversized_timeout_behaves_as_no_deadline() {
        let cx = CallContext::with_timeout(Duration::MAX);
        assert!(!cx.is_expired());
        assert_eq!(cx.remaining(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_deadline_matches_timeout_behavior() {
        let cx = CallContext::with_deadline(Instant::now() + Duration::from_secs(5));
        assert!(!cx.is_expired());

        tokio::time::advance(Duration::from_secs(6)).await;
        assert!(cx.is_expired());
    }
}

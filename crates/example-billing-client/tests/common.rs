//! Common test utilities for client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use example_billing_client::{Client, ClientOptions};
use wiremock::MockServer;

/// Test API key; its basic-auth form is `Basic YWJjMTIzOlg=`.
pub const TEST_API_KEY: &str = "abc123";

/// Starts a mock service and a client pointed at it.
///
/// The server handle must stay alive for the duration of the test; dropping
/// it frees the port.
pub async fn mock_client() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let options = ClientOptions {
        base_url: Some(server.uri()),
        ..ClientOptions::default()
    };
    let client = Client::with_options("acme", TEST_API_KEY, options)
        .expect("client construction with a mock base URL");
    (server, client)
}

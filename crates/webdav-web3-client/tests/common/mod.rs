/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for webdav-web3-client tests

use std::sync::Arc;

use webdav_web3_client::{MockWalletProvider, MockWalletSigner, WebDavClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0x1234567890abcdef";
#[allow(dead_code)]
pub const SIGNATURE_PREFIX: &str = "sig:";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `server` with a deterministic mock wallet
pub fn mock_wallet_client(server: &MockServer) -> WebDavClient {
    let signer = MockWalletSigner::new(TEST_ADDRESS, SIGNATURE_PREFIX);
    WebDavClient::with_base_url(&server.uri())
        .expect("client init")
        .with_wallet_provider(Arc::new(MockWalletProvider::new(signer)))
}

#[allow(dead_code)]
/// Mount challenge/verify mocks that hand out `token` for `challenge`
pub async fn mount_login(server: &MockServer, challenge: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/challenge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": challenge,
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token,
            "user": "alice",
        })))
        .mount(server)
        .await;
}

#[allow(dead_code)]
/// Connected and authenticated client
pub async fn logged_in_client(server: &MockServer, token: &str) -> WebDavClient {
    mount_login(server, "abc123", token).await;
    let mut client = mock_wallet_client(server);
    client.connect_wallet().await.expect("connect wallet");
    client.authenticate().await.expect("authenticate");
    client
}

/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for WebDAV file operations
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{logged_in_client, mock_wallet_client, setup_mock_server};
use rstest::rstest;
use tokio_test::assert_ok;
use webdav_web3_client::{ClientConfig, ClientError, WebDavClient};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(WebDavClient::new());
    assert_eq!(client.base_url(), "http://localhost:6065");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Some(std::time::Duration::from_secs(5)),
        ..ClientConfig::with_base_url("http://127.0.0.1:9000/")
    };
    let client = assert_ok!(WebDavClient::with_config(config));
    assert_eq!(client.base_url(), "http://127.0.0.1:9000");
}

#[rstest]
#[case::list("list")]
#[case::upload("upload")]
#[case::download("download")]
#[case::delete("delete")]
#[case::mkdir("mkdir")]
#[tokio::test]
async fn test_file_operations_require_authentication(#[case] operation: &str) {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = mock_wallet_client(&server);
    assert_ok!(client.connect_wallet().await);

    let err = match operation {
        "list" => client.list_root().await.map(|_| ()),
        "upload" => client.upload_file("/a.txt", "data").await.map(|_| ()),
        "download" => client.download_file("/a.txt").await.map(|_| ()),
        "delete" => client.delete_file("/a.txt").await.map(|_| ()),
        _ => client.create_directory("/dir").await.map(|_| ()),
    }
    .unwrap_err();

    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn test_token_is_sent_on_file_operations() {
    let server = setup_mock_server().await;
    let client = logged_in_client(&server, "T").await;

    Mock::given(method("PROPFIND"))
        .and(path("/"))
        .and(header("authorization", "Bearer T"))
        .and(header("depth", "1"))
        .respond_with(ResponseTemplate::new(207))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/test.txt"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello, Web3!"))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client.list_root().await);
    assert_eq!(assert_ok!(client.download_file("/test.txt").await), "Hello, Web3!");
}

#[tokio::test]
async fn test_upload_server_error() {
    let server = setup_mock_server().await;
    let client = logged_in_client(&server, "T").await;

    Mock::given(method("PUT"))
        .and(path("/test.txt"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("{\"message\": \"ignored\"}"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client.upload_file("/test.txt", "Hello, Web3!").await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed { status: 500, .. }));
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = setup_mock_server().await;
    let client = logged_in_client(&server, "T").await;

    Mock::given(method("DELETE"))
        .and(path("/gone.txt"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.delete_file("/gone.txt").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
    assert_eq!(err.status(), Some(404));
}

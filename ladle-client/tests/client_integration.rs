// ladle-client/tests/client_integration.rs

use ladle_client::{ClientConfig, HttpClient};

#[tokio::test]
async fn test_client_creation() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/api"));
    assert!(client.token().is_none());
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[tokio::test]
async fn test_token_attachment() {
    let client = ClientConfig::new("http://localhost:5000/api")
        .with_token("jwt-token")
        .build_http_client();
    assert_eq!(client.token(), Some("jwt-token"));

    let client = client.with_token("rotated");
    assert_eq!(client.token(), Some("rotated"));
}

#[tokio::test]
async fn test_base_url_trailing_slash_normalized() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/api///"));
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

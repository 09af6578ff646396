//! Token endpoint tests against a local mock server.

use gigachat_client::auth::{fetch_token, AuthError};
use mockito::Matcher;

#[tokio::test]
async fn fetch_token_returns_access_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/oauth")
        .match_header("authorization", "Basic a2V5")
        .match_header("rquid", "6f0b1291-c7f3-43c6-bb2e-9f3efb2dc98e")
        .match_header("accept", "application/json")
        .match_body(Matcher::UrlEncoded(
            "scope".into(),
            "GIGACHAT_API_PERS".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"abc","expires_at":1740000000000}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let token = fetch_token(
        &client,
        &format!("{}/api/v2/oauth", server.url()),
        "a2V5",
        "6f0b1291-c7f3-43c6-bb2e-9f3efb2dc98e",
        "GIGACHAT_API_PERS",
    )
    .await
    .expect("token fetch failed");

    assert_eq!(token.secret(), "abc");
    assert_eq!(token.expires_at(), Some(1740000000000));
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_surfaced_with_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v2/oauth")
        .with_status(401)
        .with_body(r#"{"message":"invalid api key"}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let err = fetch_token(
        &client,
        &format!("{}/api/v2/oauth", server.url()),
        "bad",
        "rq",
        "GIGACHAT_API_PERS",
    )
    .await
    .unwrap_err();

    match err {
        AuthError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_access_token_field_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v2/oauth")
        .with_status(200)
        .with_body(r#"{"expires_at":1740000000000}"#)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let err = fetch_token(
        &client,
        &format!("{}/api/v2/oauth", server.url()),
        "a2V5",
        "rq",
        "GIGACHAT_API_PERS",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AuthError::MissingToken));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v2/oauth")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let err = fetch_token(
        &client,
        &format!("{}/api/v2/oauth", server.url()),
        "a2V5",
        "rq",
        "GIGACHAT_API_PERS",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AuthError::Parse(_)));
}

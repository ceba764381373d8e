mod common;

use articlehub::api::{AuthClient, AuthError, Credentials, HttpAuthClient};
use articlehub::config::ApiConfig;

use common::mock_auth::MockAuthServer;

fn client_for(server: &MockAuthServer) -> HttpAuthClient {
    HttpAuthClient::new(&ApiConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
    })
    .unwrap()
}

#[test]
fn login_url_joins_base_without_double_slash() {
    let client = HttpAuthClient::new(&ApiConfig {
        base_url: "http://localhost:8000/".to_string(),
        timeout_seconds: 5,
    })
    .unwrap();
    assert_eq!(client.login_url(), "http://localhost:8000/login");
}

#[tokio::test]
async fn successful_login_returns_user() {
    let server = MockAuthServer::start("correct").await;
    let client = client_for(&server);

    let user = client
        .login(&Credentials::new("alice", "correct"))
        .await
        .unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.avatar, None);
}

#[tokio::test]
async fn credentials_are_posted_as_json() {
    let server = MockAuthServer::start("correct").await;
    let client = client_for(&server);
    client
        .login(&Credentials::new("alice", "correct"))
        .await
        .unwrap();

    let captured = server.captured().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].body["username"], "alice");
    assert_eq!(captured[0].body["password"], "correct");
}

#[tokio::test]
async fn forbidden_maps_to_invalid_credentials() {
    let server = MockAuthServer::start("correct").await;
    let client = client_for(&server);

    let err = client
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.user_message(), "Incorrect username or password");
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_credentials() {
    let server = MockAuthServer::failing(401).await;
    let err = client_for(&server)
        .login(&Credentials::new("alice", "correct"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockAuthServer::failing(500).await;
    let err = client_for(&server)
        .login(&Credentials::new("alice", "correct"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UnexpectedStatus { status: 500 }));
    assert_eq!(err.user_message(), "Login failed: unexpected status 500");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpAuthClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_seconds: 2,
    })
    .unwrap();
    let err = client
        .login(&Credentials::new("alice", "correct"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Transport(_)));
}

//! Mock auth server for testing the HTTP client.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Request body captured for assertions.
#[derive(Debug, Clone)]
pub struct CapturedLogin {
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    password: String,
    status_override: Option<u16>,
    captured: Arc<Mutex<Vec<CapturedLogin>>>,
}

pub struct MockAuthServer {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedLogin>>>,
}

impl MockAuthServer {
    /// Accepts any username with `password`.
    pub async fn start(password: &str) -> Self {
        Self::start_with(password, None).await
    }

    /// Always answers with `status` and an empty JSON body.
    pub async fn failing(status: u16) -> Self {
        Self::start_with("", Some(status)).await
    }

    async fn start_with(password: &str, status_override: Option<u16>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            password: password.to_string(),
            status_override,
            captured: Arc::clone(&captured),
        };
        let app = Router::new()
            .route("/login", post(login_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock auth server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, captured }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn captured(&self) -> Vec<CapturedLogin> {
        self.captured.lock().await.clone()
    }
}

async fn login_handler(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.captured.lock().await.push(CapturedLogin { body: body.clone() });

    if let Some(status) = state.status_override {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({}))).into_response();
    }

    let username = body["username"].as_str().unwrap_or_default();
    if body["password"].as_str() == Some(state.password.as_str()) {
        Json(json!({ "id": "1", "username": username })).into_response()
    } else {
        (StatusCode::FORBIDDEN, Json(json!({ "message": "bad credentials" }))).into_response()
    }
}

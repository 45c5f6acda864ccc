#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use slotbook_api::auth::jwt::JwtConfig;
use slotbook_api::config::{DatabaseConfig, ServerConfig};
use slotbook_api::router::build_app_router;
use slotbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database section is unused: tests hand the router a pool directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        app_name: "slotbook-test".to_string(),
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 24,
        },
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "slotbook_test".to_string(),
            sslmode: "disable".to_string(),
            max_connections: 5,
            url: None,
        },
    }
}

/// Build the full application router (same middleware stack as production)
/// around the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, raw: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Register an account through the API, log in, and return the bearer token.
pub async fn login_token(app: &Router) -> String {
    let credentials = serde_json::json!({ "username": "tester", "password": "s3cret-pass" });

    let response = post_json(app.clone(), "/api/auth/register", credentials.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app.clone(), "/api/auth/login", credentials).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

/// POST a JSON body with auth, assert 201, and return the created `data.id`.
pub async fn create_ok(app: &Router, uri: &str, body: serde_json::Value, token: &str) -> i64 {
    let response = post_json_auth(app.clone(), uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// One staff user, one client and one service, returned as their ids.
pub struct Fixture {
    pub user_id: i64,
    pub client_id: i64,
    pub service_id: i64,
}

pub async fn seed_fixture(app: &Router, token: &str) -> Fixture {
    let user_id = create_ok(
        app,
        "/api/users",
        serde_json::json!({"username": "master", "password": "pw", "role": "master"}),
        token,
    )
    .await;
    let client_id = create_ok(
        app,
        "/api/clients",
        serde_json::json!({"first_name": "Ivan", "last_name": "Petrov", "phone_number": "+100"}),
        token,
    )
    .await;
    let service_id = create_ok(
        app,
        "/api/services",
        serde_json::json!({"name": "Haircut", "price": 25.0, "duration": 60}),
        token,
    )
    .await;
    Fixture {
        user_id,
        client_id,
        service_id,
    }
}

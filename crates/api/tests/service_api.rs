//! Integration tests for the `/api/services` catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_ok, delete_auth, get_auth, post_json_auth, put_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_service_is_active_by_default(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;

    let response = post_json_auth(
        app,
        "/api/services",
        json!({"name": "Manicure", "price": 30.5, "duration": 45}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_active"], true);
    assert_eq!(json["data"]["price"], 30.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_positive_terms_return_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;

    let response = post_json_auth(
        app.clone(),
        "/api/services",
        json!({"name": "Free", "price": 0, "duration": 30}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Price must be greater than 0");

    let response = post_json_auth(
        app,
        "/api/services",
        json!({"name": "Instant", "price": 10, "duration": 0}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Duration must be greater than 0");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let id = create_ok(
        &app,
        "/api/services",
        json!({"name": "Cut", "price": 20.0, "duration": 30}),
        &token,
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/services/{id}"),
        json!({"name": "Long cut"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Long cut");
    assert_eq!(json["data"]["price"], 20.0);
    assert_eq!(json["data"]["duration"], 30);

    let response = put_json_auth(
        app,
        &format!("/api/services/{id}"),
        json!({"price": -5}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_services_drop_out_of_active_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let keep = create_ok(
        &app,
        "/api/services",
        json!({"name": "Keep", "price": 10, "duration": 10}),
        &token,
    )
    .await;
    let retire = create_ok(
        &app,
        "/api/services",
        json!({"name": "Retire", "price": 10, "duration": 10}),
        &token,
    )
    .await;

    let response = put_auth(app.clone(), &format!("/api/services/{retire}/deactivate"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_active"], false);

    let response = get_auth(app.clone(), "/api/services?active_only=true", &token).await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![keep]);

    let response = get_auth(app, "/api/services", &token).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivate_or_delete_missing_service_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;

    let response = put_auth(app.clone(), "/api/services/9999/deactivate", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, "/api/services/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! Integration tests for `/api/bookings`, centred on slot conflicts.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{TimeZone, Utc};
use common::{body_json, create_ok, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use slotbook_api::error::AppError;
use slotbook_db::repositories::BookingRepo;
use sqlx::PgPool;

const TEN_AM: &str = "2025-03-01T10:00:00Z";
const ELEVEN_AM: &str = "2025-03-01T11:00:00Z";

// ---- Create ----

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_defaults_to_pending(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;

    let response = post_json_auth(
        app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["booking_time"], TEN_AM);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn same_user_same_time_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let body = json!({
        "client_id": fx.client_id,
        "service_id": fx.service_id,
        "user_id": fx.user_id,
        "booking_time": TEN_AM,
    });

    create_ok(&app, "/api/bookings", body.clone(), &token).await;
    let response = post_json_auth(app, "/api/bookings", body, &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Time slot is already booked");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn concurrent_creates_for_one_slot_admit_exactly_one(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let body = json!({
        "client_id": fx.client_id,
        "service_id": fx.service_id,
        "user_id": fx.user_id,
        "booking_time": TEN_AM,
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            let body = body.clone();
            let token = token.clone();
            tokio::spawn(async move {
                let response = post_json_auth(app, "/api/bookings", body, &token).await;
                let status = response.status();
                (status, body_json(response).await)
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        match status {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => assert_eq!(json["error"], "Time slot is already booked"),
            other => panic!("unexpected status {other}: {json}"),
        }
    }
    assert_eq!(created, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn slot_constraint_violation_maps_to_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();

    // Insert straight through the repository so the service pre-check is
    // skipped and the unique constraint does the rejecting.
    BookingRepo::create(&pool, fx.client_id, fx.service_id, fx.user_id, at, "pending")
        .await
        .unwrap();
    let err = BookingRepo::create(&pool, fx.client_id, fx.service_id, fx.user_id, at, "pending")
        .await
        .unwrap_err();

    let response = AppError::Database(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Time slot is already booked");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn same_time_with_another_user_is_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let other_user = create_ok(
        &app,
        "/api/users",
        json!({"username": "second", "password": "pw", "role": "master"}),
        &token,
    )
    .await;

    for user_id in [fx.user_id, other_user] {
        create_ok(
            &app,
            "/api/bookings",
            json!({
                "client_id": fx.client_id,
                "service_id": fx.service_id,
                "user_id": user_id,
                "booking_time": TEN_AM,
            }),
            &token,
        )
        .await;
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_for_missing_client_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;

    let response = post_json_auth(
        app,
        "/api/bookings",
        json!({
            "client_id": 9999,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_without_time_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;

    let response = post_json_auth(
        app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---- Availability ----

#[sqlx::test(migrations = "../db/migrations")]
async fn availability_reflects_existing_bookings(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    create_ok(
        &app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    let taken = format!(
        "/api/bookings/availability?user_id={}&booking_time={TEN_AM}",
        fx.user_id
    );
    let response = get_auth(app.clone(), &taken, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["available"], false);

    let free = format!(
        "/api/bookings/availability?user_id={}&booking_time={ELEVEN_AM}",
        fx.user_id
    );
    let response = get_auth(app, &free, &token).await;
    assert_eq!(body_json(response).await["data"]["available"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn availability_requires_both_parameters(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;

    let response = get_auth(app.clone(), "/api/bookings/availability?user_id=1", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        app,
        "/api/bookings/availability?booking_time=2025-03-01T10:00:00Z",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn naive_body_time_is_the_same_slot_as_utc_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;

    let response = post_json_auth(
        app.clone(),
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": "2025-03-01 10:00:00",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let uri = format!(
        "/api/bookings/availability?user_id={}&booking_time={TEN_AM}",
        fx.user_id
    );
    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(body_json(response).await["data"]["available"], false);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/bookings/{id}"),
        json!({ "booking_time": "2025-03-01T11:00:00" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["booking_time"], ELEVEN_AM);

    let response = post_json_auth(
        app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": "next tuesday",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---- Read ----

#[sqlx::test(migrations = "../db/migrations")]
async fn get_booking_includes_related_rows(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let id = create_ok(
        &app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    let response = get_auth(app.clone(), &format!("/api/bookings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["id"], id);
    assert_eq!(data["client"]["first_name"], "Ivan");
    assert_eq!(data["service"]["name"], "Haircut");
    assert_eq!(data["user"]["username"], "master");
    assert!(data["user"].get("password_hash").is_none());

    let response = get_auth(app, "/api/bookings", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["client"]["id"], fx.client_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_by_client_user_and_service(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    for time in [TEN_AM, ELEVEN_AM] {
        create_ok(
            &app,
            "/api/bookings",
            json!({
                "client_id": fx.client_id,
                "service_id": fx.service_id,
                "user_id": fx.user_id,
                "booking_time": time,
            }),
            &token,
        )
        .await;
    }

    for uri in [
        format!("/api/bookings/client/{}", fx.client_id),
        format!("/api/bookings/user/{}", fx.user_id),
        format!("/api/bookings/service/{}", fx.service_id),
    ] {
        let response = get_auth(app.clone(), &uri, &token).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2, "GET {uri}");
    }

    let response = get_auth(app, "/api/bookings/client/9999", &token).await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_booking_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;

    let response = get_auth(app, "/api/bookings/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---- Update / delete ----

#[sqlx::test(migrations = "../db/migrations")]
async fn moving_into_a_taken_slot_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let make = |time: &str| {
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": time,
        })
    };
    create_ok(&app, "/api/bookings", make(TEN_AM), &token).await;
    let second = create_ok(&app, "/api/bookings", make(ELEVEN_AM), &token).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/bookings/{second}"),
        json!({ "booking_time": TEN_AM }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Re-saving its own slot is not a conflict.
    let response = put_json_auth(
        app,
        &format!("/api/bookings/{second}"),
        json!({ "booking_time": ELEVEN_AM, "status": "confirmed" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "confirmed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_booking_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    let id = create_ok(
        &app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    let response = delete_auth(app.clone(), &format!("/api/bookings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let response = get_auth(app.clone(), &format!("/api/bookings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &format!("/api/bookings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_booked_client_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::login_token(&app).await;
    let fx = common::seed_fixture(&app, &token).await;
    create_ok(
        &app,
        "/api/bookings",
        json!({
            "client_id": fx.client_id,
            "service_id": fx.service_id,
            "user_id": fx.user_id,
            "booking_time": TEN_AM,
        }),
        &token,
    )
    .await;

    let response = delete_auth(app, &format!("/api/clients/{}", fx.client_id), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

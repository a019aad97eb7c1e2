//! Integration tests for milestones, the derived timeline, and the
//! suggestion stub.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, build_test_app, get, post, put};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(app: &axum::Router, token: &str, name: &str) -> i64 {
    let response = post(
        app,
        "/api/v1/projects",
        Some(token),
        json!({"name": name, "location": "Plot 4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_milestone(
    app: &axum::Router,
    token: &str,
    project_id: i64,
    title: &str,
    start: &str,
    end: &str,
) -> i64 {
    let response = post(
        app,
        &format!("/api/v1/projects/{project_id}/milestones"),
        Some(token),
        json!({"title": title, "start_date": start, "end_date": end}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Creation and listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn milestone_starts_pending_and_lists_in_start_order(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(1);
    let project_id = create_project(&app, &token, "Warehouse A").await;

    create_milestone(&app, &token, project_id, "Framing", "2025-02-01", "2025-02-10").await;
    create_milestone(&app, &token, project_id, "Foundation", "2025-01-01", "2025-01-04").await;

    let response = get(
        &app,
        &format!("/api/v1/projects/{project_id}/milestones"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed[0]["title"], "Foundation");
    assert_eq!(listed[0]["status"], "pending");
    assert_eq!(listed[1]["title"], "Framing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn milestone_create_on_foreign_project_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = auth_token(1);
    let stranger = auth_token(2);
    let project_id = create_project(&app, &owner, "Warehouse A").await;

    let response = post(
        &app,
        &format!("/api/v1/projects/{project_id}/milestones"),
        Some(&stranger),
        json!({"title": "X", "start_date": "2025-01-01", "end_date": "2025-01-02"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status toggling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn double_toggle_returns_to_pending(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(1);
    let project_id = create_project(&app, &token, "Warehouse A").await;
    let id = create_milestone(&app, &token, project_id, "Foundation", "2025-01-01", "2025-01-04")
        .await;

    let response = put(
        &app,
        &format!("/api/v1/milestones/{id}/status"),
        Some(&token),
        json!({"status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "completed");

    let response = put(
        &app,
        &format!("/api/v1/milestones/{id}/status"),
        Some(&token),
        json!({"status": "pending"}),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_outside_vocabulary_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(1);
    let project_id = create_project(&app, &token, "Warehouse A").await;
    let id = create_milestone(&app, &token, project_id, "Foundation", "2025-01-01", "2025-01-04")
        .await;

    let response = put(
        &app,
        &format!("/api/v1/milestones/{id}/status"),
        Some(&token),
        json!({"status": "overdue"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Derived timeline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_reports_duration_and_states(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(1);
    let project_id = create_project(&app, &token, "Warehouse A").await;

    // Long past: overdue until completed.
    let past_id =
        create_milestone(&app, &token, project_id, "Foundation", "2025-01-01", "2025-01-04").await;
    // Far future: eligible for "next" only once its predecessor completes.
    create_milestone(&app, &token, project_id, "Inspection", "2099-01-01", "2099-01-10").await;

    let uri = format!("/api/v1/projects/{project_id}/timeline");
    let response = get(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let items = body_json(response).await["data"].clone();
    assert_eq!(items[0]["state"], "overdue");
    assert_eq!(items[0]["duration_days"], 4);
    assert_eq!(items[1]["state"], "pending");

    // Completing the overdue head reclassifies it and promotes the next one.
    let response = put(
        &app,
        &format!("/api/v1/milestones/{past_id}/status"),
        Some(&token),
        json!({"status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &uri, Some(&token)).await;
    let items = body_json(response).await["data"].clone();
    assert_eq!(items[0]["state"], "completed");
    assert_eq!(items[1]["state"], "next");
}

// ---------------------------------------------------------------------------
// Suggestion stub
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn suggest_returns_fixed_plan_regardless_of_input(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post(
        &app,
        "/api/v1/milestones/suggest",
        None,
        json!({"project_type": "warehouse", "description": "big"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;

    let response = post(&app, "/api/v1/milestones/suggest", None, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;

    // Identical regardless of input, always five entries.
    assert_eq!(first, second);
    assert_eq!(first["milestones"].as_array().unwrap().len(), 5);
    assert_eq!(first["milestones"][0]["title"], "Site Survey & Clearing");
    assert_eq!(first["milestones"][4]["duration"], 1);
}

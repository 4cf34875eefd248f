// ABOUTME: Integration tests for the HTTP API contract
// ABOUTME: Exercises the merged router end to end over an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::create_test_server_resources;
use helpers::axum_test::AxumTestRequest;
use macrocycle::server::router;
use serde_json::json;

async fn test_app() -> axum::Router {
    router(&create_test_server_resources().await)
}

fn sample_log_body(date: &str, session_type: &str) -> serde_json::Value {
    json!({
        "date": date,
        "phase": 1,
        "week": 3,
        "session_type": session_type,
        "shoulder_status": "leve",
        "overall_status": 8,
        "notes": "Solid session",
        "entries": [
            {
                "exercise_name": "Incline Dumbbell Press",
                "sets_completed": 3,
                "weight": 20.0,
                "reps_achieved": 12,
                "rpe": 7
            }
        ]
    })
}

// ============================================================================
// Program Endpoint
// ============================================================================

#[tokio::test]
async fn test_get_program_returns_the_nested_tree() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/program").send(app).await;

    assert_eq!(response.status(), 200);
    let program: serde_json::Value = response.json();
    let phases = program.as_array().unwrap();
    assert_eq!(phases.len(), 4);

    // Phase rows serialize flat, with workouts nested inside
    assert_eq!(phases[0]["name"], "Adaptation Anatomica");
    assert_eq!(phases[0]["start_week"], 1);
    assert_eq!(phases[0]["workouts"][0]["day_name"], "Upper A");
    assert_eq!(
        phases[0]["workouts"][0]["exercises"][0]["name"],
        "Incline Dumbbell Press"
    );
    assert_eq!(phases[2]["workouts"], json!([]));
}

// ============================================================================
// Logs Endpoints
// ============================================================================

#[tokio::test]
async fn test_post_log_returns_success_and_id() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/logs")
        .json(&sample_log_body("2025-03-10", "Upper A"))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_get_logs_returns_history_newest_first() {
    let app = test_app().await;

    for date in ["2025-03-08", "2025-03-12"] {
        let response = AxumTestRequest::post("/logs")
            .json(&sample_log_body(date, "Upper A"))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 200);
    }

    let response = AxumTestRequest::get("/logs").send(app).await;

    assert_eq!(response.status(), 200);
    let logs: serde_json::Value = response.json();
    assert_eq!(logs.as_array().unwrap().len(), 2);
    assert_eq!(logs[0]["date"], "2025-03-12");
    assert_eq!(logs[1]["date"], "2025-03-08");

    // Log rows serialize flat with their entries nested inside
    assert_eq!(logs[0]["session_type"], "Upper A");
    assert_eq!(logs[0]["shoulder_status"], "leve");
    assert_eq!(
        logs[0]["entries"][0]["exercise_name"],
        "Incline Dumbbell Press"
    );
}

#[tokio::test]
async fn test_post_log_without_entries_field() {
    let app = test_app().await;

    let response = AxumTestRequest::post("/logs")
        .json(&json!({
            "date": "2025-03-10",
            "phase": 3,
            "week": 12,
            "session_type": "Technique",
            "shoulder_status": "sin molestias",
            "overall_status": 7
        }))
        .send(app.clone())
        .await;

    assert_eq!(response.status(), 200);

    let logs: serde_json::Value = AxumTestRequest::get("/logs").send(app).await.json();
    assert_eq!(logs[0]["entries"], json!([]));
    assert_eq!(logs[0]["notes"], json!(null));
}

#[tokio::test]
async fn test_unknown_shoulder_status_coerces_to_default() {
    let app = test_app().await;

    let mut body = sample_log_body("2025-03-10", "Upper A");
    body["shoulder_status"] = json!("totally fine");

    let response = AxumTestRequest::post("/logs").json(&body).send(app.clone()).await;
    assert_eq!(response.status(), 200);

    let logs: serde_json::Value = AxumTestRequest::get("/logs").send(app).await.json();
    assert_eq!(logs[0]["shoulder_status"], "sin molestias");
}

#[tokio::test]
async fn test_post_log_with_wrong_types_is_rejected() {
    let app = test_app().await;

    let mut body = sample_log_body("2025-03-10", "Upper A");
    body["week"] = json!("three");

    let response = AxumTestRequest::post("/logs").json(&body).send(app).await;

    // Type coercion failure is a client error, not a server error
    assert_eq!(response.status(), 422);
}

// ============================================================================
// Dashboard Endpoints
// ============================================================================

#[tokio::test]
async fn test_status_with_no_history_starts_at_week_one() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/status").send(app).await;

    assert_eq!(response.status(), 200);
    let status: serde_json::Value = response.json();
    assert_eq!(status["week"], 1);
    assert_eq!(status["phase"]["name"], "Adaptation Anatomica");
    assert_eq!(status["next_workout"]["day_name"], "Upper A");
    assert_eq!(status["last_log"], json!(null));
}

#[tokio::test]
async fn test_status_reflects_the_most_recent_log() {
    let app = test_app().await;

    AxumTestRequest::post("/logs")
        .json(&sample_log_body("2025-03-10", "Upper A"))
        .send(app.clone())
        .await;

    let status: serde_json::Value = AxumTestRequest::get("/status").send(app).await.json();

    assert_eq!(status["week"], 3);
    assert_eq!(status["phase"]["name"], "Adaptation Anatomica");
    assert_eq!(status["next_workout"]["day_name"], "Lower A");
    assert_eq!(status["last_log"]["session_type"], "Upper A");
}

#[tokio::test]
async fn test_progress_series_reads_oldest_first() {
    let app = test_app().await;

    for date in ["2025-03-12", "2025-03-08"] {
        AxumTestRequest::post("/logs")
            .json(&sample_log_body(date, "Upper A"))
            .send(app.clone())
            .await;
    }

    let response = AxumTestRequest::get("/progress").send(app).await;

    assert_eq!(response.status(), 200);
    let series: serde_json::Value = response.json();
    assert_eq!(series.as_array().unwrap().len(), 2);
    assert_eq!(series[0]["date"], "2025-03-08");
    assert_eq!(series[1]["date"], "2025-03-12");

    // 3 sets x 12 reps x 20 kg
    assert_eq!(series[0]["volume"], 720.0);
    assert_eq!(series[0]["rating"], 8);
    assert_eq!(series[0]["shoulder"], 1);
}

// ============================================================================
// Monitoring Endpoints
// ============================================================================

#[tokio::test]
async fn test_health_probe() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "macrocycle");
}

#[tokio::test]
async fn test_ready_probe_answers_when_the_store_does() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Error Contract
// ============================================================================

#[tokio::test]
async fn test_store_failure_maps_to_500_with_error_body() {
    let resources = create_test_server_resources().await;
    let app = router(&resources);

    sqlx::query("DROP TABLE logs")
        .execute(resources.database.pool())
        .await
        .unwrap();

    let response = AxumTestRequest::get("/logs").send(app).await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to fetch logs"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let response = AxumTestRequest::get("/nope").send(app).await;

    assert_eq!(response.status(), 404);
}

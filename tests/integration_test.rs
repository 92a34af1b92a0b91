use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_root_version_message() {
    let app = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "FormPerfect API v2.0 - Enhanced Analysis");
}

#[tokio::test]
async fn test_health_live() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_exercises_known_group() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/exercises?muscle_group=Chest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let exercises = body["exercises"].as_array().unwrap();
    assert!(exercises.iter().any(|name| name == "Push-ups"));
}

#[tokio::test]
async fn test_exercises_unknown_group_is_empty() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/exercises?muscle_group=Forearms")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["exercises"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_exercise_details_known_pair() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/exercise-details?muscle_group=Chest&exercise_name=Push-ups")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["exercise"], "Push-ups");
    assert_eq!(body["muscle_group"], "Chest");
    assert_eq!(body["sets"], "3-4");
    assert!(!body["form_cues"].as_array().unwrap().is_empty());
    assert!(!body["common_mistakes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_exercise_details_unknown_pair_defaults() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/exercise-details?muscle_group=Neck&exercise_name=Shrugs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["exercise"], "Shrugs");
    assert_eq!(body["sets"], "3");
    assert_eq!(body["reps"], "8-12");
    assert_eq!(body["rest"], "60s");
    assert!(body["form_cues"].as_array().unwrap().is_empty());
    assert!(body["common_mistakes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_url_shape() {
    let app = common::create_test_app();

    let payload = serde_json::json!({
        "filename": "squat.mp4",
        "size_bytes": 1048576,
        "user_id": "user-1"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/video/upload-url")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    let video_id = body["video_id"].as_str().unwrap();
    assert!(!video_id.is_empty());

    let upload_url = body["upload_url"].as_str().unwrap();
    assert!(upload_url.contains(video_id));
    assert!(upload_url.ends_with("/squat.mp4"));
}

#[tokio::test]
async fn test_analyze_without_gateway_returns_error_shape() {
    let app = common::create_test_app();

    let payload = serde_json::json!({
        "video_id": "vid-1",
        "muscle_group": "Chest",
        "exercise_name": "Push-ups"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/video/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // failure paths still answer 200 with a structured body
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["video_id"], "vid-1");
    assert_eq!(body["form_score"], 0);
    assert_eq!(body["confidence"], 0);
    assert!(body["feedback_pairs"].as_array().unwrap().is_empty());
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_404_not_found() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent/path")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

use axum::body::Body;
use axum::http::Response;
use axum::Router;
use http_body_util::BodyExt;

pub fn create_test_app() -> Router {
    // No key configured: the gateway reports NotConfigured and analyze
    // returns the structured error shape without touching the network.
    std::env::set_var("GEMINI_API_KEY", "");

    formperfect_backend::create_app()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

use std::error::Error;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use newsbrief::errors::ApiError;

#[test]
fn test_api_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ApiError::EmptyHeadlines;
    assert_error(&error);
}

#[test]
fn test_api_error_display() {
    // The Display string is exactly what the caller sees in the error field
    let error = ApiError::EmptyHeadlines;
    assert_eq!(format!("{error}"), "No headlines provided");

    let error = ApiError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = ApiError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_api_error_status_codes() {
    assert_eq!(
        ApiError::EmptyHeadlines.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::OpenAIError("x".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::HttpError("x".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::ConfigError("x".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_api_error_from_reqwest() {
    let req_err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let api_err: ApiError = req_err.into();

    match api_err {
        ApiError::HttpError(msg) => assert!(!msg.is_empty()),
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_response_body() {
    let response = ApiError::EmptyHeadlines.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "No headlines provided");
}

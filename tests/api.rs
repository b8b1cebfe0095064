//! Route tests that never touch the database: common routes and boundary
//! validation, driven through the router with a lazily-connected pool.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use qna_api::{api_routes, common_routes, AppState};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn test_state() -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/qna_api_unreachable")
        .unwrap();
    AppState { pool }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = common_routes(test_state());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn version_reports_crate_metadata() {
    let app = common_routes(test_state());
    let response = app
        .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "qna-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn welcome_at_root() {
    let app = common_routes(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("Q&A"));
}

#[tokio::test]
async fn create_question_rejects_short_title() {
    let app = api_routes(test_state());
    let payload = serde_json::json!({
        "title": "hi",
        "content": "long enough content here",
        "author_nickname": "alice"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/questions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn create_answer_rejects_short_content() {
    let app = api_routes(test_state());
    let payload = serde_json::json!({
        "content": "short",
        "author_nickname": "bob"
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/questions/1/answers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn list_questions_rejects_zero_page() {
    let app = api_routes(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/questions?page=0&size=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("page"));
}

#[tokio::test]
async fn list_answers_rejects_oversized_limit() {
    let app = api_routes(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/questions/1/answers?limit=1000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = api_routes(test_state());
    let response = app
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

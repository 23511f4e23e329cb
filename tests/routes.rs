//! Router tests driven in-process through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use hello_api::middleware::REQUEST_ID_HEADER;
use hello_api::routes::create_router;
use tower::ServiceExt;

async fn send(method: Method, uri: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn index_returns_greeting() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_string(response).await, "Hello from API");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = send(Method::GET, "/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Not Found");
}

#[tokio::test]
async fn unknown_path_is_not_found_for_any_method() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = send(method.clone(), "/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
    }
}

#[tokio::test]
async fn trailing_slash_is_not_normalized() {
    let response = send(Method::GET, "/health/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn query_string_is_ignored() {
    let response = send(Method::GET, "/health?verbose=1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn wrong_method_on_known_path_is_method_not_allowed() {
    for uri in ["/health", "/"] {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let response = send(method.clone(), uri).await;

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {uri}"
            );
            let allow = response.headers()[header::ALLOW].to_str().unwrap();
            assert!(allow.contains("GET"), "allow header was {allow:?}");
        }
    }
}

#[tokio::test]
async fn head_on_health_has_no_body() {
    let response = send(Method::HEAD, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let app = create_router();

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello from API");
    }
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let ok = send(Method::GET, "/health").await;
    let missing = send(Method::GET, "/nonexistent").await;
    let wrong_method = send(Method::POST, "/health").await;

    let ids: Vec<String> = [ok, missing, wrong_method]
        .iter()
        .map(|r| r.headers()[&REQUEST_ID_HEADER].to_str().unwrap().to_string())
        .collect();

    for id in &ids {
        assert!(uuid::Uuid::parse_str(id).is_ok(), "not a UUID: {id}");
    }
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}

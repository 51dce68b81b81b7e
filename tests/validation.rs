mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{API_KEY, offline_app, send};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

// Every case here is rejected before a statement is issued; the offline pool
// would otherwise turn them into 500s.
#[rstest]
#[case(Method::GET, "/api/users/abc", "id_usuario inválido")]
#[case(Method::DELETE, "/api/users/abc", "id_usuario inválido")]
#[case(Method::DELETE, "/api/users/-4", "id_usuario inválido")]
#[case(Method::GET, "/api/productos-db/id/uno", "id_producto inválido")]
#[case(Method::GET, "/api/votos/usuario/x1", "id_votante inválido")]
#[tokio::test]
async fn unparseable_ids_are_bad_input(
    #[case] method: Method,
    #[case] uri: &str,
    #[case] message: &str,
) {
    let app = offline_app(false);

    let (status, body) = send(&app, method, uri, Some(API_KEY), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);
}

// %FF decodes to a byte that is not UTF-8, so the path extractor itself fails
#[rstest]
#[case(Method::GET, "/api/users/%FF")]
#[case(Method::GET, "/api/users/email/%FF")]
#[case(Method::DELETE, "/api/users/%FF")]
#[case(Method::GET, "/api/productos-db/id/%FF")]
#[case(Method::PUT, "/api/productos-db/votar/%FF")]
#[case(Method::GET, "/api/votos/usuario/%FF")]
#[tokio::test]
async fn undecodable_path_segment_gets_json_error(#[case] method: Method, #[case] uri: &str) {
    let app = offline_app(false);

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Ruta inválida"));
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn full_update_requires_every_field() {
    let app = offline_app(false);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/users/1",
        Some(API_KEY),
        Some(json!({ "nombres": "Ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Datos inválidos"));
}

#[rstest]
#[case(json!({ "nombres": "Ana", "apellidos": "Lopez", "email": "ana@x", "telefono": "555" }))]
#[case(json!({ "nombres": "", "apellidos": "Lopez", "email": "ana@x.com", "telefono": "555" }))]
#[case(json!({ "apellidos": "Lopez", "email": "ana@x.com", "telefono": "555" }))]
#[case(json!({ "nombres": "Ana", "apellidos": "Lopez", "email": "ana@x.com", "telefono": 555 }))]
#[tokio::test]
async fn create_user_rejects_invalid_payloads(#[case] payload: Value) {
    let app = offline_app(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(API_KEY),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn vote_without_voter_is_rejected() {
    let app = offline_app(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/votos",
        Some(API_KEY),
        Some(json!({ "id_producto": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Datos incompletos");
}

#[tokio::test]
async fn malformed_json_body_gets_json_error() {
    let app = offline_app(false);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header("x-api-key", API_KEY)
        .header("content-type", "application/json")
        .body(Body::from("{nombres: Ana"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn store_failure_is_a_generic_json_500() {
    let app = offline_app(false);

    let (status, body) = send(&app, Method::GET, "/api/users", Some(API_KEY), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error interno del servidor");
}

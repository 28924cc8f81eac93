use std::{net::TcpListener, sync::Arc};

use axum::{
    body::Body,
    extract::Path,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use sketch_proxy::{
    app::env::Envy,
    generate::{presets::SketchPreset, service::provide_input_spec},
    replicate::{service::ReplicateClient, PredictionsApi},
    AppState,
};
use tower::util::ServiceExt;

fn authorization(headers: &HeaderMap) -> Value {
    json!(headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok()))
}

async fn create(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if body["version"] == "missing" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": "Invalid version or not permitted" })),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "id": "abc123",
            "status": "starting",
            "version": body["version"],
            "input": body["input"],
            "authorization": authorization(&headers)
        })),
    )
        .into_response()
}

async fn lookup(Path(id): Path<String>, headers: HeaderMap) -> Response {
    match id.as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Not found." })),
        )
            .into_response(),
        "garbage" => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        _ => Json(json!({
            "id": id,
            "status": "processing",
            "authorization": authorization(&headers)
        }))
        .into_response(),
    }
}

/// Serves a stand-in for the predictions API on an ephemeral port and
/// returns its base url.
fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/v1/predictions", post(create))
        .route("/v1/predictions/:id", get(lookup));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{}/v1", addr)
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/v1", addr)
}

#[tokio::test]
async fn create_posts_input_spec_with_token_auth() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();
    let input_spec =
        provide_input_spec("v1", "img", Some("smiling"), SketchPreset::default_preset());

    let response = client.create_prediction("k", &input_spec).await.unwrap();

    assert_eq!(response.code, StatusCode::CREATED);
    assert_eq!(response.body["authorization"], "Token k");
    assert_eq!(response.body["version"], "v1");
    assert_eq!(
        response.body["input"],
        serde_json::to_value(&input_spec.input).unwrap()
    );
}

#[tokio::test]
async fn create_relays_upstream_rejection() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();
    let input_spec = provide_input_spec("missing", "img", None, SketchPreset::default_preset());

    let response = client.create_prediction("k", &input_spec).await.unwrap();

    assert_eq!(response.code, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body,
        json!({ "detail": "Invalid version or not permitted" })
    );
}

#[tokio::test]
async fn get_fetches_prediction_by_id() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();

    let response = client.get_prediction("k", "abc123").await.unwrap();

    assert_eq!(response.code, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "id": "abc123", "status": "processing", "authorization": "Token k" })
    );
}

#[tokio::test]
async fn get_keeps_slashes_inside_the_id() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();

    let response = client.get_prediction("k", "abc/123").await.unwrap();

    assert_eq!(response.code, StatusCode::OK);
    assert_eq!(response.body["id"], "abc/123");
}

#[tokio::test]
async fn get_relays_not_found() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();

    let response = client.get_prediction("k", "missing").await.unwrap();

    assert_eq!(response.code, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "detail": "Not found." }));
}

#[tokio::test]
async fn non_json_upstream_body_is_an_internal_error() {
    let client = ReplicateClient::new(&spawn_upstream()).unwrap();

    let error = client.get_prediction("k", "garbage").await.unwrap_err();

    assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.error, "Internal server error");
    assert!(error.message.is_some());
}

#[tokio::test]
async fn refused_connection_is_an_internal_error() {
    let client = ReplicateClient::new(&closed_port_url()).unwrap();

    let error = client.get_prediction("k", "abc123").await.unwrap_err();

    assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.message.is_some());
}

fn proxy_for(api_url: &str) -> Router {
    sketch_proxy::router(AppState {
        envy: Arc::new(Envy::default()),
        preset: SketchPreset::default_preset(),
        predictions: Arc::new(ReplicateClient::new(api_url).unwrap()),
    })
}

fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET,OPTIONS,POST");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

async fn post_through(router: Router, body: Value) -> (StatusCode, HeaderMap, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn status_request_round_trips_through_proxy() {
    let router = proxy_for(&spawn_upstream());

    let (status, headers, body) = post_through(
        router,
        json!({ "action": "status", "apiKey": "k", "predictionId": "abc123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": "abc123", "status": "processing", "authorization": "Token k" })
    );
    assert_cors_headers(&headers);
}

#[tokio::test]
async fn unreachable_upstream_yields_internal_server_error() {
    let router = proxy_for(&closed_port_url());

    let (status, headers, body) = post_through(
        router,
        json!({ "action": "status", "apiKey": "k", "predictionId": "abc123" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["message"].is_string());
    assert_cors_headers(&headers);
}

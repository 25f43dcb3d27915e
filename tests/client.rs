mod common;

use common::{api_path, client_for, BEARER};
use rdapi::{ApiError, Client, ClientConfig, Params, ResponseError};
use reqwest::{Method, StatusCode};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_bearer_header_on_every_verb() {
    let server = MockServer::start().await;
    for verb in ["GET", "POST", "DELETE"] {
        Mock::given(method(verb))
            .and(path(api_path("/echo")))
            .and(header("Authorization", BEARER))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    for verb in [Method::GET, Method::POST, Method::DELETE] {
        let response = assert_ok!(client.request(verb, "/echo", Params::new()).await);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_get_sends_query_and_post_sends_form() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/things")))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/things")))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("name=a+b&size=3"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = Params::new().with("limit", 10).with_opt("page", None::<u32>);
    assert_ok!(client.get("/things", params).await);

    let params = Params::new().with("name", "a b").with("size", 3);
    let response = assert_ok!(client.post("/things", params).await);
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_http_error_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/broken")))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(client.get("/broken", Params::new()).await);
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.text(), "Service Unavailable");
    assert_eq!(
        response.error(),
        Some(ResponseError::Status(StatusCode::SERVICE_UNAVAILABLE))
    );
}

#[tokio::test]
async fn test_vendor_error_is_resolved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/user")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "bad_token", "error_code": 8})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/odd")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "odd", "error_code": 9001})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    let response = assert_ok!(client.get("/user", Params::new()).await);
    let vendor = response.vendor_error().expect("vendor error");
    assert_eq!(vendor.code, Some(8));
    assert_eq!(vendor.message, client.error_message(8));
    assert_eq!(vendor.message, "Bad token");

    let response = assert_ok!(client.get("/odd", Params::new()).await);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.vendor_error().unwrap().message, "Unknown Error");
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_non_json_and_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/time")))
        .respond_with(ResponseTemplate::new(200).set_body_string("2026-10-19 10:00:00"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/torrents/delete/X")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let response = assert_ok!(client.get("/time", Params::new()).await);
    assert!(response.vendor_error().is_none());
    assert!(response.is_success());
    assert_eq!(response.text(), "2026-10-19 10:00:00");

    let response = assert_ok!(client.delete("/torrents/delete/X").await);
    assert!(response.body().is_empty());
    assert!(response.error().is_none());
}

#[tokio::test]
async fn test_connection_failure_is_request_error() {
    let config = ClientConfig::new("token").with_base_url("http://127.0.0.1:1/rest/1.0");
    let client = Client::new(config).unwrap();

    let err = assert_err!(client.get("/time", Params::new()).await);
    assert!(matches!(err, ApiError::Request(_)));
}

#[tokio::test]
async fn test_error_for_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/settings/convertPoints")))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "service_unavailable", "error_code": 25})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(client.settings().convert_points().await);
    let err = assert_err!(response.error_for_status());
    match err {
        ApiError::Vendor { status, error } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(error.code, Some(25));
            assert_eq!(error.message, "Service unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_construction_requires_token() {
    assert!(matches!(
        Client::new(ClientConfig::new("")),
        Err(ApiError::Config(_))
    ));
    assert!(Client::new(ClientConfig::new("abc")).is_ok());
}

#[tokio::test]
async fn test_token_is_sent_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/user")))
        .and(header("Authorization", "Bearer  PADDED"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(" PADDED").with_base_url(format!("{}/rest/1.0", server.uri()));
    let client = assert_ok!(Client::new(config));
    let response = assert_ok!(client.get("/user", Params::new()).await);
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_string_error_code_is_resolved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/hosts/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error_code": "8"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/hosts/regex")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error_code": null})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let response = assert_ok!(client.hosts().status().await);
    let vendor = response.vendor_error().expect("vendor error");
    assert_eq!(vendor.code, Some(8));
    assert_eq!(vendor.message, "Bad token");

    let response = assert_ok!(client.hosts().regex().await);
    let vendor = response.vendor_error().expect("vendor error");
    assert_eq!(vendor.code, None);
    assert_eq!(vendor.message, "Unknown Error");
}

use client::{ApiClient, ApiError, Body, Method};
use data::person::Person;
use testware::{BASE_URL, MockTransport, api, empty_response, json_response};

fn person(id: i64) -> Person {
    Person {
        id,
        first_name: "Max".into(),
        last_name: "Muster".into(),
        external_number: format!("E-{id}"),
    }
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_stored() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.header("Authorization") == Some("Bearer test-token"))
        .times(1)
        .returning(|_| Ok(json_response(200, &vec![person(1)])));

    let persons = client::persons::list(&api(transport)).await.unwrap();
    assert_eq!(persons, vec![person(1)]);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.header("Authorization").is_none())
        .times(2)
        .returning(|_| Ok(json_response(200, &Vec::<Person>::new())));

    let api = ApiClient::new(transport, BASE_URL);
    client::persons::list(&api).await.unwrap();

    let api = api.with_token(Some(String::new()));
    client::persons::list(&api).await.unwrap();
}

#[tokio::test]
async fn test_base_url_and_path_are_joined_once() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.method == Method::Get && req.url == "http://backend.test/audit")
        .times(1)
        .returning(|_| Ok(json_response(200, &Vec::<serde_json::Value>::new())));

    let api = ApiClient::new(transport, "http://backend.test/");
    assert_eq!(api.base_url(), BASE_URL);
    client::audit::list(&api).await.unwrap();
}

#[tokio::test]
async fn test_error_status_carries_detail() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Ok(json_response(
            400,
            &serde_json::json!({"detail": "Time slot already occupied"}),
        ))
    });

    let err = client::persons::list(&api(transport)).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail().as_deref(), Some("Time slot already occupied"));
}

#[tokio::test]
async fn test_transport_failure_is_propagated() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(ApiError::Network("connection refused".into())));

    let err = client::persons::list(&api(transport)).await.unwrap_err();
    assert_eq!(err, ApiError::Network("connection refused".into()));
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Ok(client::ApiResponse {
            status: 200,
            body: b"<html>".to_vec(),
        })
    });

    let err = client::persons::list(&api(transport)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_delete_ignores_empty_reply() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::Delete
                && req.url == "http://backend.test/persons/4"
                && req.body == Body::Empty
        })
        .times(1)
        .returning(|_| Ok(empty_response(204)));

    client::persons::remove(&api(transport), 4).await.unwrap();
}

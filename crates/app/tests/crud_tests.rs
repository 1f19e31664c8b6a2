use std::cell::RefCell;

use app::crud::delete_then_reload;
use client::{ApiError, Method};
use data::user::{Role, User};
use mockall::Sequence;
use testware::{MockTransport, api, create_test_user, empty_response, json_response};

#[tokio::test]
async fn test_delete_then_reload_runs_one_delete_then_one_list() {
    let remaining = vec![create_test_user(1, "anna", Role::Admin)];
    let mut seq = Sequence::new();

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.method == Method::Delete && req.url == "http://backend.test/users/2")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(empty_response(204)));
    transport
        .expect_send()
        .withf(|req| req.method == Method::Get && req.url == "http://backend.test/users")
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(json_response(200, &remaining)));

    let backend = api(transport);
    let rows: RefCell<Vec<User>> = RefCell::new(Vec::new());

    let deleted = delete_then_reload(
        true,
        || client::users::remove(&backend, 2),
        || async {
            let list = client::users::list(&backend).await.unwrap();
            rows.replace(list);
        },
    )
    .await
    .unwrap();

    assert!(deleted);
    assert_eq!(rows.borrow().len(), 1);
    assert_eq!(rows.borrow()[0].username, "anna");
}

#[tokio::test]
async fn test_declined_confirmation_sends_nothing() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(0);

    let backend = api(transport);
    let reloaded = RefCell::new(false);

    let deleted = delete_then_reload(
        false,
        || client::users::remove(&backend, 2),
        || async {
            reloaded.replace(true);
        },
    )
    .await
    .unwrap();

    assert!(!deleted);
    assert!(!*reloaded.borrow());
}

#[tokio::test]
async fn test_failed_delete_skips_reload() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.method == Method::Delete)
        .times(1)
        .returning(|_| {
            Ok(json_response(
                400,
                &serde_json::json!({"detail": "Benutzer hat noch Dienste"}),
            ))
        });

    let backend = api(transport);
    let reloaded = RefCell::new(false);

    let result = delete_then_reload(
        true,
        || client::persons::remove(&backend, 5),
        || async {
            reloaded.replace(true);
        },
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 400, .. }));
    assert_eq!(err.detail().as_deref(), Some("Benutzer hat noch Dienste"));
    assert!(!*reloaded.borrow());
}

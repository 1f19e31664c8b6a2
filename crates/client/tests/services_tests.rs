use client::export::{ExportKind, ExportScope};
use client::{Body, Method};
use data::auth::TokenResponse;
use data::plan::{NewPlan, PlanUpdate};
use data::user::{Role, UserUpdate};
use testware::{MockTransport, api, at, create_test_plan, create_test_user, empty_response, json_response};

#[tokio::test]
async fn test_login_posts_form_encoded_credentials() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::Post
                && req.url == "http://backend.test/auth/token"
                && req.header("Content-Type") == Some("application/x-www-form-urlencoded")
                && req.body == Body::Form("username=anna&password=s%C3%A9cret+1".into())
        })
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                &serde_json::json!({"access_token": "jwt", "token_type": "bearer", "role": "planner"}),
            ))
        });

    let token = client::auth::login(&api(transport), "anna", "sécret 1").await.unwrap();
    assert_eq!(
        token,
        TokenResponse {
            access_token: "jwt".into(),
            token_type: Some("bearer".into()),
            role: Some(Role::Planner),
        }
    );
}

#[tokio::test]
async fn test_change_password_sends_both_passwords() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            let Body::Json(body) = &req.body else {
                return false;
            };
            let body: serde_json::Value = serde_json::from_str(body).unwrap();
            req.url == "http://backend.test/auth/change-password"
                && body == serde_json::json!({"old_password": "alt", "new_password": "neu"})
        })
        .times(1)
        .returning(|_| Ok(empty_response(200)));

    client::auth::change_password(&api(transport), "alt", "neu").await.unwrap();
}

#[tokio::test]
async fn test_plan_list_encodes_range() {
    let anna = create_test_user(1, "anna", Role::Planner);
    let plans = vec![create_test_plan(9, &anna, at(2024, 6, 10, 0), false)];

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url == "http://backend.test/plans?start=2024-06-10T00%3A00%3A00")
        .times(1)
        .returning(move |_| Ok(json_response(200, &plans)));

    let fetched = client::plans::list(&api(transport), Some(at(2024, 6, 10, 0)), None)
        .await
        .unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].assignee_username(), Some("anna"));
}

#[tokio::test]
async fn test_plan_create_and_confirm() {
    let anna = create_test_user(1, "anna", Role::Planner);
    let created = create_test_plan(5, &anna, at(2024, 6, 10, 0), false);

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::Post
                && req.url == "http://backend.test/plans"
                && req.body
                    == Body::Json(
                        r#"{"start_date":"2024-06-10T00:00:00","end_date":"2024-06-17T00:00:00","user_id":1}"#
                            .into(),
                    )
        })
        .times(1)
        .returning(move |_| Ok(json_response(200, &created)));
    transport
        .expect_send()
        .withf(|req| {
            req.method == Method::Post
                && req.url == "http://backend.test/plans/5/confirm"
                && req.body == Body::Empty
        })
        .times(1)
        .returning(|_| Ok(json_response(200, &serde_json::json!({"status": "confirmed"}))));

    let api = api(transport);
    let plan = client::plans::create(
        &api,
        &NewPlan {
            start_date: at(2024, 6, 10, 0),
            end_date: at(2024, 6, 17, 0),
            user_id: 1,
        },
    )
    .await
    .unwrap();
    client::plans::confirm(&api, plan.id).await.unwrap();
}

#[tokio::test]
async fn test_user_update_without_password() {
    let user = create_test_user(3, "ben", Role::Buchhaltung);

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            let Body::Json(body) = &req.body else {
                return false;
            };
            req.method == Method::Put
                && req.url == "http://backend.test/users/3"
                && !body.contains("password")
        })
        .times(1)
        .returning(move |_| Ok(json_response(200, &user)));

    let update = UserUpdate {
        email: Some("ben@example.org".into()),
        ..Default::default()
    };
    client::users::update(&api(transport), 3, &update).await.unwrap();
}

#[tokio::test]
async fn test_duty_eligible_users() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url == "http://backend.test/users/duty-eligible")
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                &serde_json::json!([{"id": 1, "username": "anna", "first_name": "Anna", "last_name": "Berg"}]),
            ))
        });

    let users = client::users::duty_eligible(&api(transport)).await.unwrap();
    assert_eq!(users[0].full_name(), "Anna Berg");
}

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let csv = b"\xef\xbb\xbfID;Start;Ende\n1;2024-06-10;2024-06-17\n".to_vec();
    let expected = csv.clone();

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url == "http://backend.test/export/plans?month=5&year=2024")
        .times(1)
        .returning(move |_| {
            Ok(client::ApiResponse {
                status: 200,
                body: csv.clone(),
            })
        });

    let scope = ExportScope {
        month: Some(5),
        year: Some(2024),
    };
    let bytes = client::export::fetch(&api(transport), ExportKind::PlansCsv, scope)
        .await
        .unwrap();
    assert_eq!(bytes, expected);
}

#[tokio::test]
async fn test_audit_export_ignores_scope() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url == "http://backend.test/export/audit")
        .times(1)
        .returning(|_| {
            Ok(client::ApiResponse {
                status: 200,
                body: b"%PDF-1.4 not json".to_vec(),
            })
        });

    let scope = ExportScope {
        month: Some(5),
        year: Some(2024),
    };
    let bytes = client::export::fetch(&api(transport), ExportKind::AuditCsv, scope)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_stats_overview() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.url == "http://backend.test/stats/overview")
        .times(1)
        .returning(|_| {
            Ok(json_response(
                200,
                &serde_json::json!({
                    "month": {"name": "Juni", "year": 2024, "data": [{
                        "user_id": 1, "first_name": "Anna", "last_name": "Berg",
                        "username": "anna", "total_days": 7, "total_entries": 1
                    }]},
                    "year": {"year": 2024, "data": []}
                }),
            ))
        });

    let stats = client::stats::overview(&api(transport)).await.unwrap();
    assert_eq!(stats.month.data[0].total_days, 7);
    assert!(stats.year.data.is_empty());
}

#[tokio::test]
async fn test_plan_update_sends_only_given_fields() {
    let anna = create_test_user(1, "anna", Role::Planner);
    let updated = create_test_plan(5, &anna, at(2024, 6, 10, 0), false);

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| {
            let Body::Json(body) = &req.body else {
                return false;
            };
            let body: serde_json::Value = serde_json::from_str(body).unwrap();
            req.method == Method::Put
                && req.url == "http://backend.test/plans/5"
                && body == serde_json::json!({"user_id": 2})
        })
        .times(1)
        .returning(move |_| Ok(json_response(200, &updated)));

    let update = PlanUpdate {
        user_id: Some(2),
        ..Default::default()
    };
    let plan = client::plans::update(&api(transport), 5, &update).await.unwrap();
    assert_eq!(plan.id, 5);
}

#[tokio::test]
async fn test_user_get_by_id() {
    let anna = create_test_user(7, "anna", Role::Buchhaltung);

    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.method == Method::Get && req.url == "http://backend.test/users/7")
        .times(1)
        .returning(move |_| Ok(json_response(200, &anna)));

    let user = client::users::get(&api(transport), 7).await.unwrap();
    assert_eq!(user.username, "anna");
    assert_eq!(user.role, Some(Role::Buchhaltung));
}

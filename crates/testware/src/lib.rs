mod mockall_transport;

pub use mockall_transport::MockTransport;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use client::{ApiClient, ApiResponse};
use data::plan::Plan;
use data::user::{Role, User, UserSummary};

pub const BASE_URL: &str = "http://backend.test";

pub fn api(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(transport, BASE_URL).with_token(Some("test-token".into()))
}

pub fn json_response<T: Serialize>(status: u16, body: &T) -> ApiResponse {
    ApiResponse {
        status,
        body: serde_json::to_vec(body).expect("Failed to serialize response body"),
    }
}

pub fn empty_response(status: u16) -> ApiResponse {
    ApiResponse {
        status,
        body: Vec::new(),
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .expect("Invalid test timestamp")
}

pub fn create_test_user(id: i64, username: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.org"),
        first_name: username.to_string(),
        last_name: "Test".to_string(),
        phone_number: None,
        role: Some(role),
        is_active: true,
        can_take_duty: true,
        created_at: at(2024, 1, 1, 8),
        last_login: None,
    }
}

pub fn create_test_plan(id: i64, user: &User, start: NaiveDateTime, confirmed: bool) -> Plan {
    Plan {
        id,
        start_date: start,
        end_date: start + chrono::Duration::days(7),
        user_id: Some(user.id),
        person_id: None,
        confirmed,
        created_by: Some("admin".to_string()),
        user: Some(UserSummary::from(user)),
        person: None,
    }
}

/// An unsigned JWT carrying the given claims.
pub fn create_test_token(sub: &str, role: Option<Role>, exp: Option<i64>) -> String {
    let mut claims = serde_json::json!({ "sub": sub });
    if let Some(role) = role {
        claims["role"] = serde_json::json!(role.to_string());
    }
    if let Some(exp) = exp {
        claims["exp"] = serde_json::json!(exp);
    }
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode("signature")
    )
}

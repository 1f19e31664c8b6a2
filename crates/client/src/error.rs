use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Server Error: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The `detail` string of an error body such as `{"detail": "..."}`.
    pub fn detail(&self) -> Option<String> {
        let ApiError::Http { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(str::to_string)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn detail_is_taken_from_json_body() {
        let error = http(400, r#"{"detail": "Time slot already occupied"}"#);
        assert_eq!(error.detail().as_deref(), Some("Time slot already occupied"));
        assert_eq!(error.message_or("Speichern fehlgeschlagen"), "Time slot already occupied");
    }

    #[test]
    fn structured_detail_falls_back() {
        let error = http(422, r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#);
        assert_eq!(error.detail(), None);
        assert_eq!(error.message_or("Speichern fehlgeschlagen"), "Speichern fehlgeschlagen");
    }

    #[test]
    fn non_http_errors_have_no_detail() {
        let error = ApiError::Network("offline".into());
        assert_eq!(error.status(), None);
        assert_eq!(error.message_or("Fehler"), "Fehler");
        assert_eq!(error.to_string(), "Network Error: offline");
    }

    #[test]
    fn unauthorized() {
        assert!(http(401, "").is_unauthorized());
        assert!(!http(403, "").is_unauthorized());
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Confirm,
    Other(String),
}

impl From<String> for AuditAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATE" => AuditAction::Create,
            "UPDATE" => AuditAction::Update,
            "DELETE" => AuditAction::Delete,
            "CONFIRM" => AuditAction::Confirm,
            _ => AuditAction::Other(value),
        }
    }
}

impl From<AuditAction> for String {
    fn from(value: AuditAction) -> Self {
        value.as_str().to_string()
    }
}

impl AuditAction {
    pub fn as_str(&self) -> &str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Confirm => "CONFIRM",
            AuditAction::Other(other) => other,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuditLog {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub action: AuditAction,
    pub target_table: String,
    #[serde(default)]
    pub target_id: Option<i64>,
    #[serde(with = "datetime")]
    pub timestamp: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_actions_are_kept() {
        let log: AuditLog = serde_json::from_str(
            r#"{"id": 1, "username": "admin", "action": "LOGIN",
                "target_table": "users", "timestamp": "2024-06-10T08:00:00"}"#,
        )
        .unwrap();

        assert_eq!(log.action, AuditAction::Other("LOGIN".into()));
        assert_eq!(log.action.as_str(), "LOGIN");
    }

    #[test]
    fn known_actions_map_to_variants() {
        let action: AuditAction = serde_json::from_str("\"CONFIRM\"").unwrap();
        assert_eq!(action, AuditAction::Confirm);
    }
}

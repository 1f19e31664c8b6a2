use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;
use crate::user::UserSummary;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

/// A duty entry. Older backends assign persons, newer ones users.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: i64,
    #[serde(with = "datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "datetime")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub person: Option<PersonName>,
}

impl Plan {
    pub fn assignee_name(&self) -> Option<String> {
        match (&self.user, &self.person) {
            (Some(user), _) => Some(user.full_name()),
            (None, Some(person)) => Some(format!("{} {}", person.first_name, person.last_name)),
            (None, None) => None,
        }
    }

    pub fn assignee_username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewPlan {
    #[serde(with = "datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "datetime")]
    pub end_date: NaiveDateTime,
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PlanUpdate {
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
}

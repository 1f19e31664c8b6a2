use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatUser {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub total_days: i64,
    pub total_entries: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MonthStats {
    pub name: String,
    pub year: i32,
    pub data: Vec<StatUser>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct YearStats {
    pub year: i32,
    pub data: Vec<StatUser>,
}

/// Confirmed duty days per user for the current month and year.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatsOverview {
    pub month: MonthStats,
    pub year: YearStats,
}

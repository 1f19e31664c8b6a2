use chrono::NaiveDateTime;
use data::datetime::to_local_iso;
use data::plan::{NewPlan, Plan, PlanUpdate};

use crate::{ApiClient, ApiError, Transport};

/// Lists duty entries, optionally limited to `[start, end)`.
pub async fn list<T: Transport>(
    api: &ApiClient<T>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<Vec<Plan>, ApiError> {
    api.get(
        "/plans",
        &[
            ("start", start.as_ref().map(to_local_iso)),
            ("end", end.as_ref().map(to_local_iso)),
        ],
    )
    .await
}

pub async fn create<T: Transport>(api: &ApiClient<T>, plan: &NewPlan) -> Result<Plan, ApiError> {
    api.post_json("/plans", plan).await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    update: &PlanUpdate,
) -> Result<Plan, ApiError> {
    api.put_json(&format!("/plans/{id}"), update).await
}

pub async fn confirm<T: Transport>(api: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    api.post_empty(&format!("/plans/{id}/confirm")).await
}

pub async fn remove<T: Transport>(api: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/plans/{id}")).await
}

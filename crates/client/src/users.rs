use data::user::{NewUser, User, UserSummary, UserUpdate};

use crate::{ApiClient, ApiError, Transport};

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Vec<User>, ApiError> {
    api.get("/users", &[]).await
}

/// Users allowed to be assigned to a duty entry.
pub async fn duty_eligible<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<UserSummary>, ApiError> {
    api.get("/users/duty-eligible", &[]).await
}

pub async fn get<T: Transport>(api: &ApiClient<T>, id: i64) -> Result<User, ApiError> {
    api.get(&format!("/users/{id}"), &[]).await
}

pub async fn create<T: Transport>(api: &ApiClient<T>, user: &NewUser) -> Result<User, ApiError> {
    api.post_json("/users", user).await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    update: &UserUpdate,
) -> Result<User, ApiError> {
    api.put_json(&format!("/users/{id}"), update).await
}

pub async fn remove<T: Transport>(api: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/users/{id}")).await
}

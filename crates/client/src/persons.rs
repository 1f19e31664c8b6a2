use data::person::{NewPerson, Person};

use crate::{ApiClient, ApiError, Transport};

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Person>, ApiError> {
    api.get("/persons", &[]).await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    person: &NewPerson,
) -> Result<Person, ApiError> {
    api.post_json("/persons", person).await
}

pub async fn remove<T: Transport>(api: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/persons/{id}")).await
}

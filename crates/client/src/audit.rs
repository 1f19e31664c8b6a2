use data::audit::AuditLog;

use crate::{ApiClient, ApiError, Transport};

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Vec<AuditLog>, ApiError> {
    api.get("/audit", &[]).await
}

use data::stats::StatsOverview;

use crate::{ApiClient, ApiError, Transport};

pub async fn overview<T: Transport>(api: &ApiClient<T>) -> Result<StatsOverview, ApiError> {
    api.get("/stats/overview", &[]).await
}

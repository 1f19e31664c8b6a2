use async_trait::async_trait;
use mockall::mock;

use client::{ApiError, ApiRequest, ApiResponse, Transport as ClientTransport};

mock! {
    pub Transport {}

    #[async_trait(?Send)]
    impl ClientTransport for Transport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
    }
}

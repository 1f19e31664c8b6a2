pub mod audit;
pub mod auth;
pub mod error;
pub mod export;
pub mod fetch;
pub mod persons;
pub mod plans;
pub mod stats;
pub mod transport;
pub mod users;

mod api_client;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use fetch::FetchTransport;
pub use transport::{ApiRequest, ApiResponse, Body, Method, Transport};

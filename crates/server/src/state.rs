use axum::extract::FromRef;
use common::settings::{Frontend, Settings};
use std::sync::Arc;

#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub frontend: Arc<Frontend>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            frontend: Arc::new(settings.frontend.clone()),
        }
    }
}

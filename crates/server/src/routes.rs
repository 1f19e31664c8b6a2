use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use common::settings::Frontend;
use std::{path::Path, sync::Arc};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{health, state::AppState};

/// Site router: `/config.json` for the browser application, everything else
/// from `site_root`. Unknown paths get `index.html` so client-side routes
/// survive a reload.
pub fn routes(app_state: AppState, site_root: impl AsRef<Path>) -> Router {
    let site_root = site_root.as_ref();
    let site = ServeDir::new(site_root).fallback(ServeFile::new(site_root.join("index.html")));

    Router::new()
        .route("/config.json", get(config))
        .route("/live", get(health::live))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn config(State(frontend): State<Arc<Frontend>>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(Frontend::clone(&frontend)),
    )
}

use client::{ApiClient, ApiError, FetchTransport};
use common::settings::Frontend;
use leptos::prelude::*;
use tracing::{info, warn};

use crate::components::notice::{Notice, failure_notice};
use crate::session::SessionContext;

/// Handle for building backend clients from inside components.
#[derive(Debug, Clone, Copy)]
pub struct Api {
    base_url: StoredValue<String>,
    session: SessionContext,
}

impl Api {
    /// A client carrying the current session token, if any.
    pub fn client(&self) -> ApiClient<FetchTransport> {
        ApiClient::new(FetchTransport, self.base_url.get_value()).with_token(self.session.token())
    }

    /// Notice for a failed call. Logs out on 401, which sends protected
    /// pages back to the login.
    pub fn failure(&self, error: &ApiError, fallback: &str) -> Notice {
        let session = self.session;
        failure_notice(error, fallback, move || {
            warn!("Backend rejected the session, logging out");
            session.logout();
        })
    }
}

pub fn provide_api(base_url: String, session: SessionContext) -> Api {
    let api = Api {
        base_url: StoredValue::new(base_url),
        session,
    };
    provide_context(api);
    api
}

pub fn expect_api() -> Api {
    expect_context::<Api>()
}

/// Fetches `/config.json` from the serving origin. Falls back to the
/// built-in defaults when it is missing or unreadable.
pub async fn load_settings() -> Frontend {
    let origin = ApiClient::new(FetchTransport, "");
    match origin.get::<Frontend>("/config.json", &[]).await {
        Ok(settings) => {
            info!("Using backend at {}", settings.api_url);
            settings
        }
        Err(e) => {
            warn!("Failed to load /config.json, using defaults: {e}");
            Frontend::default()
        }
    }
}

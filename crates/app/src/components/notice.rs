use client::ApiError;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }
}

/// Notice for a failed backend call. A 401 means the session is no longer
/// accepted, so `end_session` runs before the notice is built.
pub fn failure_notice(error: &ApiError, fallback: &str, end_session: impl FnOnce()) -> Notice {
    if error.is_unauthorized() {
        end_session();
        return Notice::error("Sitzung abgelaufen, bitte erneut anmelden");
    }
    Notice::error(error.message_or(fallback))
}

#[allow(non_snake_case)]
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            let (class, message) = match current {
                Notice::Success(message) => ("alert alert-success", message),
                Notice::Error(message) => ("alert alert-error", message),
            };
            view! {
                <div role="alert" class=format!("{class} rounded-btn my-3 p-3 flex justify-between")>
                    <span class="font-semibold">{message}</span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| notice.set(None)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn unauthorized_ends_the_session() {
        let mut ended = false;
        let notice = failure_notice(&http(401, ""), "Laden fehlgeschlagen", || ended = true);

        assert!(ended);
        assert_eq!(notice, Notice::error("Sitzung abgelaufen, bitte erneut anmelden"));
    }

    #[test]
    fn other_failures_keep_the_session() {
        let mut ended = false;
        let notice = failure_notice(
            &http(400, r#"{"detail": "Überschneidung mit bestehendem Dienst"}"#),
            "Eintrag konnte nicht erstellt werden",
            || ended = true,
        );
        assert!(!ended);
        assert_eq!(notice, Notice::error("Überschneidung mit bestehendem Dienst"));

        let notice = failure_notice(&http(500, "boom"), "Export fehlgeschlagen", || ended = true);
        assert!(!ended);
        assert_eq!(notice, Notice::error("Export fehlgeschlagen"));
    }
}

use client::auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use super::notice::{Notice, NoticeBanner};
use crate::api::expect_api;
use crate::forms::PasswordForm;

#[allow(non_snake_case)]
#[component]
pub fn PasswordModal(show: RwSignal<bool>) -> impl IntoView {
    let api = expect_api();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = PasswordForm {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        if !form.is_complete() {
            notice.set(Some(Notice::error("Bitte beide Felder ausfüllen")));
            return;
        }

        pending.set(true);
        spawn_local(async move {
            match auth::change_password(&api.client(), &form.old_password, &form.new_password)
                .await
            {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    notice.set(Some(Notice::success("Passwort erfolgreich geändert")));
                }
                Err(e) => {
                    error!("Failed to change password: {e}");
                    notice.set(Some(Notice::error(
                        e.message_or("Passwort konnte nicht geändert werden"),
                    )));
                }
            }
            pending.set(false);
        });
    };

    let on_close = move |_| {
        show.set(false);
        notice.set(None);
        old_password.set(String::new());
        new_password.set(String::new());
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h2 class="font-bold text-lg">"Passwort ändern"</h2>
                    <NoticeBanner notice=notice/>
                    <form class="flex flex-col gap-3 mt-4" on:submit=on_submit>
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Aktuelles Passwort"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Neues Passwort"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=on_close>
                                "Schließen"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                                "Speichern"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

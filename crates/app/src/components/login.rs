use client::auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use tracing::{error, info};

use crate::access::HOME_ROUTE;
use crate::api::expect_api;
use crate::session::expect_session;

#[allow(non_snake_case)]
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_api();
    let session = expect_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let failure = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let navigate = use_navigate();
    let signed_in = Memo::new(move |_| session.get().is_authenticated());

    Effect::new(move |_| {
        if signed_in.get() {
            navigate(HOME_ROUTE, Default::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        pending.set(true);
        failure.set(None);

        let name = username.get_untracked();
        let secret = password.get_untracked();
        spawn_local(async move {
            match auth::login(&api.client(), &name, &secret).await {
                Ok(response) => {
                    info!("Logged in as {} ({:?})", name, response.role);
                    session.login(&response);
                }
                Err(e) => {
                    error!("Login failed: {e}");
                    failure.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="flex min-h-screen items-center justify-center bg-base-100 p-4">
            <div class="card w-full max-w-md bg-base-200 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="card-title text-2xl justify-center">"Anmelden"</h1>
                    {move || {
                        failure
                            .get()
                            .map(|message| {
                                view! {
                                    <div role="alert" class="alert alert-error text-sm">
                                        {message}
                                    </div>
                                }
                            })
                    }}
                    <label class="font-semibold" for="username">
                        "Benutzername"
                    </label>
                    <input
                        id="username"
                        class="input input-bordered"
                        type="text"
                        autocapitalize="none"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="font-semibold" for="password">
                        "Passwort"
                    </label>
                    <input
                        id="password"
                        class="input input-bordered"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary mt-4" type="submit" disabled=move || pending.get()>
                        "Anmelden"
                        <span class:hidden=move || !pending.get() class="loading loading-dots"></span>
                    </button>
                </form>
            </div>
        </div>
    }
}

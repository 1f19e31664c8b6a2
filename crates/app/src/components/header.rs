use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::password::PasswordModal;
use super::sidebar::NavList;
use crate::access::LOGIN_ROUTE;
use crate::session::expect_session;
use crate::theme::{Theme, expect_theme};

#[allow(non_snake_case)]
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_session();
    let theme = expect_theme();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, Default::default());
    };

    view! {
        <header class="navbar bg-base-200 sticky top-0 z-40">
            <div class="navbar-start">
                <button
                    class="btn btn-ghost lg:hidden"
                    aria-label="Menü"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="h-5 w-5"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        ></path>
                    </svg>
                </button>
            </div>
            <div class="navbar-end gap-2">
                <span class="text-sm hidden sm:inline">
                    {move || session.username().unwrap_or_default()}
                </span>
                <Show when=move || session.role().is_some()>
                    <span class="badge badge-outline">
                        {move || session.role().map(|role| role.label()).unwrap_or_default()}
                    </span>
                </Show>
                <button class="btn btn-ghost btn-sm" on:click=move |_| theme.toggle()>
                    {move || match theme.get() {
                        Theme::Light => "Dunkel",
                        Theme::Dark => "Hell",
                    }}
                </button>
                <button class="btn btn-ghost btn-sm" on:click=move |_| show_password.set(true)>
                    "Passwort ändern"
                </button>
                <button class="btn btn-primary btn-sm" on:click=on_logout>
                    "Abmelden"
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <nav class="lg:hidden bg-base-200 px-2 pb-2">
                <NavList on_select=Callback::new(move |_| menu_open.set(false))/>
            </nav>
        </Show>

        <PasswordModal show=show_password/>
    }
}

use common::settings::Frontend;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icons::NavIcon;
use crate::navigation::visible_items;
use crate::session::expect_session;

/// Renders the navigation table for the current role. Used by the desktop
/// sidebar and the mobile menu alike.
#[allow(non_snake_case)]
#[component]
pub fn NavList(#[prop(optional)] on_select: Option<Callback<()>>) -> impl IntoView {
    let session = expect_session();
    let pathname = use_location().pathname;

    view! {
        <ul class="menu w-full gap-1">
            <For
                each=move || visible_items(session.role())
                key=|item| item.route()
                children=move |item| {
                    let route = item.route();
                    view! {
                        <li>
                            <a
                                href=route
                                class:active=move || pathname.get() == route
                                on:click=move |_| {
                                    if let Some(on_select) = on_select {
                                        on_select.run(());
                                    }
                                }
                            >
                                <NavIcon icon=item.icon/>
                                {item.label}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Sidebar() -> impl IntoView {
    let title = expect_context::<Frontend>().sidebar_title;

    view! {
        <aside class="hidden lg:flex w-64 shrink-0 flex-col bg-base-200 p-4">
            <a href="/calendar" class="text-xl font-semibold px-4 mb-6">
                {title}
            </a>
            <NavList/>
        </aside>
    }
}

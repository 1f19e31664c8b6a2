pub mod access;
pub mod api;
pub mod calendar;
pub mod components;
pub mod crud;
pub mod download;
pub mod forms;
pub mod navigation;
pub mod session;
pub mod theme;

use common::settings::Frontend;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use access::Page;
use components::{
    audit::AuditPage, calendar::CalendarPage, export::ExportPage, layout::Protected,
    login::LoginPage, persons::PersonsPage, stats::StatsPage, users::UsersPage,
};

#[component]
pub fn App(settings: Frontend) -> impl IntoView {
    provide_meta_context();

    let session = session::provide_session();
    theme::provide_theme();
    api::provide_api(settings.api_url.clone(), session);
    let title = settings.sidebar_title.clone();
    provide_context(settings);

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text=title/>
        <Meta name="description" content="Notfallplan Dienstplanung"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/calendar"/> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/calendar"/> }/>
                <Route path=path!("/login") view=LoginPage/>
                <Route
                    path=path!("/calendar")
                    view=|| view! { <Protected page=Page::Calendar><CalendarPage/></Protected> }
                />
                <Route
                    path=path!("/audit")
                    view=|| view! { <Protected page=Page::Audit><AuditPage/></Protected> }
                />
                <Route
                    path=path!("/admin")
                    view=|| view! { <Protected page=Page::Persons><PersonsPage/></Protected> }
                />
                <Route
                    path=path!("/users")
                    view=|| view! { <Protected page=Page::Users><UsersPage/></Protected> }
                />
                <Route
                    path=path!("/export")
                    view=|| view! { <Protected page=Page::Export><ExportPage/></Protected> }
                />
                <Route
                    path=path!("/stats")
                    view=|| view! { <Protected page=Page::Stats><StatsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}

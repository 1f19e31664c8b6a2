use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracing::debug;

use super::header::Header;
use super::sidebar::Sidebar;
use crate::access::{Gate, Page, gate};
use crate::session::expect_session;

#[allow(non_snake_case)]
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-base-100">
            <Sidebar/>
            <div class="flex min-w-0 flex-1 flex-col">
                <Header/>
                <main class="flex-1 overflow-auto p-4">{children()}</main>
            </div>
        </div>
    }
}

/// Renders `children` inside the shell once the session may see `page`,
/// otherwise navigates away.
#[allow(non_snake_case)]
#[component]
pub fn Protected(page: Page, children: ChildrenFn) -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let children = StoredValue::new(children);

    let decision = Memo::new(move |_| gate(&session.get(), page));

    Effect::new(move |_| {
        if let Gate::Redirect(target) = decision.get() {
            debug!("Redirecting from {} to {}", page.route(), target);
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || decision.get() == Gate::Allow>
            <Shell>{children.with_value(|children| children())}</Shell>
        </Show>
    }
}

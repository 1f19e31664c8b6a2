use client::audit;
use data::audit::{AuditAction, AuditLog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use super::notice::{Notice, NoticeBanner};
use crate::api::expect_api;
use crate::calendar::display;

fn action_badge(action: &AuditAction) -> &'static str {
    match action {
        AuditAction::Create => "badge badge-success",
        AuditAction::Update => "badge badge-info",
        AuditAction::Delete => "badge badge-error",
        AuditAction::Confirm => "badge badge-secondary",
        AuditAction::Other(_) => "badge badge-ghost",
    }
}

#[allow(non_snake_case)]
#[component]
pub fn AuditPage() -> impl IntoView {
    let api = expect_api();
    let logs = RwSignal::new(Vec::<AuditLog>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    spawn_local(async move {
        match audit::list(&api.client()).await {
            Ok(list) => logs.set(list),
            Err(e) => {
                error!("Failed to load audit log: {e}");
                notice.set(Some(api.failure(&e, "Audit-Log konnte nicht geladen werden")));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="card bg-base-200">
            <div class="card-body">
                <h1 class="card-title">"System Audit Log"</h1>
                <NoticeBanner notice=notice/>
                <div class="overflow-x-auto">
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>"Zeit"</th>
                                <th>"Benutzer"</th>
                                <th>"Aktion"</th>
                                <th>"Ziel"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get()>
                                <tr>
                                    <td colspan="4" class="text-center">
                                        <span class="loading loading-dots"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !loading.get() && logs.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="4" class="text-center opacity-70">
                                        "Keine Einträge vorhanden."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || logs.get()
                                key=|log| log.id
                                children=move |log| {
                                    let target = match log.target_id {
                                        Some(id) => format!("{} #{id}", log.target_table),
                                        None => log.target_table.clone(),
                                    };
                                    view! {
                                        <tr class="hover">
                                            <td class="whitespace-nowrap opacity-70">{display(&log.timestamp)}</td>
                                            <td class="font-medium">
                                                {log.username.clone().unwrap_or_else(|| "System".to_string())}
                                            </td>
                                            <td>
                                                <span class=action_badge(&log.action)>
                                                    {log.action.as_str().to_string()}
                                                </span>
                                            </td>
                                            <td class="font-mono text-xs opacity-70">{target}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

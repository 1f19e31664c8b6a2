use chrono::{Datelike, Local};
use client::export::{self, ExportKind, ExportScope};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use super::notice::{Notice, NoticeBanner};
use crate::api::expect_api;
use crate::calendar::MONTH_NAMES;
use crate::download::save_file;

#[allow(non_snake_case)]
#[component]
pub fn ExportPage() -> impl IntoView {
    let api = expect_api();
    let notice = RwSignal::new(None::<Notice>);
    let loading_plans = RwSignal::new(false);
    let loading_audit = RwSignal::new(false);

    let month = RwSignal::new(None::<u32>);
    let year = RwSignal::new(None::<i32>);

    let run = move |kind: ExportKind, loading: RwSignal<bool>| {
        let scope = ExportScope {
            month: month.get_untracked(),
            year: year.get_untracked(),
        };
        loading.set(true);
        spawn_local(async move {
            match export::fetch(&api.client(), kind, scope).await {
                Ok(bytes) => {
                    let filename = export::filename(kind, scope, Local::now().date_naive());
                    info!("Downloading {} ({} bytes)", filename, bytes.len());
                    if let Err(e) = save_file(&bytes, &filename, kind.mime()) {
                        error!("Failed to save {filename}: {e:?}");
                        notice.set(Some(Notice::error("Export fehlgeschlagen")));
                    }
                }
                Err(e) => {
                    error!("Export failed: {e}");
                    notice.set(Some(api.failure(&e, "Export fehlgeschlagen")));
                }
            }
            loading.set(false);
        });
    };

    let this_year = Local::now().year();

    view! {
        <div class="card bg-base-200">
            <div class="card-body">
                <h1 class="card-title">"Daten-Export"</h1>
                <p class="text-sm opacity-70">
                    "Exportieren Sie Notfallpläne und Audit-Logs für die Buchhaltung."
                </p>
                <NoticeBanner notice=notice/>

                <div class="grid gap-4 md:grid-cols-2 mt-4">
                    <div class="card border-2 border-dashed border-base-300">
                        <div class="card-body items-center text-center">
                            <h3 class="font-semibold">"Notfallpläne"</h3>
                            <p class="text-sm opacity-70">
                                "Alle Dienstpläne mit Benutzerinformationen, Zeiten und Status."
                            </p>
                            <div class="flex w-full gap-2">
                                <select
                                    class="select select-bordered select-sm flex-1"
                                    on:change=move |ev| month.set(event_target_value(&ev).parse().ok())
                                >
                                    <option value="">"Alle Monate"</option>
                                    {MONTH_NAMES
                                        .iter()
                                        .enumerate()
                                        .map(|(index, name)| {
                                            view! { <option value=(index + 1).to_string()>{*name}</option> }
                                        })
                                        .collect_view()}
                                </select>
                                <select
                                    class="select select-bordered select-sm flex-1"
                                    on:change=move |ev| year.set(event_target_value(&ev).parse().ok())
                                >
                                    <option value="">"Alle Jahre"</option>
                                    {(this_year - 3..=this_year + 1)
                                        .rev()
                                        .map(|year| view! { <option value=year.to_string()>{year}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <button
                                class="btn btn-primary w-full"
                                disabled=move || loading_plans.get()
                                on:click=move |_| run(ExportKind::PlansCsv, loading_plans)
                            >
                                {move || if loading_plans.get() { "Exportiere..." } else { "Als CSV herunterladen" }}
                            </button>
                            <button
                                class="btn btn-outline w-full"
                                disabled=move || loading_plans.get()
                                on:click=move |_| run(ExportKind::PlansPdf, loading_plans)
                            >
                                {move || if loading_plans.get() { "Exportiere..." } else { "Als PDF herunterladen" }}
                            </button>
                        </div>
                    </div>

                    <div class="card border-2 border-dashed border-base-300">
                        <div class="card-body items-center text-center">
                            <h3 class="font-semibold">"Audit-Log"</h3>
                            <p class="text-sm opacity-70">
                                "Alle Systemaktivitäten mit Zeitstempel, Benutzer und Aktion."
                            </p>
                            <button
                                class="btn btn-primary w-full"
                                disabled=move || loading_audit.get()
                                on:click=move |_| run(ExportKind::AuditCsv, loading_audit)
                            >
                                {move || if loading_audit.get() { "Exportiere..." } else { "Als CSV herunterladen" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

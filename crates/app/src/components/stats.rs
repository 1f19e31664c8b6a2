use client::stats;
use data::stats::{StatUser, StatsOverview};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use super::notice::{Notice, NoticeBanner};
use crate::api::expect_api;

#[allow(non_snake_case)]
#[component]
fn StatsTable(title: String, rows: Vec<StatUser>) -> impl IntoView {
    let empty = rows.is_empty();

    view! {
        <div class="card bg-base-200">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Mitarbeiter"</th>
                            <th>"Benutzername"</th>
                            <th class="text-right">"Tage"</th>
                            <th class="text-right">"Dienste"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="hover">
                                        <td class="font-medium">{format!("{} {}", row.first_name, row.last_name)}</td>
                                        <td class="opacity-70">{row.username}</td>
                                        <td class="text-right">{row.total_days}</td>
                                        <td class="text-right">{row.total_entries}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        {empty
                            .then(|| {
                                view! {
                                    <tr>
                                        <td colspan="4" class="text-center opacity-70">
                                            "Keine Daten vorhanden."
                                        </td>
                                    </tr>
                                }
                            })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StatsPage() -> impl IntoView {
    let api = expect_api();
    let overview = RwSignal::new(None::<StatsOverview>);
    let notice = RwSignal::new(None::<Notice>);

    spawn_local(async move {
        match stats::overview(&api.client()).await {
            Ok(loaded) => overview.set(Some(loaded)),
            Err(e) => {
                error!("Failed to load statistics: {e}");
                notice.set(Some(api.failure(&e, "Statistik konnte nicht geladen werden")));
            }
        }
    });

    view! {
        <div class="flex flex-col gap-6">
            <h1 class="text-xl font-semibold">"Statistik"</h1>
            <NoticeBanner notice=notice/>
            {move || {
                overview
                    .get()
                    .map(|overview| {
                        view! {
                            <div class="grid gap-6 lg:grid-cols-2">
                                <StatsTable
                                    title=format!("{} {}", overview.month.name, overview.month.year)
                                    rows=overview.month.data
                                />
                                <StatsTable
                                    title=format!("Jahr {}", overview.year.year)
                                    rows=overview.year.data
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

use chrono::{Duration, NaiveDateTime};
use client::plans;
use data::plan::{NewPlan, Plan};
use data::user::UserSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use super::confirmation::ConfirmationModal;
use super::notice::{Notice, NoticeBanner};
use crate::access::plan_actions;
use crate::api::expect_api;
use crate::calendar::display;
use crate::crud::delete_then_reload;
use crate::session::expect_session;

fn day_range(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    let last_day = *end - Duration::days(1);
    format!(
        "{} bis {}",
        start.format("%d.%m.%Y"),
        last_day.format("%d.%m.%Y")
    )
}

/// Assigns a user to the selected range.
#[allow(non_snake_case)]
#[component]
pub fn AssignModal(
    range: RwSignal<Option<(NaiveDateTime, NaiveDateTime)>>,
    users: RwSignal<Vec<UserSummary>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_api();
    let selected_user = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let on_save = move |_| {
        let Some((start_date, end_date)) = range.get_untracked() else {
            return;
        };
        let Ok(user_id) = selected_user.get_untracked().parse::<i64>() else {
            notice.set(Some(Notice::error("Bitte einen Benutzer auswählen")));
            return;
        };

        let plan = NewPlan {
            start_date,
            end_date,
            user_id,
        };
        spawn_local(async move {
            match plans::create(&api.client(), &plan).await {
                Ok(created) => {
                    info!("Created plan {}", created.id);
                    range.set(None);
                    selected_user.set(String::new());
                    notice.set(None);
                    on_saved.run(());
                }
                Err(e) => {
                    error!("Failed to create plan: {e}");
                    notice.set(Some(api.failure(
                        &e,
                        "Eintrag konnte nicht erstellt werden. Möglicherweise Überschneidung.",
                    )));
                }
            }
        });
    };

    let on_cancel = move |_| {
        range.set(None);
        notice.set(None);
    };

    view! {
        <Show when=move || range.get().is_some()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h2 class="font-bold text-lg">"Dienst zuweisen"</h2>
                    <p class="mt-1 text-sm opacity-70">
                        {move || range.get().map(|(start, end)| day_range(&start, &end))}
                    </p>
                    <NoticeBanner notice=notice/>
                    <select
                        class="select select-bordered w-full mt-4"
                        prop:value=move || selected_user.get()
                        on:change=move |ev| selected_user.set(event_target_value(&ev))
                    >
                        <option value="">"Benutzer auswählen..."</option>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| {
                                view! { <option value=user.id.to_string()>{user.full_name()}</option> }
                            }
                        />
                    </select>
                    <div class="modal-action">
                        <button class="btn" on:click=on_cancel>
                            "Abbrechen"
                        </button>
                        <button class="btn btn-primary" on:click=on_save>
                            "Speichern"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Shows one duty entry with the confirm and delete actions the role allows.
#[allow(non_snake_case)]
#[component]
pub fn PlanDetailModal(plan: RwSignal<Option<Plan>>, on_changed: Callback<()>) -> impl IntoView {
    let api = expect_api();
    let session = expect_session();
    let notice = RwSignal::new(None::<Notice>);

    let (show_confirm_popup, set_show_confirm_popup) = signal(false);
    let (custom_text, set_custom_text) = signal(String::new());

    let actions = Memo::new(move |_| {
        plan.with(|plan| {
            plan.as_ref()
                .map(|plan| plan_actions(session.role(), plan))
                .unwrap_or_default()
        })
    });

    let close = move || {
        plan.set(None);
        notice.set(None);
    };

    let on_confirm_click = move |_| {
        let Some(id) = plan.with_untracked(|plan| plan.as_ref().map(|plan| plan.id)) else {
            return;
        };
        spawn_local(async move {
            match plans::confirm(&api.client(), id).await {
                Ok(()) => {
                    info!("Confirmed plan {id}");
                    close();
                    on_changed.run(());
                }
                Err(e) => {
                    error!("Failed to confirm plan {id}: {e}");
                    notice.set(Some(api.failure(&e, "Bestätigen fehlgeschlagen")));
                }
            }
        });
    };

    let on_delete_click = move |_| {
        let title = plan.with_untracked(|plan| {
            plan.as_ref()
                .and_then(Plan::assignee_name)
                .unwrap_or_else(|| "Unbekannt".to_string())
        });
        set_custom_text.set(format!("Dienst von {title} löschen"));
        set_show_confirm_popup.set(true);
    };

    let finish_delete = move |confirmed: bool| {
        set_show_confirm_popup.set(false);
        let Some(id) = plan.with_untracked(|plan| plan.as_ref().map(|plan| plan.id)) else {
            return;
        };
        spawn_local(async move {
            let client = api.client();
            let result = delete_then_reload(
                confirmed,
                || plans::remove(&client, id),
                || async move { on_changed.run(()) },
            )
            .await;
            match result {
                Ok(true) => {
                    info!("Deleted plan {id}");
                    close();
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to delete plan {id}: {e}");
                    notice.set(Some(api.failure(&e, "Löschen fehlgeschlagen")));
                }
            }
        });
    };

    let on_yes_click = Callback::new(move |_| finish_delete(true));
    let on_no_click = Callback::new(move |_| finish_delete(false));

    view! {
        <Show when=move || plan.with(Option::is_some)>
            <div class="modal modal-open">
                <div class="modal-box">
                    {move || {
                        plan.get()
                            .map(|plan| {
                                view! {
                                    <h2 class="font-bold text-lg">
                                        {plan.assignee_name().unwrap_or_else(|| "Unbekannt".to_string())}
                                    </h2>
                                    <dl class="mt-3 grid grid-cols-2 gap-1 text-sm">
                                        <dt class="opacity-70">"Beginn"</dt>
                                        <dd>{display(&plan.start_date)}</dd>
                                        <dt class="opacity-70">"Ende"</dt>
                                        <dd>{display(&plan.end_date)}</dd>
                                        <dt class="opacity-70">"Status"</dt>
                                        <dd>
                                            {if plan.confirmed { "Bestätigt" } else { "Unbestätigt" }}
                                        </dd>
                                        <dt class="opacity-70">"Erstellt von"</dt>
                                        <dd>{plan.created_by.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    </dl>
                                }
                            })
                    }}
                    <NoticeBanner notice=notice/>
                    <div class="modal-action">
                        <button class="btn" on:click=move |_| close()>
                            "Schließen"
                        </button>
                        <Show when=move || actions.get().delete>
                            <button class="btn btn-error" on:click=on_delete_click>
                                "Löschen"
                            </button>
                        </Show>
                        <Show when=move || actions.get().confirm>
                            <button class="btn btn-success" on:click=on_confirm_click>
                                "Bestätigen"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>

        <ConfirmationModal
            show=show_confirm_popup
            custom_text=custom_text
            on_yes_click=on_yes_click
            on_no_click=on_no_click
        />
    }
}

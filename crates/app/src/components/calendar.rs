use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use client::{plans, users};
use data::plan::Plan;
use data::user::UserSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error};

use super::notice::{Notice, NoticeBanner};
use super::plan_modals::{AssignModal, PlanDetailModal};
use crate::api::{Api, expect_api};
use crate::calendar::{
    WEEKDAY_NAMES, events_on, grid_bounds, map_events, month_grid, month_start, month_title,
    refresh_for, selection_range, shift_month,
};
use crate::session::expect_session;
use crate::theme::{Theme, expect_theme};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn load_plans(
    api: Api,
    month: NaiveDate,
    plans_signal: RwSignal<Vec<Plan>>,
    notice: RwSignal<Option<Notice>>,
) {
    let (start, end) = grid_bounds(month);
    match plans::list(&api.client(), Some(start), Some(end)).await {
        Ok(list) => {
            debug!("Loaded {} plans", list.len());
            plans_signal.set(list);
        }
        Err(e) => {
            error!("Failed to fetch plans: {e}");
            notice.set(Some(api.failure(&e, "Dienste konnten nicht geladen werden")));
        }
    }
}

async fn load_eligible(
    api: Api,
    eligible: RwSignal<Vec<UserSummary>>,
    notice: RwSignal<Option<Notice>>,
) {
    match users::duty_eligible(&api.client()).await {
        Ok(list) => eligible.set(list),
        Err(e) => {
            error!("Failed to fetch eligible users: {e}");
            notice.set(Some(api.failure(&e, "Benutzer konnten nicht geladen werden")));
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CalendarPage() -> impl IntoView {
    let api = expect_api();
    let session = expect_session();
    let theme = expect_theme();

    let month = RwSignal::new(month_start(today()));
    let plans_signal = RwSignal::new(Vec::<Plan>::new());
    let eligible = RwSignal::new(Vec::<UserSummary>::new());
    let notice = RwSignal::new(None::<Notice>);

    let anchor = RwSignal::new(None::<NaiveDate>);
    let pending_range = RwSignal::new(None::<(NaiveDateTime, NaiveDateTime)>);
    let selected_plan = RwSignal::new(None::<Plan>);

    let reload = move || {
        spawn_local(load_plans(api, month.get_untracked(), plans_signal, notice));
    };

    Effect::new(move |previous: Option<(NaiveDate, Theme)>| {
        let current = (month.get(), theme.get());
        let refresh = refresh_for(previous, current);
        if refresh.plans {
            reload();
        }
        if refresh.eligible {
            spawn_local(load_eligible(api, eligible, notice));
        }
        current
    });

    let events = Memo::new(move |_| map_events(&plans_signal.get(), theme.get()));

    let on_day_click = move |day: NaiveDate| match anchor.get_untracked() {
        None => anchor.set(Some(day)),
        Some(first) => {
            anchor.set(None);
            pending_range.set(Some(selection_range(session.role_untracked(), first, day)));
        }
    };

    let on_changed = Callback::new(move |_| reload());

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex items-center justify-between">
                <div class="join">
                    <button class="btn btn-sm join-item" on:click=move |_| month.update(|m| *m = shift_month(*m, -1))>
                        "‹"
                    </button>
                    <button class="btn btn-sm join-item" on:click=move |_| month.set(month_start(today()))>
                        "Heute"
                    </button>
                    <button class="btn btn-sm join-item" on:click=move |_| month.update(|m| *m = shift_month(*m, 1))>
                        "›"
                    </button>
                </div>
                <h1 class="text-xl font-semibold">{move || month_title(month.get())}</h1>
                <span class="text-sm opacity-70">
                    {move || {
                        anchor
                            .get()
                            .map(|day| format!("Start: {} · Enddatum wählen", day.format("%d.%m.%Y")))
                            .unwrap_or_else(|| "Zeitraum mit zwei Klicks wählen".to_string())
                    }}
                </span>
            </div>

            <NoticeBanner notice=notice/>

            <div class="rounded-box border border-base-300">
                <div class="grid grid-cols-7 bg-base-200">
                    {WEEKDAY_NAMES
                        .iter()
                        .map(|name| view! { <div class="p-2 text-center text-sm font-semibold">{*name}</div> })
                        .collect_view()}
                </div>
                {move || {
                    let events = events.get();
                    let current = month.get();
                    let selected = anchor.get();
                    let today = today();
                    month_grid(current)
                        .into_iter()
                        .map(|week| {
                            view! {
                                <div class="grid grid-cols-7 border-t border-base-300">
                                    {week
                                        .into_iter()
                                        .map(|day| {
                                            let outside = day.month() != current.month();
                                            let is_anchor = selected == Some(day);
                                            let is_today = day == today;
                                            view! {
                                                <div
                                                    class="min-h-24 cursor-pointer border-l border-base-300 p-1 first:border-l-0"
                                                    class:opacity-50=outside
                                                    class:bg-base-300=is_anchor
                                                    on:click=move |_| on_day_click(day)
                                                >
                                                    <div class="text-right text-xs" class:font-bold=is_today>
                                                        {day.day()}
                                                    </div>
                                                    {events_on(&events, day)
                                                        .into_iter()
                                                        .map(|event| {
                                                            let plan = event.plan.clone();
                                                            let title = event.title.clone();
                                                            view! {
                                                                <div
                                                                    class="mb-1 truncate rounded px-1 text-xs text-white"
                                                                    style=event.style
                                                                    title=title
                                                                    on:click=move |ev| {
                                                                        ev.stop_propagation();
                                                                        selected_plan.set(Some(plan.clone()));
                                                                    }
                                                                >
                                                                    {event.title}
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>

        <AssignModal range=pending_range users=eligible on_saved=on_changed/>
        <PlanDetailModal plan=selected_plan on_changed=on_changed/>
    }
}

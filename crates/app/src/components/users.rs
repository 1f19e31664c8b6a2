use client::users;
use data::user::{Role, User};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use strum::IntoEnumIterator;
use tracing::{error, info};

use super::confirmation::ConfirmationModal;
use super::notice::{Notice, NoticeBanner};
use crate::api::{Api, expect_api};
use crate::crud::delete_then_reload;
use crate::forms::UserForm;

fn role_badge(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "badge badge-error",
        Some(Role::Planner) => "badge badge-info",
        Some(Role::Buchhaltung) => "badge badge-success",
        None => "badge badge-ghost",
    }
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map_or("Unbekannt", |role| role.label())
}

async fn load_users(api: Api, rows: RwSignal<Vec<User>>, notice: RwSignal<Option<Notice>>) {
    match users::list(&api.client()).await {
        Ok(list) => rows.set(list),
        Err(e) => {
            error!("Failed to load users: {e}");
            notice.set(Some(api.failure(&e, "Benutzer konnten nicht geladen werden")));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editing {
    New,
    Existing(i64),
}

#[allow(non_snake_case)]
#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_api();

    let rows = RwSignal::new(Vec::<User>::new());
    let notice = RwSignal::new(None::<Notice>);
    let form = RwSignal::new(UserForm::default());
    let editing = RwSignal::new(None::<Editing>);
    let pending = RwSignal::new(false);

    let (show_confirm_popup, set_show_confirm_popup) = signal(false);
    let (custom_text, set_custom_text) = signal(String::new());
    let to_delete = RwSignal::new(None::<i64>);

    spawn_local(load_users(api, rows, notice));

    let open_new = move |_| {
        form.set(UserForm::default());
        editing.set(Some(Editing::New));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = editing.get_untracked() else {
            return;
        };
        let current = form.get_untracked();

        pending.set(true);
        spawn_local(async move {
            let client = api.client();
            let result = match mode {
                Editing::New => match current.to_new_user() {
                    Ok(new_user) => users::create(&client, &new_user).await,
                    Err(e) => {
                        notice.set(Some(Notice::error(e.to_string())));
                        pending.set(false);
                        return;
                    }
                },
                Editing::Existing(id) => users::update(&client, id, &current.to_update()).await,
            };

            match result {
                Ok(user) => {
                    info!("Saved user {}", user.username);
                    editing.set(None);
                    form.set(UserForm::default());
                    load_users(api, rows, notice).await;
                }
                Err(e) => {
                    error!("Failed to save user: {e}");
                    notice.set(Some(
                        api.failure(&e, "Benutzer konnte nicht gespeichert werden"),
                    ));
                }
            }
            pending.set(false);
        });
    };

    let finish_delete = move |confirmed: bool| {
        set_show_confirm_popup.set(false);
        let Some(id) = to_delete.get_untracked() else {
            return;
        };
        to_delete.set(None);
        spawn_local(async move {
            let client = api.client();
            let result = delete_then_reload(
                confirmed,
                || users::remove(&client, id),
                || load_users(api, rows, notice),
            )
            .await;
            if let Err(e) = result {
                error!("Failed to delete user {id}: {e}");
                notice.set(Some(api.failure(&e, "Benutzer konnte nicht gelöscht werden")));
            }
        });
    };

    let on_yes_click = Callback::new(move |_| finish_delete(true));
    let on_no_click = Callback::new(move |_| finish_delete(false));

    let is_new = move || editing.get() == Some(Editing::New);

    view! {
        <div class="card bg-base-200">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h1 class="card-title">"Benutzerverwaltung"</h1>
                    <button class="btn btn-primary btn-sm" on:click=open_new>
                        "Neuer Benutzer"
                    </button>
                </div>
                <NoticeBanner notice=notice/>
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Benutzername"</th>
                                <th>"E-Mail"</th>
                                <th>"Rolle"</th>
                                <th>"Status"</th>
                                <th class="text-right">"Aktionen"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || rows.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="6" class="text-center opacity-70">
                                        "Keine Benutzer vorhanden."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || rows.get()
                                key=|user| user.clone()
                                children=move |user| {
                                    let id = user.id;
                                    let label = user.full_name();
                                    let prefill = UserForm::from_user(&user);
                                    view! {
                                        <tr class="hover">
                                            <td class="font-medium">{user.full_name()}</td>
                                            <td>{user.username.clone()}</td>
                                            <td class="opacity-70">{user.email.clone()}</td>
                                            <td>
                                                <span class=role_badge(user.role)>{role_label(user.role)}</span>
                                            </td>
                                            <td>
                                                {if user.is_active { "Aktiv" } else { "Inaktiv" }}
                                                {user.can_take_duty.then_some(" · Dienstfähig")}
                                            </td>
                                            <td class="text-right">
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| {
                                                        form.set(prefill.clone());
                                                        editing.set(Some(Editing::Existing(id)));
                                                    }
                                                >
                                                    "Bearbeiten"
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| {
                                                        to_delete.set(Some(id));
                                                        set_custom_text.set(format!("Benutzer {label} löschen"));
                                                        set_show_confirm_popup.set(true);
                                                    }
                                                >
                                                    "Löschen"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <Show when=move || editing.get().is_some()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h2 class="font-bold text-lg">
                        {move || if is_new() { "Neuer Benutzer" } else { "Benutzer bearbeiten" }}
                    </h2>
                    <form class="mt-4 flex flex-col gap-3" on:submit=on_submit>
                        <div class="grid grid-cols-2 gap-3">
                            <input
                                class="input input-bordered"
                                placeholder="Vorname"
                                required
                                prop:value=move || form.with(|form| form.first_name.clone())
                                on:input=move |ev| form.update(|form| form.first_name = event_target_value(&ev))
                            />
                            <input
                                class="input input-bordered"
                                placeholder="Nachname"
                                required
                                prop:value=move || form.with(|form| form.last_name.clone())
                                on:input=move |ev| form.update(|form| form.last_name = event_target_value(&ev))
                            />
                        </div>
                        <input
                            class="input input-bordered"
                            placeholder="Benutzername"
                            required
                            disabled=move || !is_new()
                            prop:value=move || form.with(|form| form.username.clone())
                            on:input=move |ev| form.update(|form| form.username = event_target_value(&ev))
                        />
                        <input
                            class="input input-bordered"
                            type="email"
                            placeholder="E-Mail"
                            required
                            prop:value=move || form.with(|form| form.email.clone())
                            on:input=move |ev| form.update(|form| form.email = event_target_value(&ev))
                        />
                        <input
                            class="input input-bordered"
                            type="password"
                            placeholder=move || {
                                if is_new() { "Passwort" } else { "Neues Passwort (leer = unverändert)" }
                            }
                            required=is_new
                            prop:value=move || form.with(|form| form.password.clone())
                            on:input=move |ev| form.update(|form| form.password = event_target_value(&ev))
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Telefonnummer"
                            prop:value=move || form.with(|form| form.phone_number.clone())
                            on:input=move |ev| form.update(|form| form.phone_number = event_target_value(&ev))
                        />
                        <label class="font-semibold text-sm">"Rolle"</label>
                        <select
                            class="select select-bordered"
                            prop:value=move || {
                                form.with(|form| form.role.map(|role| role.to_string()).unwrap_or_default())
                            }
                            on:change=move |ev| {
                                let role = event_target_value(&ev).parse::<Role>().ok();
                                form.update(|form| form.role = role);
                            }
                        >
                            <option value="" disabled>
                                "Rolle wählen..."
                            </option>
                            {Role::iter()
                                .map(|role| view! { <option value=role.to_string()>{role.label()}</option> })
                                .collect_view()}
                        </select>
                        <div class="flex gap-4">
                            <label class="label cursor-pointer gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    prop:checked=move || form.with(|form| form.is_active)
                                    on:change=move |ev| form.update(|form| form.is_active = event_target_checked(&ev))
                                />
                                "Aktiv"
                            </label>
                            <label class="label cursor-pointer gap-2">
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    prop:checked=move || form.with(|form| form.can_take_duty)
                                    on:change=move |ev| {
                                        form.update(|form| form.can_take_duty = event_target_checked(&ev))
                                    }
                                />
                                "Kann Dienst übernehmen"
                            </label>
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn" on:click=move |_| editing.set(None)>
                                "Abbrechen"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                                "Speichern"
                            </button>
                        </div>
                    </form>
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

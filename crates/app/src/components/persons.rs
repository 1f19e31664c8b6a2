use client::persons;
use data::person::Person;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use super::confirmation::ConfirmationModal;
use super::notice::{Notice, NoticeBanner};
use crate::api::{Api, expect_api};
use crate::crud::delete_then_reload;
use crate::forms::PersonForm;

async fn load_persons(api: Api, rows: RwSignal<Vec<Person>>, notice: RwSignal<Option<Notice>>) {
    match persons::list(&api.client()).await {
        Ok(list) => rows.set(list),
        Err(e) => {
            error!("Failed to load persons: {e}");
            notice.set(Some(api.failure(&e, "Personen konnten nicht geladen werden")));
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PersonsPage() -> impl IntoView {
    let api = expect_api();

    let rows = RwSignal::new(Vec::<Person>::new());
    let form = RwSignal::new(PersonForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let pending = RwSignal::new(false);

    let (show_confirm_popup, set_show_confirm_popup) = signal(false);
    let (custom_text, set_custom_text) = signal(String::new());
    let to_delete = RwSignal::new(None::<i64>);

    spawn_local(load_persons(api, rows, notice));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let person = match form.with_untracked(PersonForm::to_new_person) {
            Ok(person) => person,
            Err(e) => {
                notice.set(Some(Notice::error(e.to_string())));
                return;
            }
        };

        pending.set(true);
        spawn_local(async move {
            match persons::create(&api.client(), &person).await {
                Ok(created) => {
                    info!("Created person {}", created.id);
                    form.set(PersonForm::default());
                    load_persons(api, rows, notice).await;
                }
                Err(e) => {
                    error!("Failed to create person: {e}");
                    notice.set(Some(api.failure(&e, "Person konnte nicht angelegt werden")));
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
                || persons::remove(&client, id),
                || load_persons(api, rows, notice),
            )
            .await;
            if let Err(e) = result {
                error!("Failed to delete person {id}: {e}");
                notice.set(Some(api.failure(&e, "Löschen fehlgeschlagen")));
            }
        });
    };

    let on_yes_click = Callback::new(move |_| finish_delete(true));
    let on_no_click = Callback::new(move |_| finish_delete(false));

    view! {
        <div class="grid gap-6 md:grid-cols-3">
            <div class="card bg-base-200 md:col-span-1">
                <form class="card-body gap-3" on:submit=on_submit>
                    <h2 class="card-title">"Person hinzufügen"</h2>
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
                    <input
                        class="input input-bordered"
                        placeholder="Telefon (+49...)"
                        required
                        prop:value=move || form.with(|form| form.external_number.clone())
                        on:input=move |ev| {
                            form.update(|form| form.external_number = event_target_value(&ev))
                        }
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || pending.get()>
                        "Person hinzufügen"
                    </button>
                </form>
            </div>

            <div class="card bg-base-200 md:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">"Personalliste"</h2>
                    <NoticeBanner notice=notice/>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Nummer"</th>
                                <th class="text-right">"Aktionen"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || rows.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="3" class="text-center opacity-70">
                                        "Keine Personen vorhanden."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || rows.get()
                                key=|person| person.clone()
                                children=move |person| {
                                    let id = person.id;
                                    let name = person.full_name();
                                    let label = name.clone();
                                    view! {
                                        <tr class="hover">
                                            <td class="font-medium">{name}</td>
                                            <td class="opacity-70">{person.external_number}</td>
                                            <td class="text-right">
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| {
                                                        to_delete.set(Some(id));
                                                        set_custom_text.set(format!("{label} löschen"));
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

        <ConfirmationModal
            show=show_confirm_popup
            custom_text=custom_text
            on_yes_click=on_yes_click
            on_no_click=on_no_click
        />
    }
}

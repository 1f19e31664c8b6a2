use leptos::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ConfirmationModal(
    show: ReadSignal<bool>,
    custom_text: ReadSignal<String>,
    on_yes_click: Callback<()>,
    on_no_click: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900 bg-opacity-50">
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h2 class="font-bold text-lg">{move || custom_text.get()}</h2>
                        <h3 class="mt-2">"Sind Sie sicher?"</h3>
                        <div class="modal-action">
                            <button class="btn" on:click=move |_| on_no_click.run(())>
                                "Nein"
                            </button>
                            <button class="btn btn-error" on:click=move |_| on_yes_click.run(())>
                                "Ja"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

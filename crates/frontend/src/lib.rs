use app::App;
use app::api::load_settings;
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber_wasm::MakeConsoleWriter;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_env_filter("app=debug,client=debug,leptos=info")
            .with_max_level(Level::DEBUG)
            .without_time()
            .with_ansi(false)
            .finish()
            .with(
                fmt::Layer::default()
                    .with_writer(MakeConsoleWriter::default())
                    .with_ansi(false)
                    .without_time(),
            ),
    )
    .expect("Unable to configure tracing");
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        let settings = load_settings().await;
        leptos::mount::mount_to_body(move || view! { <App settings=settings.clone()/> });
    });
}

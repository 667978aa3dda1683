use leptos::prelude::*;

mod components;

use components::schema_builder::SchemaBuilder;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SchemaBuilder/>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::error!("Failed to initialize console logging: {}", e);
    }
    leptos::mount::mount_to_body(App);
}

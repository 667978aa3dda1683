use leptos::prelude::*;
use schema_builder_core::{TreeStore, DEFAULT_INDENT};

/// Read-only panel with the projected schema as pretty JSON
#[component]
pub fn SchemaPreview(store: RwSignal<TreeStore>) -> impl IntoView {
    let output = Memo::new(move |_| store.with(|s| s.preview(DEFAULT_INDENT)));

    view! {
        <div class="w-1/2 bg-gray-100 p-6 overflow-y-auto">
            <h2 class="text-2xl font-bold mb-4">"Live JSON Output"</h2>
            <pre class="schema-output bg-white p-4 border rounded overflow-x-auto text-sm">
                {move || output.get()}
            </pre>
        </div>
    }
}

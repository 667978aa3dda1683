//! Top-level editor: the root field list next to the live output

use leptos::prelude::*;
use schema_builder_core::TreeStore;

use super::field_editor::{row_keys, FieldEditor};
use super::schema_preview::SchemaPreview;

#[component]
pub fn SchemaBuilder() -> impl IntoView {
    // The whole editor state; rows receive the signal and edit through it
    let store = RwSignal::new(TreeStore::new());

    let add_field = move |_: leptos::ev::MouseEvent| {
        store.update(|s| {
            s.add_field(None);
        });
    };

    view! {
        <div class="flex h-screen">
            <div class="w-1/2 p-6 overflow-y-auto">
                <h2 class="text-2xl font-bold mb-4">"JSON Schema Builder"</h2>
                <Show
                    when=move || store.with(|s| !s.forest().is_empty())
                    fallback=|| view! {
                        <div class="text-sm text-gray-500 italic p-3 bg-gray-50 rounded">
                            "No fields defined. Click 'Add Field' to start."
                        </div>
                    }
                >
                    <For
                        each=move || store.with(|s| row_keys(s, None))
                        key=|(idx, id)| (*idx, *id)
                        children=move |(idx, _)| {
                            view! {
                                <FieldEditor path=vec![idx] depth=0 store=store/>
                            }
                        }
                    />
                </Show>
                <button
                    type="button"
                    class="mt-4 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    on:click=add_field
                >
                    "+ Add Field"
                </button>
            </div>

            <SchemaPreview store=store/>
        </div>
    }
}

//! Recursive field editor
//!
//! One row per field: name input, type selector, remove button and, for
//! nested fields, an "add child" button followed by the children rendered
//! with this same component. Every row reads and writes the shared
//! [`TreeStore`] through its positional path.

use leptos::prelude::*;
use schema_builder_core::{FieldId, FieldPatch, FieldType, TreeStore};

/// Background and spacing for a row at `depth`
pub(crate) fn depth_class(depth: usize) -> &'static str {
    if depth % 2 == 0 {
        "bg-gray-50"
    } else {
        "bg-white"
    }
}

/// Keys for `<For>` over a sibling list.
///
/// The index is part of the key so that removing a sibling re-renders every
/// row after it with its new path.
pub(crate) fn row_keys(store: &TreeStore, parent: Option<&[usize]>) -> Vec<(usize, FieldId)> {
    let forest = store.forest();
    let siblings = match parent {
        None => forest.fields(),
        Some(path) => match forest.get(path) {
            Some(field) => field.children.as_slice(),
            None => &[],
        },
    };
    siblings.iter().enumerate().map(|(idx, f)| (idx, f.id)).collect()
}

/// Type of the field a row currently addresses
pub(crate) fn field_type_at(store: &TreeStore, path: &[usize]) -> FieldType {
    store.forest().get(path).map(|f| f.field_type).unwrap_or_default()
}

/// Split a row path into the `(parent, index)` pair `remove_field` expects
pub(crate) fn split_row_path(path: &[usize]) -> Option<(Option<&[usize]>, usize)> {
    let (&index, parent) = path.split_last()?;
    let parent = if parent.is_empty() { None } else { Some(parent) };
    Some((parent, index))
}

#[component]
pub fn FieldEditor(
    path: Vec<usize>,
    depth: usize,
    store: RwSignal<TreeStore>,
) -> AnyView {
    let path_stored = StoredValue::new(path);

    let name = move || {
        store.with(|s| {
            s.forest()
                .get(&path_stored.get_value())
                .map(|f| f.name.clone())
                .unwrap_or_default()
        })
    };
    let field_type = move || store.with(|s| field_type_at(s, &path_stored.get_value()));
    let is_nested = move || field_type() == FieldType::Nested;

    let on_name = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let path = path_stored.get_value();
        store.update(|s| {
            s.update(&path, FieldPatch::default().name(value));
        });
    };

    let on_type = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<FieldType>() {
        Ok(field_type) => {
            let path = path_stored.get_value();
            store.update(|s| {
                s.update(&path, FieldPatch::default().field_type(field_type));
            });
        }
        Err(e) => log::warn!("{}", e),
    };

    let on_remove = move |_: leptos::ev::MouseEvent| {
        let path = path_stored.get_value();
        if let Some((parent, index)) = split_row_path(&path) {
            store.update(|s| {
                s.remove_field(parent, index);
            });
        }
    };

    let on_add_child = move |_: leptos::ev::MouseEvent| {
        let path = path_stored.get_value();
        store.update(|s| {
            s.add_field(Some(&path));
        });
    };

    view! {
        <div class=format!("ml-4 mb-4 border-l-2 pl-4 py-2 rounded-r {}", depth_class(depth))>
            <div class="flex gap-2 items-center">
                <input
                    type="text"
                    class="border px-2 py-1 rounded"
                    placeholder="Field name"
                    prop:value=name
                    on:input=on_name
                />
                <select
                    class="border px-2 py-1 rounded"
                    prop:value=move || field_type().as_str()
                    on:change=on_type
                >
                    // a row rebuilt after a removal mounts its options after
                    // the select's value is set, so each option tracks itself
                    {FieldType::ALL
                        .into_iter()
                        .map(move |t| view! {
                            <option value=t.as_str() prop:selected=move || field_type() == t>
                                {t.as_str()}
                            </option>
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    type="button"
                    class="px-2 py-1 text-red-500 hover:bg-red-50 rounded"
                    title="Remove field"
                    on:click=on_remove
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                    </svg>
                </button>
                <Show when=is_nested>
                    <button
                        type="button"
                        class="text-green-600 border px-2 py-1 rounded hover:bg-green-50"
                        on:click=on_add_child
                    >
                        "+ Add Child"
                    </button>
                </Show>
            </div>

            <Show when=is_nested>
                <For
                    each=move || store.with(|s| row_keys(s, Some(&path_stored.get_value())))
                    key=|(idx, id)| (*idx, *id)
                    children=move |(child_idx, _)| {
                        let mut child_path = path_stored.get_value();
                        child_path.push(child_idx);
                        view! {
                            <FieldEditor
                                path=child_path
                                depth=depth + 1
                                store=store
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_builder_core::{Field, Forest};

    #[test]
    fn test_split_row_path() {
        assert_eq!(split_row_path(&[3]), Some((None, 3)));
        assert_eq!(split_row_path(&[1, 0, 2]), Some((Some(&[1, 0][..]), 2)));
        assert_eq!(split_row_path(&[]), None);
    }

    #[test]
    fn test_row_keys_follow_positions() {
        let mut store = TreeStore::from_forest(Forest::from_fields([
            Field::named("a", FieldType::String),
            Field::named("b", FieldType::Nested)
                .with_children([Field::new(), Field::new()]),
        ]));

        let root = row_keys(&store, None);
        assert_eq!(root.iter().map(|(i, _)| *i).collect::<Vec<_>>(), [0, 1]);
        assert_eq!(row_keys(&store, Some(&[1])).len(), 2);
        assert!(row_keys(&store, Some(&[5])).is_empty());

        let second_child = row_keys(&store, Some(&[1]))[1].1;
        store.remove_field(Some(&[1]), 0);
        assert_eq!(row_keys(&store, Some(&[1])), [(0, second_child)]);
    }

    #[test]
    fn test_rebuilt_row_reads_shifted_field_type() {
        let mut store = TreeStore::from_forest(Forest::from_fields([
            Field::named("a", FieldType::String),
            Field::named("b", FieldType::Number),
            Field::named("c", FieldType::Nested),
        ]));
        assert_eq!(field_type_at(&store, &[1]), FieldType::Number);

        store.remove_field(None, 0);
        // rows are re-keyed by index, so the new rows at 0 and 1 must show
        // the types of the fields that moved into those slots
        assert_eq!(field_type_at(&store, &[0]), FieldType::Number);
        assert_eq!(field_type_at(&store, &[1]), FieldType::Nested);
        assert_eq!(field_type_at(&store, &[2]), FieldType::String);
    }

    #[test]
    fn test_depth_class_alternates() {
        assert_eq!(depth_class(0), depth_class(2));
        assert_ne!(depth_class(0), depth_class(1));
    }
}

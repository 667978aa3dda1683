use schema_builder_core::{
    generate, render_pretty, Field, FieldPatch, FieldType, Forest, TreeStore, DEFAULT_INDENT,
};
use serde_json::json;
use std::sync::Arc;

/// Builds `{"user": {"name": ..., "address": {"city": ...}}, "active": ...}`
/// through the same operations the editor dispatches.
fn build_user_schema() -> TreeStore {
    let mut store = TreeStore::new();
    store.update(&[0], FieldPatch::default().name("user").field_type(FieldType::Nested));
    store.add_field(Some(&[0]));
    store.update(&[0, 0], FieldPatch::default().name("name"));
    store.add_field(Some(&[0]));
    store.update(&[0, 1], FieldPatch::default().name("address").field_type(FieldType::Nested));
    store.add_field(Some(&[0, 1]));
    store.update(&[0, 1, 0], FieldPatch::default().name("city"));
    store.add_field(None);
    store.update(&[1], FieldPatch::default().name("active").field_type(FieldType::Boolean));
    store
}

#[test]
fn test_initial_store_projects_single_unnamed_string() {
    let store = TreeStore::new();
    assert_eq!(store.schema(), json!({"unnamed": "string"}));
}

#[test]
fn test_build_nested_schema() {
    let store = build_user_schema();
    assert_eq!(
        store.preview(DEFAULT_INDENT),
        r#"{
  "user": {
    "name": "string",
    "address": {
      "city": "string"
    }
  },
  "active": "boolean"
}"#
    );
}

#[test]
fn test_removing_nested_field_drops_descendants() {
    let mut store = build_user_schema();
    store.remove_field(Some(&[0]), 1);
    assert_eq!(
        store.schema(),
        json!({"user": {"name": "string"}, "active": "boolean"})
    );

    store.remove_field(None, 0);
    assert_eq!(store.schema(), json!({"active": "boolean"}));
    assert_eq!(store.forest().len(), 1);
}

#[test]
fn test_stale_paths_leave_state_unchanged() {
    let mut store = build_user_schema();
    let before = store.forest().clone();

    store.update(&[0, 1, 4], FieldPatch::default().name("zip"));
    store.add_field(Some(&[3]));
    store.remove_field(Some(&[0, 0]), 0);

    assert_eq!(store.forest(), &before);
}

#[test]
fn test_old_snapshot_survives_edits() {
    let store = build_user_schema();
    let snapshot = store.forest().clone();
    let schema_before = generate(snapshot.fields());

    let mut store = store;
    store.update(&[0, 1, 0], FieldPatch::default().name("town"));
    store.remove_field(None, 1);

    assert_eq!(generate(snapshot.fields()), schema_before);
    assert!(Arc::ptr_eq(
        snapshot.get(&[0, 0]).unwrap(),
        store.forest().get(&[0, 0]).unwrap()
    ));
}

#[test]
fn test_empty_forest_renders_empty_object() {
    let mut store = TreeStore::from_forest(Forest::from_fields([Field::new()]));
    store.remove_field(None, 0);
    assert!(store.forest().is_empty());
    assert_eq!(render_pretty(&store.schema(), DEFAULT_INDENT), "{}");
}

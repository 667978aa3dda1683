pub mod field_editor;
pub mod schema_builder;
pub mod schema_preview;

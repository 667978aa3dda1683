//! # Schema Builder Core
//!
//! State model behind the schema builder editor:
//!
//! - [`field`]: the [`Field`] tree and the [`Forest`] snapshot type
//! - [`store`]: copy-on-write edits addressed by positional paths, and the
//!   [`TreeStore`] that owns the current snapshot
//! - [`projector`]: the pure forest to `name -> type` JSON projection
//!
//! ```
//! use schema_builder_core::{FieldPatch, FieldType, TreeStore};
//!
//! let mut store = TreeStore::new();
//! store.update(&[0], FieldPatch::default().name("user").field_type(FieldType::Nested));
//! store.add_field(Some(&[0]));
//! store.update(&[0, 0], FieldPatch::default().name("age").field_type(FieldType::Number));
//!
//! assert_eq!(store.schema(), serde_json::json!({"user": {"age": "number"}}));
//! ```

pub mod error;
pub mod field;
pub mod projector;
pub mod store;

pub use error::{ParseFieldTypeError, PathError};
pub use field::{Field, FieldId, FieldPatch, FieldType, Forest};
pub use projector::{generate, generate_value, render_pretty, DEFAULT_INDENT, UNNAMED};
pub use store::TreeStore;

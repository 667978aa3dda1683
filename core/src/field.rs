//! Field tree data model
//!
//! A [`Forest`] is the ordered list of top-level [`Field`]s. Nodes are shared
//! through [`Arc`] so that every edit can produce a new snapshot while the
//! untouched subtrees stay shared with the previous one.

use crate::error::{ParseFieldTypeError, PathError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static NEXT_FIELD_ID: AtomicU32 = AtomicU32::new(1);

/// Render key for a field. Never used for addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    pub fn next() -> Self {
        Self(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Primitive type of a field, or `Nested` for an object with children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
    Nested,
}

impl FieldType {
    /// All variants in selector order
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Nested,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Nested => "nested",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "nested" => Ok(FieldType::Nested),
            other => Err(ParseFieldTypeError(other.to_string())),
        }
    }
}

/// One node of the editable schema tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(skip, default = "FieldId::next")]
    pub id: FieldId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Only meaningful when `field_type` is `Nested`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<Arc<Field>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Arc<Field>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Arc<Field>>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// A blank `string` field with no children
    pub fn new() -> Self {
        Self {
            id: FieldId::next(),
            name: String::new(),
            field_type: FieldType::String,
            children: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            ..Self::new()
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Field>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    pub fn is_nested(&self) -> bool {
        self.field_type == FieldType::Nested
    }

    /// True when both trees have the same names, types and children,
    /// ignoring render keys
    pub fn same_shape(&self, other: &Field) -> bool {
        self.name == other.name
            && self.field_type == other.field_type
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_shape(b))
    }
}

/// Partial replacement for a field; `None` keeps the current value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub children: Option<Vec<Arc<Field>>>,
}

impl FieldPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn children(mut self, children: Vec<Arc<Field>>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_type.is_none() && self.children.is_none()
    }

    pub(crate) fn apply(self, field: &mut Field) {
        if let Some(name) = self.name {
            field.name = name;
        }
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(children) = self.children {
            field.children = children;
        }
    }
}

/// Root-level ordered sequence of fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    pub(crate) fields: Vec<Arc<Field>>,
}

impl Default for Forest {
    /// The initial editor state: a single blank field
    fn default() -> Self {
        Self::from_fields([Field::new()])
    }
}

impl Forest {
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn fields(&self) -> &[Arc<Field>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve a path read-only
    pub fn get(&self, path: &[usize]) -> Option<&Arc<Field>> {
        let (last, ancestors) = path.split_last()?;
        let mut current = &self.fields;
        for &index in ancestors {
            current = &current.get(index)?.children;
        }
        current.get(*last)
    }

    pub fn same_shape(&self, other: &Forest) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.same_shape(b))
    }
}

/// Walk `path` copy-on-write and return the addressed field.
///
/// Every node along the way is made unique with [`Arc::make_mut`], so nodes
/// still referenced by an older snapshot are shallow-cloned and everything
/// off the path stays shared.
pub(crate) fn resolve_mut<'a>(
    mut fields: &'a mut Vec<Arc<Field>>,
    path: &[usize],
) -> Result<&'a mut Field, PathError> {
    let (last, ancestors) = path.split_last().ok_or(PathError::Empty)?;
    for (depth, &index) in ancestors.iter().enumerate() {
        let len = fields.len();
        let node = fields.get_mut(index).ok_or_else(|| PathError::OutOfRange {
            path: path.to_vec(),
            depth,
            index,
            len,
        })?;
        fields = &mut Arc::make_mut(node).children;
    }
    let len = fields.len();
    fields
        .get_mut(*last)
        .map(Arc::make_mut)
        .ok_or_else(|| PathError::OutOfRange {
            path: path.to_vec(),
            depth: ancestors.len(),
            index: *last,
            len,
        })
}

//! Tree Store: copy-on-write mutations addressed by positional paths
//!
//! Every operation leaves `self` untouched and returns a new [`Forest`]. Nodes
//! along the edited path are shallow-copied; all other subtrees are shared
//! with the previous snapshot.
//!
//! The `try_*` variants report an unresolvable path as a [`PathError`]. The
//! plain variants treat it as a no-op and log a warning, which is what the
//! editor wants when an input event arrives for a row that no longer exists.

use crate::error::PathError;
use crate::field::{resolve_mut, Field, FieldPatch, Forest};
use crate::projector;
use serde_json::Value;
use std::sync::Arc;

impl Forest {
    /// Replace the field at `path` with `{...current, ...patch}`
    pub fn try_update(&self, path: &[usize], patch: FieldPatch) -> Result<Forest, PathError> {
        let mut next = self.clone();
        let field = resolve_mut(&mut next.fields, path)?;
        patch.apply(field);
        Ok(next)
    }

    /// Append a blank field to the root (`None`) or to the children of the
    /// field at `parent`. The parent's type is not checked.
    pub fn try_add_field(&self, parent: Option<&[usize]>) -> Result<Forest, PathError> {
        let mut next = self.clone();
        siblings_mut(&mut next.fields, parent)?.push(Arc::new(Field::new()));
        Ok(next)
    }

    /// Delete the field at `index` under `parent` (or the root), together with
    /// its whole subtree
    pub fn try_remove_field(
        &self,
        parent: Option<&[usize]>,
        index: usize,
    ) -> Result<Forest, PathError> {
        let mut next = self.clone();
        let siblings = siblings_mut(&mut next.fields, parent)?;
        if index >= siblings.len() {
            let mut path = parent.map(<[usize]>::to_vec).unwrap_or_default();
            path.push(index);
            return Err(PathError::OutOfRange {
                depth: path.len() - 1,
                path,
                index,
                len: siblings.len(),
            });
        }
        siblings.remove(index);
        Ok(next)
    }

    pub fn update(&self, path: &[usize], patch: FieldPatch) -> Forest {
        self.try_update(path, patch)
            .unwrap_or_else(|e| self.stale("update", e))
    }

    pub fn add_field(&self, parent: Option<&[usize]>) -> Forest {
        self.try_add_field(parent)
            .unwrap_or_else(|e| self.stale("add_field", e))
    }

    pub fn remove_field(&self, parent: Option<&[usize]>, index: usize) -> Forest {
        self.try_remove_field(parent, index)
            .unwrap_or_else(|e| self.stale("remove_field", e))
    }

    fn stale(&self, operation: &str, error: PathError) -> Forest {
        log::warn!("Ignoring {} on stale path: {}", operation, error);
        self.clone()
    }
}

fn siblings_mut<'a>(
    fields: &'a mut Vec<Arc<Field>>,
    parent: Option<&[usize]>,
) -> Result<&'a mut Vec<Arc<Field>>, PathError> {
    match parent {
        None => Ok(fields),
        Some(path) => Ok(&mut resolve_mut(fields, path)?.children),
    }
}

/// Owner of the current forest snapshot.
///
/// Operations are applied in the order they are called; each one swaps in
/// the snapshot produced by the corresponding [`Forest`] method.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeStore {
    forest: Forest,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_forest(forest: Forest) -> Self {
        Self { forest }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn update(&mut self, path: &[usize], patch: FieldPatch) -> &Forest {
        log::debug!("update {:?} with {:?}", path, patch);
        self.forest = self.forest.update(path, patch);
        &self.forest
    }

    pub fn add_field(&mut self, parent: Option<&[usize]>) -> &Forest {
        log::debug!("add_field under {:?}", parent);
        self.forest = self.forest.add_field(parent);
        &self.forest
    }

    pub fn remove_field(&mut self, parent: Option<&[usize]>, index: usize) -> &Forest {
        log::debug!("remove_field {} under {:?}", index, parent);
        self.forest = self.forest.remove_field(parent, index);
        &self.forest
    }

    /// Projection of the current snapshot
    pub fn schema(&self) -> Value {
        projector::generate(self.forest.fields())
    }

    /// Projection of the current snapshot as pretty JSON text
    pub fn preview(&self, indent: usize) -> String {
        projector::render_pretty(&self.schema(), indent)
    }
}

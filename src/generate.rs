//! Headless projection of a forest document

use anyhow::Context;
use schema_builder_core::{generate, generate_value, render_pretty, Forest};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Project a forest document and render it with `indent`.
///
/// In strict mode the document must deserialize into a [`Forest`]; otherwise
/// it is projected leniently and anything that is not a field list gives `{}`.
pub fn project_document(document: &str, strict: bool, indent: usize) -> anyhow::Result<String> {
    let schema = if strict {
        let forest: Forest = serde_json::from_str(document).context("Invalid forest document")?;
        tracing::debug!("Projecting {} top-level fields", forest.len());
        generate(forest.fields())
    } else {
        let value: Value = serde_json::from_str(document).context("Input is not valid JSON")?;
        generate_value(&value)
    };
    Ok(render_pretty(&schema, indent))
}

/// Read the document from `input`, or stdin for `None` / `-`
pub fn read_document(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

use crate::models::PostRecord;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::Path;

/// Writes the page, creating its directory first. An existing file at the
/// same path is overwritten.
pub fn write_post(path: &Path, html: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote post page");
    Ok(())
}

/// Reads the listing index. A missing file is an empty index; a file that
/// can't be read or isn't a JSON array is an error.
pub fn load_index(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_index(path)
}

fn read_index(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&contents)? {
        Value::Array(entries) => Ok(entries),
        other => Err(anyhow!("expected a JSON array, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug)]
pub struct IndexUpdate {
    /// Entry count after the rewrite.
    pub entries: usize,
    /// Why the previous index was thrown away, if it was.
    pub discarded: Option<anyhow::Error>,
}

/// Puts `record` at the front of the index and rewrites the whole file. An
/// unreadable index is replaced by a fresh one holding only `record`.
pub fn update_index(path: &Path, record: &PostRecord) -> Result<IndexUpdate> {
    let (mut entries, discarded) = match load_index(path) {
        Ok(entries) => (entries, None),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding unreadable index");
            (Vec::new(), Some(e))
        }
    };
    entries.insert(0, serde_json::to_value(record)?);

    let serialized = serde_json::to_string_pretty(&entries)?;
    std::fs::write(path, serialized).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "updated post index");
    Ok(IndexUpdate {
        entries: entries.len(),
        discarded,
    })
}

//! Loading JSON documents from disk.

use std::path::Path;

use colltools::Value;

/// Reads and parses the JSON document at `path`.
pub fn load(path: &Path) -> colltools::Result<Value> {
    let text = std::fs::read_to_string(path)?;
    let value = Value::from_json_str(&text)?;
    tracing::debug!(path = %path.display(), kind = value.type_name(), "loaded document");
    Ok(value)
}

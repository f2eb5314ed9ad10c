//! Loading and saving the runtime config document.

use crate::atomic::write_json_atomic;
use crate::error::StorageError;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{info, warn};

/// Read the runtime config; a missing or unparsable file yields an empty object.
pub fn load_runtime_config(path: &Path) -> Value {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "Runtime config not found; starting from an empty document");
            return Value::Object(Map::new());
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read runtime config; starting from an empty document");
            return Value::Object(Map::new());
        }
    };

    match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Runtime config is not valid JSON; starting from an empty document");
            Value::Object(Map::new())
        }
    }
}

/// Persist the runtime config as pretty JSON, replacing the file atomically.
pub fn save_runtime_config(path: &Path, doc: &Value) -> Result<(), StorageError> {
    write_json_atomic(path, doc)
}

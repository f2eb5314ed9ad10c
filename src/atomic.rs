//! Atomic JSON persistence: write to a sibling temp file, then rename over the target.

use crate::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize `value` as pretty JSON and replace `path` atomically.
///
/// Parent directories are created as needed. The file ends with a newline.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
    }

    let mut serialized = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    serialized.push(b'\n');

    let temp_path = temp_path_for(path)?;
    fs::write(&temp_path, &serialized).map_err(|e| StorageError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StorageError::io(path, e)
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> Result<std::path::PathBuf, StorageError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StorageError::InvalidPath(format!("{} has no file name", path.display())))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SyncError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &SyncError) -> String {
    match e {
        SyncError::VaultPathMissing | SyncError::VaultNotFound(_) => e.to_string(),
        _ => format!("Error: {}", e),
    }
}

//! Recursive discovery of agent folders.

use super::record::AgentRecord;
use super::{CONFIG_FILE, EXCLUDED_DIRS, HEARTBEAT_FILE, SOUL_FILE};
use crate::descriptor::{read_document, Document};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks an agents root and yields one record per qualifying folder.
pub struct AgentDiscovery {
    root: PathBuf,
}

impl AgentDiscovery {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directories below the root that traversal visits, in walk order.
    ///
    /// Reserved folders and everything beneath them are skipped. A missing root
    /// yields an empty list.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return Vec::new();
        }

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || is_traversable(entry));

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        dirs
    }

    /// Discover every agent folder under the root.
    ///
    /// A folder qualifies when it holds SOUL.md, CONFIG.md or HEARTBEAT.md.
    /// Nested qualifying folders are independent agents.
    pub fn discover(&self) -> Vec<AgentRecord> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "Agents root does not exist");
            return Vec::new();
        }

        self.candidate_dirs()
            .into_iter()
            .filter_map(|dir| load_agent(&dir))
            .collect()
    }
}

/// Discover agents under `root`.
pub fn discover_agents(root: &Path) -> Vec<AgentRecord> {
    AgentDiscovery::new(root.to_path_buf()).discover()
}

/// Dot-prefixed and housekeeping folder names are never traversed.
pub fn is_reserved_dir_name(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn is_traversable(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir() || !is_reserved_dir_name(entry.file_name())
}

fn load_agent(dir: &Path) -> Option<AgentRecord> {
    let soul_path = dir.join(SOUL_FILE);
    let config_path = dir.join(CONFIG_FILE);
    let heartbeat_path = dir.join(HEARTBEAT_FILE);

    if !(soul_path.is_file() || config_path.is_file() || heartbeat_path.is_file()) {
        return None;
    }

    let record = AgentRecord::from_documents(
        dir,
        load_descriptor(&soul_path),
        load_descriptor(&config_path),
        load_descriptor(&heartbeat_path),
    );
    debug!(
        agent_id = %record.id,
        dir = %dir.display(),
        status = %record.status,
        "Discovered agent"
    );
    Some(record)
}

fn load_descriptor(path: &Path) -> Option<Document> {
    if !path.is_file() {
        return None;
    }
    match read_document(path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read descriptor");
            None
        }
    }
}

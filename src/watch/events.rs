//! Watch configuration, event filtering, and the debounce state machine.

use crate::config::SyncContext;
use notify::{Event, EventKind};
use std::path::Path;
use std::time::{Duration, Instant};

/// Editor and atomic-write droppings that never warrant a pass.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/*.swp", "**/*.tmp", "**/.DS_Store", "**/4913"];

/// Watch mode configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Quiet period after the last event before a pass runs
    pub debounce: Duration,
    /// Ignore patterns (`**/<name glob>` or a full-path glob with one `*`)
    pub ignore_patterns: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(2000),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl WatchConfig {
    /// Config for a resolved context; the manifest the pass writes is ignored.
    pub fn for_context(ctx: &SyncContext) -> Self {
        let mut config = Self {
            debounce: ctx.debounce,
            ..Self::default()
        };
        if let Some(name) = ctx.manifest_path.file_name() {
            config
                .ignore_patterns
                .push(format!("**/{}", name.to_string_lossy()));
        }
        config
    }

    /// Whether `event` should (re)arm the debounce deadline.
    pub fn is_relevant(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        // Rescan notices carry no paths and still count.
        event.paths.is_empty() || event.paths.iter().any(|p| !self.should_ignore(p))
    }

    pub fn should_ignore(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.ignore_patterns
            .iter()
            .any(|pattern| matches_pattern(&path_str, &file_name, pattern))
    }
}

/// `**/<glob>` matches the file name at any depth; anything else matches the whole path.
fn matches_pattern(path: &str, file_name: &str, pattern: &str) -> bool {
    let pattern = pattern.replace('\\', "/");
    match pattern.strip_prefix("**/") {
        Some(name_glob) => glob_match(file_name, name_glob),
        None => glob_match(path, &pattern),
    }
}

/// Glob with at most one `*`; further stars are matched literally.
fn glob_match(text: &str, glob: &str) -> bool {
    match glob.split_once('*') {
        Some((prefix, suffix)) => {
            text.len() >= prefix.len() + suffix.len()
                && text.starts_with(prefix)
                && text.ends_with(suffix)
        }
        None => text == glob,
    }
}

/// Debounce state: idle, or waiting for a single deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    Pending { deadline: Instant },
}

impl DebounceState {
    /// Arm or re-arm the deadline.
    pub fn on_event(&mut self, now: Instant, delay: Duration) {
        *self = DebounceState::Pending {
            deadline: now + delay,
        };
    }

    /// Time left until the deadline, or `None` when idle.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            DebounceState::Idle => None,
            DebounceState::Pending { deadline } => Some(deadline.saturating_duration_since(now)),
        }
    }

    /// If the deadline has passed, return to idle and report `true`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match *self {
            DebounceState::Pending { deadline } if now >= deadline => {
                *self = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DebounceState::Pending { .. })
    }
}

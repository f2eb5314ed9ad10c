//! Watch daemon and directory subscriptions.

use super::events::{DebounceState, WatchConfig};
use crate::agent::AgentDiscovery;
use crate::config::SyncContext;
use crate::error::SyncError;
use crate::sync::run_pass;
use notify::{RecursiveMode, Watcher};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Upper bound on a single wait so a cleared running flag is noticed.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Directories currently holding a non-recursive watch.
#[derive(Debug, Default)]
pub struct Subscriptions {
    watched: BTreeSet<PathBuf>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.watched.contains(dir)
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Re-scan `root` and subscribe every directory not yet watched.
    ///
    /// Directories that no longer exist are forgotten first, so a folder that is
    /// deleted and recreated gets a fresh watch. While `root` itself is missing
    /// its parent is watched instead, so the root's creation is still noticed.
    /// Returns the number of new subscriptions.
    pub fn refresh<F>(&mut self, root: &Path, mut subscribe: F) -> usize
    where
        F: FnMut(&Path) -> Result<(), notify::Error>,
    {
        self.watched.retain(|dir| dir.is_dir());

        let mut targets = Vec::new();
        if root.is_dir() {
            targets.push(root.to_path_buf());
            targets.extend(AgentDiscovery::new(root.to_path_buf()).candidate_dirs());
        } else if let Some(parent) = root.parent().filter(|p| p.is_dir()) {
            warn!(root = %root.display(), "Agents root missing; watching its parent");
            targets.push(parent.to_path_buf());
        }

        let mut added = 0;
        for dir in targets {
            if self.watched.contains(&dir) {
                continue;
            }
            match subscribe(&dir) {
                Ok(()) => {
                    debug!(dir = %dir.display(), "Watching directory");
                    self.watched.insert(dir);
                    added += 1;
                }
                Err(e) => warn!(dir = %dir.display(), error = %e, "Failed to watch directory"),
            }
        }
        added
    }
}

/// Watch mode daemon
pub struct WatchDaemon {
    ctx: SyncContext,
    config: WatchConfig,
    running: Arc<RwLock<bool>>,
}

impl WatchDaemon {
    pub fn new(ctx: SyncContext, config: WatchConfig) -> Self {
        Self {
            ctx,
            config,
            running: Arc::new(RwLock::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        *self.running.read()
    }

    /// Ask the loop to exit at its next wake-up.
    pub fn stop(&self) {
        *self.running.write() = false;
    }

    /// Run the initial pass, then watch until stopped.
    ///
    /// Pass failures are logged and never end the loop. Only failing to create
    /// the watcher backend is an error.
    pub fn start(&self) -> Result<(), SyncError> {
        *self.running.write() = true;

        self.run_pass_logged();

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            // The receiver only goes away when the loop has exited.
            let _ = tx.send(res);
        })?;

        let mut subscriptions = Subscriptions::new();
        subscriptions.refresh(&self.ctx.agents_root, |dir| {
            watcher.watch(dir, RecursiveMode::NonRecursive)
        });
        info!(
            root = %self.ctx.agents_root.display(),
            directories = subscriptions.len(),
            debounce_ms = self.config.debounce.as_millis() as u64,
            "Watching agents"
        );

        let mut state = DebounceState::Idle;
        loop {
            if !*self.running.read() {
                break;
            }

            let wait = state
                .remaining(Instant::now())
                .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));
            match rx.recv_timeout(wait) {
                Ok(Ok(event)) => {
                    if self.config.is_relevant(&event) {
                        debug!(kind = ?event.kind, paths = ?event.paths, "Change detected");
                        state.on_event(Instant::now(), self.config.debounce);
                    }
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Watch error");
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watcher channel disconnected");
                    break;
                }
            }

            if state.take_due(Instant::now()) {
                self.run_pass_logged();
                let added = subscriptions.refresh(&self.ctx.agents_root, |dir| {
                    watcher.watch(dir, RecursiveMode::NonRecursive)
                });
                if added > 0 {
                    info!(added, total = subscriptions.len(), "Subscribed new directories");
                }
            }
        }

        *self.running.write() = false;
        info!("Watch stopped");
        Ok(())
    }

    fn run_pass_logged(&self) {
        match run_pass(&self.ctx) {
            Ok(report) => info!(
                total = report.total_count(),
                active = report.active_count(),
                config_written = report.config_written,
                "Sync pass complete"
            ),
            Err(e) => error!(error = %e, "Sync pass failed"),
        }
    }
}

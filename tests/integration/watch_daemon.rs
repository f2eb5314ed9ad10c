//! Integration tests for watch mode

use crate::integration::test_utils::VaultFixture;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use vaultsync::manifest::SyncManifest;
use vaultsync::watch::{WatchConfig, WatchDaemon};

fn wait_for<F: Fn() -> bool>(timeout: Duration, condition: F) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    condition()
}

fn total_count(fixture: &VaultFixture) -> Option<usize> {
    SyncManifest::load(&fixture.vault().join(".sync-manifest.json"))
        .ok()
        .map(|m| m.total_count)
}

#[test]
fn test_daemon_resyncs_after_change_and_stops() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("first/SOUL.md", "---\nstatus: active\n---\nFirst");
    let ctx = fixture.context_with_debounce(Duration::from_millis(100));
    let config = WatchConfig::for_context(&ctx);

    let daemon = Arc::new(WatchDaemon::new(ctx, config));
    let worker = Arc::clone(&daemon);
    let handle = thread::spawn(move || worker.start());

    assert!(wait_for(Duration::from_secs(5), || total_count(&fixture) == Some(1)));
    // Give the daemon time to install its watches after the initial pass.
    thread::sleep(Duration::from_millis(300));

    fixture.write_agent_file("second/SOUL.md", "---\nstatus: active\n---\nSecond");
    assert!(wait_for(Duration::from_secs(10), || total_count(&fixture) == Some(2)));

    // A file in the new folder is only seen once that folder is subscribed.
    thread::sleep(Duration::from_millis(300));
    fixture.write_agent_file("second/CONFIG.md", "---\ntier: core\n---\n");
    assert!(wait_for(Duration::from_secs(10), || {
        SyncManifest::load(&fixture.vault().join(".sync-manifest.json"))
            .map(|m| m.agents.iter().any(|a| a.id == "second" && a.has_config))
            .unwrap_or(false)
    }));

    assert!(daemon.is_running());
    daemon.stop();
    let result = handle.join().expect("watch thread panicked");
    assert!(result.is_ok());
    assert!(!daemon.is_running());
}

#[test]
fn test_manifest_is_ignored_by_default_config() {
    let fixture = VaultFixture::new();
    let config = WatchConfig::for_context(&fixture.context());
    assert!(config.should_ignore(&fixture.vault().join(".sync-manifest.json")));
    assert!(config.should_ignore(&fixture.vault().join(".sync-manifest.json.tmp")));
    assert!(!config.should_ignore(&fixture.agents().join("foo/SOUL.md")));
}

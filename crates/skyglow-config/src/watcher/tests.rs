//! Tests for the file watcher.

use super::*;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_skyglow_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    assert!(ConfigWatcher::new(PathBuf::from("/")).is_err());
}

#[tokio::test]
async fn watcher_signals_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# v1").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    let (tx, mut rx) = broadcast::channel(4);
    let task = tokio::spawn(async move { watcher.watch(tx).await });

    // Let the watcher register before writing.
    tokio::time::sleep(Duration::from_millis(200)).await;
    std::fs::write(&path, "# v2").unwrap();

    let signal = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(matches!(signal, Ok(Ok(()))));

    task.abort();
}

//! Tests for the reload manager.

use super::*;
use skyglow_common::ThemeMode;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_skyglow_reload_test.toml");
    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config, crate::schema::SkyglowConfig::default());
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[theme]
default_mode = "light"
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.theme.default_mode, ThemeMode::Light);
    assert_eq!(config.sky.refresh_interval_secs, 30); // default
}

#[tokio::test]
async fn publishes_reloaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sky]\nrefresh_interval_secs = 30\n").unwrap();

    let (_, mut rx) = ReloadManager::start(path.clone()).await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    std::fs::write(&path, "[sky]\nrefresh_interval_secs = 90\n").unwrap();

    let changed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
    assert!(matches!(changed, Ok(Ok(()))));
    assert_eq!(rx.borrow().sky.refresh_interval_secs, 90);
}

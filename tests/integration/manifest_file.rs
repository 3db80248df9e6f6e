//! Integration tests for the TOML application manifest accessor.

use propgate::manifest::{ManifestAccessor, TomlManifestFile};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_instances_share_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("App.toml");

    let writer = TomlManifestFile::new(&path);
    writer.set_startup_entry_point("Alpha.xaml").await.unwrap();

    let reader = TomlManifestFile::new(&path);
    assert_eq!(
        reader.startup_entry_point().await.unwrap().as_deref(),
        Some("Alpha.xaml")
    );
}

#[tokio::test]
async fn test_concurrent_writes_on_one_instance_both_land() {
    let dir = TempDir::new().unwrap();
    let manifest = Arc::new(TomlManifestFile::new(dir.path().join("App.toml")));

    let startup_writer = {
        let manifest = manifest.clone();
        tokio::spawn(async move { manifest.set_startup_entry_point("Alpha.xaml").await })
    };
    let shutdown_writer = {
        let manifest = manifest.clone();
        tokio::spawn(async move { manifest.set_shutdown_behavior("OnLastWindowClose").await })
    };

    startup_writer.await.unwrap().unwrap();
    shutdown_writer.await.unwrap().unwrap();

    assert_eq!(
        manifest.startup_entry_point().await.unwrap().as_deref(),
        Some("Alpha.xaml")
    );
    assert_eq!(
        manifest.shutdown_behavior().await.unwrap().as_deref(),
        Some("OnLastWindowClose")
    );
}

#[tokio::test]
async fn test_overwrite_replaces_only_the_target_key() {
    let dir = TempDir::new().unwrap();
    let manifest = TomlManifestFile::new(dir.path().join("App.toml"));

    manifest.set_startup_entry_point("Alpha.xaml").await.unwrap();
    manifest
        .set_shutdown_behavior("OnMainWindowClose")
        .await
        .unwrap();
    manifest.set_startup_entry_point("Beta.xaml").await.unwrap();

    assert_eq!(
        manifest.startup_entry_point().await.unwrap().as_deref(),
        Some("Beta.xaml")
    );
    assert_eq!(
        manifest.shutdown_behavior().await.unwrap().as_deref(),
        Some("OnMainWindowClose")
    );
}

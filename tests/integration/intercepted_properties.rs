//! End-to-end interception against a project directory: project file,
//! application manifest, and the windowed-app provider wired together.

use propgate::intercept::WindowedAppValueProvider;
use propgate::manifest::{ManifestAccessor, TomlManifestFile};
use propgate::project::{InterceptedProperties, ProjectStore};
use propgate::properties::{SHUTDOWN_BEHAVIOR_PROPERTY, STARTUP_ENTRY_POINT_PROPERTY};
use std::sync::Arc;
use tempfile::TempDir;

fn write_project(dir: &TempDir, feature_enabled: &str, output_kind: &str) {
    std::fs::write(
        dir.path().join("project.toml"),
        format!(
            "[properties]\nFeatureEnabled = \"{}\"\nOutputKind = \"{}\"\n",
            feature_enabled, output_kind
        ),
    )
    .unwrap();
}

fn write_manifest(dir: &TempDir, startup: &str, shutdown: &str) {
    std::fs::write(
        dir.path().join("App.toml"),
        format!(
            "[application]\nstartup_entry_point = \"{}\"\nshutdown_behavior = \"{}\"\n",
            startup, shutdown
        ),
    )
    .unwrap();
}

fn build_properties(dir: &TempDir) -> InterceptedProperties {
    let store = ProjectStore::load(dir.path().join("project.toml")).unwrap();
    let manifest = Arc::new(TomlManifestFile::new(dir.path().join("App.toml")));
    let provider = Arc::new(WindowedAppValueProvider::new(manifest));
    InterceptedProperties::new(store).with_provider(provider)
}

#[tokio::test]
async fn test_gated_project_reads_from_the_manifest() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "true", "WinExe");
    write_manifest(&dir, "Alpha.xaml", "OnLastWindowClose");

    let properties = build_properties(&dir);

    assert_eq!(
        properties
            .get_value(STARTUP_ENTRY_POINT_PROPERTY)
            .await
            .unwrap()
            .as_deref(),
        Some("Alpha.xaml")
    );
    assert_eq!(
        properties
            .get_value(SHUTDOWN_BEHAVIOR_PROPERTY)
            .await
            .unwrap()
            .as_deref(),
        Some("OnLastWindowClose")
    );
}

#[tokio::test]
async fn test_gated_set_writes_the_manifest_not_the_project_file() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "true", "WinExe");

    let mut properties = build_properties(&dir);
    properties
        .set_value(SHUTDOWN_BEHAVIOR_PROPERTY, "OnExplicitShutdown")
        .await
        .unwrap();

    // The value landed in the manifest.
    let manifest = TomlManifestFile::new(dir.path().join("App.toml"));
    assert_eq!(
        manifest.shutdown_behavior().await.unwrap().as_deref(),
        Some("OnExplicitShutdown")
    );

    // The project file was not touched.
    let project = std::fs::read_to_string(dir.path().join("project.toml")).unwrap();
    assert!(!project.contains("ShutdownBehavior"));
}

#[tokio::test]
async fn test_ungated_project_falls_back_to_stored_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("project.toml"),
        r#"
[properties]
FeatureEnabled = "true"
OutputKind = "Exe"
StartupEntryPoint = "main.rs"
"#,
    )
    .unwrap();
    write_manifest(&dir, "Alpha.xaml", "OnLastWindowClose");

    let properties = build_properties(&dir);

    // Wrong output kind: the manifest value is ignored.
    assert_eq!(
        properties
            .get_value(STARTUP_ENTRY_POINT_PROPERTY)
            .await
            .unwrap()
            .as_deref(),
        Some("main.rs")
    );
}

#[tokio::test]
async fn test_ungated_set_of_delegable_name_persists_nothing() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "false", "WinExe");
    let before = std::fs::read_to_string(dir.path().join("project.toml")).unwrap();

    let mut properties = build_properties(&dir);
    properties
        .set_value(STARTUP_ENTRY_POINT_PROPERTY, "Alpha.xaml")
        .await
        .unwrap();

    let after = std::fs::read_to_string(dir.path().join("project.toml")).unwrap();
    assert_eq!(before, after);
    assert!(!dir.path().join("App.toml").exists());
}

#[tokio::test]
async fn test_non_delegable_properties_pass_through_the_store() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "true", "WinExe");

    let mut properties = build_properties(&dir);
    properties.set_value("TargetName", "demo-app").await.unwrap();

    assert_eq!(
        properties.get_value("TargetName").await.unwrap().as_deref(),
        Some("demo-app")
    );

    // Persisted in the project file, never in the manifest.
    let project = std::fs::read_to_string(dir.path().join("project.toml")).unwrap();
    assert!(project.contains("TargetName"));
    assert!(!dir.path().join("App.toml").exists());
}

#[tokio::test]
async fn test_gated_project_with_empty_manifest_resolves_absent() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "true", "WinExe");

    let properties = build_properties(&dir);

    assert_eq!(
        properties
            .get_value(STARTUP_ENTRY_POINT_PROPERTY)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_set_then_get_round_trip_through_the_manifest() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "true", "WinExe");

    let mut properties = build_properties(&dir);
    properties
        .set_value(STARTUP_ENTRY_POINT_PROPERTY, "Beta.xaml")
        .await
        .unwrap();

    let resolved = properties
        .resolve(STARTUP_ENTRY_POINT_PROPERTY)
        .await
        .unwrap();
    assert_eq!(resolved.effective.as_deref(), Some("Beta.xaml"));
    assert_eq!(resolved.stored, None);
    assert!(resolved.from_provider);
}

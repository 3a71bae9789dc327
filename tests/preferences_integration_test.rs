use std::sync::Arc;
use tempfile::TempDir;
use trip_cost::domain::ports::SettingsStorage;
use trip_cost::{AppConfig, FileSettingsStorage, Theme, ThemePreferenceStore};

async fn open_in(dir: &TempDir) -> ThemePreferenceStore {
    let storage = FileSettingsStorage::new(dir.path(), "settings");
    ThemePreferenceStore::open(Arc::new(storage)).await.unwrap()
}

#[tokio::test]
async fn test_default_is_light_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_in(&temp_dir).await;

    assert_eq!(store.observe().next().await, Some(false));
    assert!(!temp_dir.path().join("settings.json").exists());
}

#[tokio::test]
async fn test_preference_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let store = open_in(&temp_dir).await;
    store.set_dark_mode(true).await.unwrap();
    drop(store);

    let store = open_in(&temp_dir).await;
    assert_eq!(store.observe().next().await, Some(true));
    assert_eq!(store.theme(), Theme::Dark);
}

#[tokio::test]
async fn test_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_in(&temp_dir).await;
    store.set_theme(Theme::Dark).await.unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["dark_mode"], serde_json::Value::Bool(true));
    assert!(json["updated_at"].is_string());
}

#[tokio::test]
async fn test_unknown_keys_are_preserved() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"dark_mode": true, "language": "ar"}"#,
    )
    .unwrap();

    let store = open_in(&temp_dir).await;
    assert!(store.current());
    store.set_dark_mode(false).await.unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["dark_mode"], serde_json::Value::Bool(false));
    assert_eq!(json["language"], "ar");
}

#[tokio::test]
async fn test_concurrent_writes_last_wins() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_in(&temp_dir).await;

    let mut handles = Vec::new();
    for i in 0..10 {
        handles.push(store.spawn_set_dark_mode(i % 2 == 0));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 記憶體中的值與磁碟上的值必須一致
    let on_disk = FileSettingsStorage::new(temp_dir.path(), "settings")
        .load()
        .await
        .unwrap()
        .dark_mode();
    assert_eq!(store.current(), on_disk);
}

#[tokio::test]
async fn test_store_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let toml_content = format!(
        "[storage]\ndir = \"{}\"\nname = \"prefs\"\n",
        temp_dir.path().display().to_string().replace('\\', "/")
    );
    let config = AppConfig::from_toml_str(&toml_content).unwrap();

    let store = ThemePreferenceStore::open(Arc::new(config.settings_storage()))
        .await
        .unwrap();
    store.set_dark_mode(true).await.unwrap();

    assert!(temp_dir.path().join("prefs.json").exists());
}

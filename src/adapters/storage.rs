use crate::domain::model::SettingsDocument;
use crate::domain::ports::SettingsStorage;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// 以 JSON 檔案保存設定：`<base_path>/<name>.json`
#[derive(Debug, Clone)]
pub struct FileSettingsStorage {
    base_path: PathBuf,
    name: String,
}

impl FileSettingsStorage {
    pub fn new(base_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            name: name.into(),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", self.name))
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", self.name))
    }
}

#[async_trait]
impl SettingsStorage for FileSettingsStorage {
    async fn load(&self) -> Result<SettingsDocument> {
        let path = self.file_path();

        match tokio::fs::read(&path).await {
            Ok(data) => {
                let document: SettingsDocument = serde_json::from_slice(&data)?;
                tracing::debug!("Loaded settings from {}", path.display());
                Ok(document)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(SettingsDocument::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, document: &SettingsDocument) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_path).await?;

        // 先寫暫存檔再 rename，讀取端不會看到寫一半的檔案
        let data = serde_json::to_vec_pretty(document)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &data).await?;
        tokio::fs::rename(&temp_path, self.file_path()).await?;

        tracing::debug!("Saved settings to {}", self.file_path().display());
        Ok(())
    }
}

/// 不落地的設定儲存，給測試與 `--settings-dir` 未指定的暫時工作階段使用
#[derive(Debug, Default)]
pub struct MemorySettingsStorage {
    document: Mutex<SettingsDocument>,
}

impl MemorySettingsStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStorage for MemorySettingsStorage {
    async fn load(&self) -> Result<SettingsDocument> {
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, document: &SettingsDocument) -> Result<()> {
        *self.document.lock().await = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileSettingsStorage::new(temp_dir.path(), "settings");

        let document = storage.load().await.unwrap();
        assert_eq!(document, SettingsDocument::default());
        assert!(!document.dark_mode());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileSettingsStorage::new(temp_dir.path().join("nested"), "settings");

        let document = SettingsDocument::default().with_dark_mode(true);
        storage.save(&document).await.unwrap();

        assert!(storage.file_path().exists());
        assert!(!storage.temp_path().exists());

        let loaded = storage.load().await.unwrap();
        assert!(loaded.dark_mode());
    }

    #[tokio::test]
    async fn test_corrupted_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileSettingsStorage::new(temp_dir.path(), "settings");
        std::fs::write(storage.file_path(), b"{ not json").unwrap();

        assert!(storage.load().await.is_err());
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemorySettingsStorage::new();
        assert!(!storage.load().await.unwrap().dark_mode());

        storage
            .save(&SettingsDocument::default().with_dark_mode(true))
            .await
            .unwrap();
        assert!(storage.load().await.unwrap().dark_mode());
    }
}

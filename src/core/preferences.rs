//! Persisted theme preference with push-based observation.
//!
//! The store is a single observable boolean cell. Subscribers get the current
//! value first and then every change. A write only becomes visible to
//! subscribers after the storage port reports it durable.

use crate::domain::model::{SettingsDocument, Theme};
use crate::domain::ports::SettingsStorage;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

struct Inner {
    storage: Arc<dyn SettingsStorage>,
    sender: watch::Sender<bool>,
    // 同時作為寫入鎖，確保寫入依序完成
    document: Mutex<SettingsDocument>,
}

#[derive(Clone)]
pub struct ThemePreferenceStore {
    inner: Arc<Inner>,
}

impl ThemePreferenceStore {
    /// 從儲存載入目前的設定；沒有資料時 dark_mode 為 false
    pub async fn open(storage: Arc<dyn SettingsStorage>) -> Result<Self> {
        let document = storage.load().await?;
        let dark_mode = document.dark_mode();
        tracing::debug!("Theme preference loaded: dark_mode={}", dark_mode);

        let (sender, _) = watch::channel(dark_mode);

        Ok(Self {
            inner: Arc::new(Inner {
                storage,
                sender,
                document: Mutex::new(document),
            }),
        })
    }

    pub fn observe(&self) -> PreferenceSubscription {
        PreferenceSubscription {
            receiver: self.inner.sender.subscribe(),
            primed: false,
        }
    }

    pub fn current(&self) -> bool {
        *self.inner.sender.borrow()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.current())
    }

    /// 寫入完成後才更新訂閱者看到的值；寫入失敗時值不變
    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let mut document = self.inner.document.lock().await;

        let updated = document.clone().with_dark_mode(enabled);
        self.inner.storage.save(&updated).await?;
        *document = updated;

        let changed = self.inner.sender.send_if_modified(|current| {
            if *current == enabled {
                false
            } else {
                *current = enabled;
                true
            }
        });

        tracing::info!(
            "Theme preference saved: dark_mode={}{}",
            enabled,
            if changed { "" } else { " (unchanged)" }
        );
        Ok(())
    }

    /// 重新讀取儲存（例如被其他程序修改），值有變化時通知訂閱者
    pub async fn reload(&self) -> Result<bool> {
        let mut document = self.inner.document.lock().await;

        let loaded = self.inner.storage.load().await?;
        let dark_mode = loaded.dark_mode();
        *document = loaded;

        let changed = self.inner.sender.send_if_modified(|current| {
            if *current == dark_mode {
                false
            } else {
                *current = dark_mode;
                true
            }
        });

        if changed {
            tracing::info!("Theme preference changed externally: dark_mode={}", dark_mode);
        }
        Ok(changed)
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.set_dark_mode(theme.is_dark()).await
    }

    /// 呼叫端不等待寫入完成（例如對話框立即關閉）
    pub fn spawn_set_dark_mode(&self, enabled: bool) -> JoinHandle<Result<()>> {
        let store = self.clone();
        tokio::spawn(async move {
            let result = store.set_dark_mode(enabled).await;
            if let Err(e) = &result {
                tracing::error!("❌ Failed to persist theme preference: {}", e);
            }
            result
        })
    }
}

impl std::fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("dark_mode", &self.current())
            .finish()
    }
}

/// `observe()` 回傳的訂閱；第一次 `next()` 立即回傳目前值
#[derive(Debug)]
pub struct PreferenceSubscription {
    receiver: watch::Receiver<bool>,
    primed: bool,
}

impl PreferenceSubscription {
    /// 商店被丟棄後回傳 `None`
    pub async fn next(&mut self) -> Option<bool> {
        if !self.primed {
            self.primed = true;
            return Some(*self.receiver.borrow_and_update());
        }

        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

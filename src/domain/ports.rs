use crate::domain::model::SettingsDocument;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 設定儲存的抽象；檔案與記憶體兩種實作見 `adapters::storage`
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// 讀取整份設定文件，不存在時回傳預設值
    async fn load(&self) -> Result<SettingsDocument>;

    /// 持久化整份設定文件，回傳時資料已寫入
    async fn save(&self, document: &SettingsDocument) -> Result<()>;
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 設定儲存中的主題鍵
pub const DARK_MODE_KEY: &str = "dark_mode";

/// 預設的設定儲存名稱
pub const DEFAULT_STORE_NAME: &str = "settings";

/// 三個欄位都成功解析後的行程輸入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripInputs {
    /// km
    pub distance: f64,
    /// km/L
    pub efficiency: f64,
    pub price_per_liter: f64,
}

/// 一次「Calculate」的結果；輸入無效時為空
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostEstimate(Option<f64>);

impl CostEstimate {
    pub fn new(value: Option<f64>) -> Self {
        Self(value)
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected 'light' or 'dark'", other)),
        }
    }
}

/// 磁碟上的設定文件。未知的鍵在寫回時保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SettingsDocument {
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = Some(enabled);
        self.updated_at = Some(Utc::now());
        self
    }
}

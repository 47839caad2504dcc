use crate::error::{DefectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use steel_defect_common::PREDICT_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: PREDICT_URL.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルはデフォルトで置き換える（上書き修復用）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "Config path unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Config unreadable, using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DefectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("steel-defect").join("config.json"))
    }

    /// `http://` か `https://` のURLだけ受け付ける
    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let endpoint = endpoint.trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(DefectError::Config(format!("不正なエンドポイント: {}", endpoint)));
        }
        self.endpoint = endpoint;
        Ok(())
    }

    /// コマンドライン指定があればそちらを優先
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> String {
        override_endpoint
            .map(str::to_string)
            .unwrap_or_else(|| self.endpoint.clone())
    }
}

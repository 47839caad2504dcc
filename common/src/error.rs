//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 送信できなかった、または接続が失敗した
    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx以外のステータス
    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSONだが `results` 配列がない
    #[error("Response has no results array")]
    MissingResults,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

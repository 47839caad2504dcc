use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ファイルが空です: {0}")]
    EmptyImage(String),

    #[error("予測に失敗しました: {0}")]
    PredictionFailed(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DefectError>;

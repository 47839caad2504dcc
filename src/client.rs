//! 予測APIクライアント
//!
//! ブラウザ版と同じく multipart の `file` フィールドで画像を送る。

use crate::error::Result;
use crate::image_file::ImagePayload;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use steel_defect_common::{parse_predict_response, Error, Prediction, UPLOAD_FIELD};

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(endpoint, http))
    }

    /// 設定済みの `reqwest::Client` を使う
    pub fn with_http(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を送信して `results` を返す
    ///
    /// 失敗はすべて共通エラー型で返す（セッションにそのまま渡せる）。
    pub async fn predict(&self, image: &ImagePayload) -> std::result::Result<Vec<Prediction>, Error> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(transport)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(endpoint = %self.endpoint, file = %image.file_name, bytes = image.bytes.len(), "Sending prediction request");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport)?;
        parse_predict_response(&body)
    }
}

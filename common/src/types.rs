//! 予測APIの型定義
//!
//! ブラウザ(WASM)と端末版で共有される:
//! - Prediction: 1クラス分の予測（クラス名 + 信頼度）
//! - PredictResponse: `POST /predict` のレスポンス本体

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 予測エンドポイント（固定）
pub const PREDICT_URL: &str = "http://localhost:8000/predict";

/// multipartで画像を載せるフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// 1クラス分の予測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(class: impl Into<String>, confidence: f64) -> Self {
        Self {
            class: class.into(),
            confidence,
        }
    }
}

/// 予測APIのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub results: Vec<Prediction>,
}

/// レスポンス本文をパースして `results` を取り出す
///
/// 順序はレスポンスのまま（並べ替えない）。
///
/// # Returns
/// * `Err(Error::Json)` - JSONでない、または要素の形が不正
/// * `Err(Error::MissingResults)` - `results` が無い / 配列でない
///
/// # Examples
/// ```
/// use steel_defect_common::parse_predict_response;
///
/// let body = r#"{"results":[{"class":"scratches","confidence":0.87}]}"#;
/// let results = parse_predict_response(body).unwrap();
/// assert_eq!(results[0].class, "scratches");
/// ```
pub fn parse_predict_response(body: &str) -> Result<Vec<Prediction>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.get("results").is_some_and(serde_json::Value::is_array) {
        return Err(Error::MissingResults);
    }
    let response: PredictResponse = serde_json::from_value(value)?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_result() {
        let body = r#"{"results":[{"class":"scratches","confidence":0.87}]}"#;
        let results = parse_predict_response(body).expect("パース失敗");
        assert_eq!(results, vec![Prediction::new("scratches", 0.87)]);
    }

    #[test]
    fn test_parse_keeps_response_order() {
        let body = r#"{"results":[
            {"class":"patches","confidence":0.1},
            {"class":"crazing","confidence":0.7},
            {"class":"inclusion","confidence":0.2}
        ]}"#;
        let results = parse_predict_response(body).expect("パース失敗");
        let classes: Vec<&str> = results.iter().map(|p| p.class.as_str()).collect();
        assert_eq!(classes, vec!["patches", "crazing", "inclusion"]);
    }

    #[test]
    fn test_parse_empty_results() {
        let results = parse_predict_response(r#"{"results":[]}"#).expect("パース失敗");
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_missing_results() {
        let err = parse_predict_response(r#"{"detail":"Not Found"}"#).unwrap_err();
        assert!(matches!(err, Error::MissingResults));
    }

    #[test]
    fn test_parse_results_not_array() {
        let err = parse_predict_response(r#"{"results":"oops"}"#).unwrap_err();
        assert!(matches!(err, Error::MissingResults));
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_predict_response("Internal Server Error").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_malformed_entry() {
        let err = parse_predict_response(r#"{"results":[{"class":"crazing"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_prediction_serializes_class_key() {
        let json = serde_json::to_string(&Prediction::new("inclusion", 0.5)).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"class":"inclusion","confidence":0.5}"#);
    }
}

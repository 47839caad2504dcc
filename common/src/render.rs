//! 結果カードの表示用データ
//!
//! 予測結果1件を、ラベル・バー幅・数値ラベル・説明文に変換する。
//! DOM/端末どちらの描画もここの値だけを使う。

use crate::defects::describe;
use crate::types::Prediction;

/// 描画用の結果カード
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// 大文字のクラス名
    pub label: String,
    /// バーの幅（0..=100 の整数%）
    pub bar_width: u32,
    /// 小数2桁の数値ラベル（例: "87.00%"）
    pub confidence_text: String,
    /// 未知クラスならNone（説明行を出さない）
    pub description: Option<&'static str>,
}

impl ResultCard {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            label: prediction.class.to_uppercase(),
            bar_width: bar_width_percent(prediction.confidence),
            confidence_text: confidence_label(prediction.confidence),
            description: describe(&prediction.class),
        }
    }

    /// CSSの `width` 値
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.bar_width)
    }
}

/// 信頼度 → バー幅（四捨五入、0..=100にクランプ）
pub fn bar_width_percent(confidence: f64) -> u32 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

/// 信頼度 → "87.00%"
pub fn confidence_label(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// レスポンス順のままカード化
pub fn result_cards(predictions: &[Prediction]) -> Vec<ResultCard> {
    predictions.iter().map(ResultCard::from_prediction).collect()
}

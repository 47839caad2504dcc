//! 1回分の予測フロー
//!
//! ブラウザ版と同じ `SessionState` を使い、
//! 画像選択 → 送信 → 完了反映 を順に行う。

use crate::client::PredictClient;
use crate::error::{DefectError, Result};
use crate::image_file::ImagePayload;
use steel_defect_common::{Completion, SessionState};

/// 端末版のセッション
pub type Session = SessionState<ImagePayload>;

/// 送信結果
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    pub completion: Completion,
    /// 失敗時のエラーメッセージ（ログ出力済み）
    pub failure: Option<String>,
}

/// 選択中の画像を送信して結果をセッションへ反映する
///
/// 画像が未選択なら送信せずNone。
pub async fn submit(session: &mut Session, client: &PredictClient) -> Option<SubmitReport> {
    let ticket = session.begin_submission()?;
    let outcome = client.predict(session.payload()?).await;

    let failure = outcome.as_ref().err().map(|e| e.to_string());
    if let Some(message) = &failure {
        tracing::error!(endpoint = %client.endpoint(), error = %message, "Prediction error");
    }

    let completion = session.complete_submission(ticket, outcome);
    tracing::debug!(?completion, phase = session.phase().as_str(), "Submission finished");

    Some(SubmitReport { completion, failure })
}

/// 送信結果を終了ステータス用の `Result` に変換する
///
/// 反映された件数を返す。未送信・失敗・破棄はすべて `PredictionFailed`。
pub fn into_result(report: Option<SubmitReport>) -> Result<usize> {
    let Some(report) = report else {
        return Err(DefectError::PredictionFailed("画像が選択されていません".into()));
    };

    match report.completion {
        Completion::Applied(count) => Ok(count),
        Completion::Failed | Completion::Stale => Err(DefectError::PredictionFailed(
            report.failure.unwrap_or_else(|| "応答が破棄されました".into()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_returns_count() {
        let report = SubmitReport {
            completion: Completion::Applied(3),
            failure: None,
        };
        assert_eq!(into_result(Some(report)).expect("失敗扱いになった"), 3);
    }

    #[test]
    fn test_failed_carries_message() {
        let report = SubmitReport {
            completion: Completion::Failed,
            failure: Some("Unexpected status: 503".into()),
        };
        match into_result(Some(report)) {
            Err(DefectError::PredictionFailed(message)) => assert!(message.contains("503")),
            other => panic!("PredictionFailedではない: {:?}", other),
        }
    }

    #[test]
    fn test_stale_is_failure() {
        let report = SubmitReport {
            completion: Completion::Stale,
            failure: None,
        };
        assert!(matches!(
            into_result(Some(report)),
            Err(DefectError::PredictionFailed(_))
        ));
    }

    #[test]
    fn test_nothing_submitted_is_failure() {
        assert!(matches!(into_result(None), Err(DefectError::PredictionFailed(_))));
    }
}

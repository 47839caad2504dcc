//! 画面セッションの状態
//!
//! 選択画像・プレビュー・予測結果・各フラグを1つの構造体で持ち、
//! 遷移はすべてここのメソッド経由で行う。
//!
//! 状態遷移:
//! Idle → ImageLoaded → Submitting → (ResultsReady | 失敗でImageLoadedに戻る)
//! 画像の再選択はどの状態からでも ImageLoaded に戻し、送信中の結果は無効になる。

use crate::error::Error;
use crate::types::Prediction;

/// 画像選択ごとの世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

/// 送信1回分の識別子
///
/// 現在のチケットと一致する完了だけが結果を反映できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    image: ImageId,
    seq: u64,
}

/// 選択中の画像
#[derive(Debug, Clone)]
pub struct SelectedImage<I> {
    pub id: ImageId,
    pub payload: I,
}

/// 表示フェーズ（フラグから導出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageLoaded,
    Submitting,
    ResultsReady,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ImageLoaded => "image-loaded",
            Phase::Submitting => "submitting",
            Phase::ResultsReady => "results-ready",
        }
    }
}

/// 送信完了の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 結果を反映した（件数）
    Applied(usize),
    /// 失敗。結果は未設定のまま
    Failed,
    /// 古いチケット。何も変更しない
    Stale,
}

/// セッション状態
///
/// `I` は画像の実体（ブラウザでは `web_sys::File`）。
#[derive(Debug, Clone)]
pub struct SessionState<I> {
    image: Option<SelectedImage<I>>,
    preview: Option<String>,
    results: Option<Vec<Prediction>>,
    in_flight: Option<SubmissionTicket>,
    zoom_open: bool,
    drag_active: bool,
    next_image: u64,
    next_submission: u64,
}

impl<I> Default for SessionState<I> {
    fn default() -> Self {
        Self {
            image: None,
            preview: None,
            results: None,
            in_flight: None,
            zoom_open: false,
            drag_active: false,
            next_image: 0,
            next_submission: 0,
        }
    }
}

impl<I> SessionState<I> {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // 画像取得
    // =============================================

    /// 画像を選択する
    ///
    /// 前の結果とプレビューを消し、送信中のチケットを無効にする。
    /// プレビューは `preview_ready` で後から届く。
    pub fn select_image(&mut self, payload: I) -> ImageId {
        self.next_image += 1;
        let id = ImageId(self.next_image);
        self.image = Some(SelectedImage { id, payload });
        self.preview = None;
        self.results = None;
        self.in_flight = None;
        self.zoom_open = false;
        self.drag_active = false;
        id
    }

    /// プレビューのデコード完了
    ///
    /// 別の画像が選ばれた後に届いたものは捨てる。
    pub fn preview_ready(&mut self, id: ImageId, data_url: String) -> bool {
        if self.current_image_id() != Some(id) {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    // =============================================
    // 送信
    // =============================================

    /// 送信を開始する
    ///
    /// 画像がなければ何もせずNone。
    /// 送信中の再送信は止めないが、古い方のチケットは無効になる。
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        let image = self.current_image_id()?;
        self.next_submission += 1;
        let ticket = SubmissionTicket {
            image,
            seq: self.next_submission,
        };
        self.in_flight = Some(ticket);
        self.results = None;
        Some(ticket)
    }

    /// 送信結果を反映する
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<Vec<Prediction>, Error>,
    ) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        self.in_flight = None;
        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = Some(results);
                Completion::Applied(count)
            }
            Err(_) => Completion::Failed,
        }
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        self.in_flight == Some(ticket) && self.current_image_id() == Some(ticket.image)
    }

    // =============================================
    // ズーム
    // =============================================

    /// プレビューがなければ開かない
    pub fn open_zoom(&mut self) -> bool {
        if self.preview.is_none() {
            return false;
        }
        self.zoom_open = true;
        true
    }

    pub fn close_zoom(&mut self) {
        self.zoom_open = false;
    }

    // =============================================
    // 参照
    // =============================================

    pub fn payload(&self) -> Option<&I> {
        self.image.as_ref().map(|i| &i.payload)
    }

    pub fn current_image_id(&self) -> Option<ImageId> {
        self.image.as_ref().map(|i| i.id)
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn results(&self) -> Option<&[Prediction]> {
        self.results.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_predict(&self) -> bool {
        self.image.is_some()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// オーバーレイを描画するか
    pub fn overlay_visible(&self) -> bool {
        self.zoom_open && self.preview.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Submitting
        } else if self.results.is_some() {
            Phase::ResultsReady
        } else if self.image.is_some() {
            Phase::ImageLoaded
        } else {
            Phase::Idle
        }
    }
}

//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, File};
use steel_defect_common::{Completion, SessionState};

use crate::api::predict;
use crate::components::{
    action_buttons::ActionButtons,
    header::Header,
    loading_spinner::LoadingSpinner,
    particles::Particles,
    result_list::ResultList,
    upload_area::UploadArea,
    zoom_overlay::ZoomOverlay,
};
use crate::preview::read_as_data_url;

/// ブラウザ側のセッション（画像実体は `File`）
pub type Session = SessionState<File>;

/// 背景パーティクル数
const PARTICLE_COUNT: usize = 100;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // File はスレッド間で送れないのでローカル保持
    let (session, set_session) = signal_local(Session::new());
    // 送信中のfetchを中断するためのハンドル
    let abort = StoredValue::new_local(None::<AbortController>);

    let abort_in_flight = move || {
        abort.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        });
    };

    // 画像選択ハンドラ（ファイル選択・ドロップ・カメラ共通）
    let on_image = move |file: File| {
        abort_in_flight();
        let Some(id) = set_session.try_update(|s| s.select_image(file.clone())) else {
            return;
        };
        read_as_data_url(&file, move |data_url| {
            set_session.update(|s| {
                if !s.preview_ready(id, data_url) {
                    gloo::console::debug!("Dropped stale preview");
                }
            });
        });
    };

    // 予測ハンドラ
    let on_predict = move |_| {
        if !session.with_untracked(|s| s.can_predict()) {
            return;
        }
        let started = set_session
            .try_update(|s| {
                let ticket = s.begin_submission()?;
                s.payload().cloned().map(|file| (ticket, file))
            })
            .flatten();
        let Some((ticket, file)) = started else {
            return;
        };

        abort_in_flight();
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        abort.set_value(controller);

        spawn_local(async move {
            let outcome = predict::submit(&file, signal.as_ref()).await;
            let failure = outcome.as_ref().err().map(|e| e.to_string());

            match set_session.try_update(|s| s.complete_submission(ticket, outcome)) {
                Some(Completion::Applied(count)) => {
                    abort.set_value(None);
                    gloo::console::log!(format!("Prediction received: {} result(s)", count));
                }
                Some(Completion::Failed) => {
                    abort.set_value(None);
                    gloo::console::error!("Prediction error:", failure.unwrap_or_default());
                }
                Some(Completion::Stale) | None => {
                    gloo::console::debug!("Ignored stale prediction response");
                }
            }
        });
    };

    let on_drag_over = move |_| set_session.update(|s| s.drag_over());
    let on_drag_leave = move |_| set_session.update(|s| s.drag_leave());
    let on_zoom_open = move |_| {
        set_session.update(|s| {
            s.open_zoom();
        })
    };
    let on_zoom_close = move |_| set_session.update(|s| s.close_zoom());

    view! {
        <div class="app">
            <Particles count=PARTICLE_COUNT />

            <main class="neon-card">
                <Header />

                <UploadArea
                    session=session
                    on_image=on_image
                    on_drag_over=on_drag_over
                    on_drag_leave=on_drag_leave
                    on_zoom=on_zoom_open
                />

                <ActionButtons
                    session=session
                    on_image=on_image
                    on_predict=on_predict
                />

                <Show when=move || session.with(|s| s.is_loading())>
                    <LoadingSpinner />
                </Show>

                <ResultList session=session />
            </main>

            <ZoomOverlay session=session on_close=on_zoom_close />
        </div>
    }
}

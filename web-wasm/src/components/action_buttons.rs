//! カメラ・予測ボタンコンポーネント

use leptos::html;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::app::Session;
use crate::preview::first_file;

#[component]
pub fn ActionButtons<FI, FP>(
    session: ReadSignal<Session, LocalStorage>,
    on_image: FI,
    on_predict: FP,
) -> impl IntoView
where
    FI: Fn(File) + 'static + Clone,
    FP: Fn(()) + 'static + Clone,
{
    let camera_input: NodeRef<html::Input> = NodeRef::new();
    let can_predict = move || session.with(|s| s.can_predict());

    view! {
        // 背面カメラで撮影
        <input
            node_ref=camera_input
            type="file"
            accept="image/*"
            capture="environment"
            class="hidden"
            on:change=move |ev| {
                let input: HtmlInputElement = event_target(&ev);
                if let Some(file) = first_file(input.files()) {
                    on_image(file);
                }
            }
        />

        <div class="action-buttons">
            <button
                class="btn btn-camera"
                on:click=move |_| {
                    if let Some(input) = camera_input.get() {
                        input.click();
                    }
                }
            >
                "Use Camera"
            </button>

            <button
                class="btn btn-primary"
                disabled=move || !can_predict()
                on:click={
                    let on_predict = on_predict.clone();
                    move |_| on_predict(())
                }
            >
                "Predict"
            </button>
        </div>
    }
}

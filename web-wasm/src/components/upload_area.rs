//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、ドラッグ&ドロップで画像を受け付ける。
//! プレビュー画像をクリックするとズーム表示。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement, MouseEvent};

use crate::app::Session;
use crate::preview::first_file;

#[component]
pub fn UploadArea<FI, FD, FL, FZ>(
    session: ReadSignal<Session, LocalStorage>,
    on_image: FI,
    on_drag_over: FD,
    on_drag_leave: FL,
    on_zoom: FZ,
) -> impl IntoView
where
    FI: Fn(File) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
    FL: Fn(()) + 'static + Clone,
    FZ: Fn(()) + 'static + Clone + Send + Sync,
{
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_drop = {
        let on_image = on_image.clone();
        let on_drag_leave = on_drag_leave.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            on_drag_leave(());
            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                on_image(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        on_drag_over(());
    };

    let on_dragleave = move |_: DragEvent| {
        on_drag_leave(());
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_: MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            on_image(file);
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || session.with(|s| s.drag_active())
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {move || match session.with(|s| s.preview().map(str::to_string)) {
                Some(src) => {
                    let on_zoom = on_zoom.clone();
                    view! {
                        <img
                            class="preview"
                            src=src
                            alt="preview"
                            on:click=move |ev: MouseEvent| {
                                ev.stop_propagation();
                                on_zoom(());
                            }
                        />
                    }
                    .into_any()
                }
                None => view! {
                    <p class="text-muted">"Drag & drop or click to upload image"</p>
                }
                .into_any(),
            }}
        </div>

        <input
            node_ref=file_input
            type="file"
            class="hidden"
            on:change=on_change
        />
    }
}

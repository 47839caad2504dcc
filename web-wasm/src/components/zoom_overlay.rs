//! フルスクリーン表示

use leptos::prelude::*;

use crate::app::Session;

#[component]
pub fn ZoomOverlay<FC>(session: ReadSignal<Session, LocalStorage>, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || session.with(|s| s.overlay_visible())>
            <div
                class="zoom-overlay"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            >
                <img
                    class="zoom-image"
                    src=move || session.with(|s| s.preview().unwrap_or_default().to_string())
                    alt="zoomed preview"
                />
            </div>
        </Show>
    }
}

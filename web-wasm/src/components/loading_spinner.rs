//! 送信中スピナー

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-container" role="status" aria-label="loading">
            <div class="spinner" />
        </div>
    }
}

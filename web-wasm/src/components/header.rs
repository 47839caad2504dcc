//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="title">"Steel Defect Detector"</h1>
        </header>
    }
}

//! 予測結果リストコンポーネント

use leptos::prelude::*;
use steel_defect_common::{result_cards, ResultCard};

use crate::app::Session;

#[component]
pub fn ResultList(session: ReadSignal<Session, LocalStorage>) -> impl IntoView {
    // レスポンス順のまま。結果が未設定ならリスト自体を出さない
    let cards = move || session.with(|s| s.results().map(result_cards));

    view! {
        <Show when=move || session.with(|s| s.results().is_some())>
            <div class="result-list">
                <For
                    each=move || cards().unwrap_or_default().into_iter().enumerate()
                    key=|(index, card)| (*index, card.label.clone(), card.confidence_text.clone())
                    children=move |(_, card)| view! { <ResultCardView card=card /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ResultCardView(card: ResultCard) -> impl IntoView {
    let style = card.bar_style();

    view! {
        <div class="result-card">
            <p class="result-label">{card.label}</p>
            <div class="confidence-bar">
                <div class="confidence-fill" style=style />
            </div>
            <p class="confidence-text">{card.confidence_text}</p>
            // 未知クラスは説明行を出さない
            {card.description.map(|text| view! { <p class="defect-description">{text}</p> })}
        </div>
    }
}

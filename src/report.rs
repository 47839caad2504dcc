//! 端末向けの結果表示

use steel_defect_common::{DefectClass, ResultCard};

/// テキストバーの幅（文字数）
const BAR_CHARS: u32 = 20;

/// 0..=100 のバー幅を文字のバーにする
pub fn text_bar(bar_width: u32) -> String {
    let filled = ((bar_width.min(100) * BAR_CHARS) as f64 / 100.0).round() as u32;
    let mut bar = String::new();
    for i in 0..BAR_CHARS {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// 結果カードを整形
///
/// 説明文のないクラスは説明行を出さない。
pub fn format_cards(cards: &[ResultCard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.label);
        out.push('\n');
        out.push_str(&format!("  [{}] {:>7}\n", text_bar(card.bar_width), card.confidence_text));
        if let Some(description) = card.description {
            out.push_str(&format!("  {}\n", description));
        }
    }
    out
}

/// 欠陥クラス一覧
pub fn format_classes() -> String {
    let width = DefectClass::ALL
        .iter()
        .map(|c| c.key().len())
        .max()
        .unwrap_or(0);

    DefectClass::ALL
        .iter()
        .map(|c| format!("{:<width$}  {}\n", c.key(), c.description(), width = width))
        .collect()
}

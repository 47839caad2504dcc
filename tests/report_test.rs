//! 結果表示のテスト

use steel_defect::report::format_cards;
use steel_defect_common::{parse_predict_response, result_cards};

#[test]
fn test_format_known_class() {
    let results = parse_predict_response(r#"{"results":[{"class":"scratches","confidence":0.87}]}"#)
        .expect("パース失敗");
    let text = format_cards(&result_cards(&results));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "SCRATCHES");
    assert!(lines[1].ends_with("87.00%"));
    assert_eq!(lines[2].trim(), "Linear grooves formed due to abrasion and friction.");
}

#[test]
fn test_format_unknown_class_omits_description() {
    let results = parse_predict_response(r#"{"results":[{"class":"weld_spatter","confidence":0.5}]}"#)
        .expect("パース失敗");
    let text = format_cards(&result_cards(&results));
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("WELD_SPATTER"));
}

#[test]
fn test_format_keeps_response_order() {
    let results = parse_predict_response(
        r#"{"results":[
            {"class":"inclusion","confidence":0.2},
            {"class":"rolled-in_scale","confidence":0.7},
            {"class":"patches","confidence":0.1}
        ]}"#,
    )
    .expect("パース失敗");
    let text = format_cards(&result_cards(&results));
    let labels: Vec<&str> = text.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(labels, vec!["INCLUSION", "ROLLED-IN_SCALE", "PATCHES"]);
}

#[test]
fn test_format_empty() {
    assert_eq!(format_cards(&[]), "");
}

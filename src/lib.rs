//! 鋼材表面欠陥判定ツール
//!
//! ブラウザ版と同じ予測APIに画像を送り、結果カードを端末に表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod predictor;
pub mod report;

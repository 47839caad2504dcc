use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "steel-defect")]
#[command(about = "鋼材表面欠陥判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を予測APIに送信して結果を表示
    Predict {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 予測エンドポイント（設定より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 欠陥クラスと説明を一覧表示
    Classes,

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from(["steel-defect", "predict", "plate.png", "--json"]).expect("パース失敗");
        match cli.command {
            Commands::Predict { image, endpoint, json } => {
                assert_eq!(image, PathBuf::from("plate.png"));
                assert!(endpoint.is_none());
                assert!(json);
            }
            _ => panic!("predictになっていない"),
        }
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["steel-defect", "classes", "-v"]).expect("パース失敗");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Classes));
    }

    #[test]
    fn test_predict_requires_image() {
        assert!(Cli::try_parse_from(["steel-defect", "predict"]).is_err());
    }
}

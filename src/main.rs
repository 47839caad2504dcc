use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use steel_defect::{cli, client, config, error, image_file, predictor, report};
use steel_defect_common::result_cards;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Predict { image, endpoint, json } => {
            let config = Config::load()?;
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let client = client::PredictClient::new(
                endpoint.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?;

            let payload = image_file::load_image(&image)?;
            tracing::info!(file = %payload.file_name, mime = %payload.mime_type, "Image selected");

            let mut session = predictor::Session::new();
            session.select_image(payload);

            let pb = spinner(&format!("予測中... ({})", endpoint));
            let submitted = predictor::submit(&mut session, &client).await;
            pb.finish_and_clear();

            predictor::into_result(submitted)?;

            let results = session.results().unwrap_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(results)?);
            } else if results.is_empty() {
                println!("結果はありません");
            } else {
                print!("{}", report::format_cards(&result_cards(results)));
            }
        }

        Commands::Classes => {
            print!("{}", report::format_classes());
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = if set_endpoint.is_some() {
                Config::load_or_default()
            } else {
                Config::load()?
            };

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                config.save()?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use receipt_points::adapters::http;
use receipt_points::core::ConfigProvider;
use receipt_points::utils::error::ReceiptError;
use receipt_points::utils::{logger, validation::Validate};
use receipt_points::{CliConfig, InMemoryScoreStore, ReceiptProcessor, TomlConfig};
use std::sync::Arc;

fn report_and_exit(stage: &str, e: &ReceiptError) -> ! {
    tracing::error!("❌ {} failed: {} (Category: {:?})", stage, e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    logger::init_logger(config.verbose(), config.json_logs());
    tracing::info!("Starting receipt-points service");

    if let Err(e) = config.validate() {
        report_and_exit("Configuration validation", &e);
    }

    let processor = Arc::new(ReceiptProcessor::new(InMemoryScoreStore::new()));

    http::serve(&config, processor)
        .await
        .with_context(|| format!("server on {} stopped with an error", config.bind_address()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => run(config).await,
            Err(e) => {
                // Logger settings live in the file we failed to read
                logger::init_logger(cli.verbose, cli.json_logs);
                report_and_exit(&format!("Loading {}", path), &e)
            }
        },
        None => run(cli).await,
    }
}

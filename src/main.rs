mod client;
mod config;
mod dto;
mod models;
mod runner;
mod services;
mod utils;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use config::RunnerConfig;
use runner::{JourneyRunner, Verdict};
use utils::report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    report::print_start();

    let config = RunnerConfig::default();
    info!(
        "🌐 Target API: {} (timeout: {} ms)",
        config.base_url, config.timeout_ms
    );

    let journey = JourneyRunner::new(&config)?;
    let report = journey.run().await;

    match report.verdict {
        Verdict::Passed => report::print_pass(),
        Verdict::Failed => {
            let stage = report
                .failed_stage
                .map(|stage| stage.label())
                .unwrap_or("UNKNOWN");
            report::print_fail(stage);
        }
    }

    Ok(())
}

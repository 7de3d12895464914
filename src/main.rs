use traffic_report::utils::{logger, validation::Validate};
use traffic_report::{FathomClient, ReportCompiler, ReportConfig, ReportRunner, WebhookNotifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the scheduler.
    let dotenv = dotenvy::dotenv();

    let config = ReportConfig::from_env();
    logger::init_logger(config.log_format);

    tracing::info!("Starting traffic-report");
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::warn!("⚠️ {} (continuing; affected requests will fail)", e);
    }

    let compiler = ReportCompiler::new(FathomClient::new(config.clone()), config.clone());
    let runner = ReportRunner::new(compiler, WebhookNotifier::new(config));

    let message = runner.run().await;
    if message.is_error() {
        tracing::warn!("Run finished with an error report");
    } else {
        tracing::info!("Run finished");
    }

    Ok(())
}

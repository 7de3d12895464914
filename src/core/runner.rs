use crate::adapters::webhook::send_webhook;
use crate::core::report::ReportCompiler;
use crate::domain::model::WebhookMessage;
use crate::domain::ports::{AnalyticsSource, ConfigProvider, Notifier};
use chrono::{DateTime, Utc};

/// One fetch-compute-send cycle.
pub struct ReportRunner<A: AnalyticsSource, C: ConfigProvider, N: Notifier> {
    compiler: ReportCompiler<A, C>,
    notifier: N,
}

impl<A: AnalyticsSource, C: ConfigProvider, N: Notifier> ReportRunner<A, C, N> {
    pub fn new(compiler: ReportCompiler<A, C>, notifier: N) -> Self {
        Self { compiler, notifier }
    }

    pub async fn run(&self) -> WebhookMessage {
        self.run_at(Utc::now()).await
    }

    /// Returns the message handed to the notifier, whether or not delivery
    /// succeeded.
    pub async fn run_at(&self, now: DateTime<Utc>) -> WebhookMessage {
        tracing::info!("Generating weekly traffic report");
        let message = self.compiler.generate_report_at(now).await;

        if message.is_error() {
            tracing::warn!("Sending error report instead of traffic summary");
        }
        send_webhook(&self.notifier, &message).await;

        message
    }
}

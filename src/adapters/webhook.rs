use crate::domain::model::WebhookMessage;
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Posts messages to a Discord-style webhook.
pub struct WebhookNotifier<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> WebhookNotifier<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl<C: ConfigProvider> Notifier for WebhookNotifier<C> {
    async fn deliver(&self, message: &WebhookMessage) -> Result<()> {
        let body = serde_json::to_vec(message)?;
        tracing::debug!("Posting {} byte webhook payload", body.len());

        let response = self
            .client
            .post(self.config.webhook_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ReportError::delivery_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::delivery_status(status));
        }
        Ok(())
    }
}

/// Terminal pipeline step: delivery failures are logged and dropped.
pub async fn send_webhook<N: Notifier + ?Sized>(notifier: &N, message: &WebhookMessage) {
    match notifier.deliver(message).await {
        Ok(()) => tracing::info!("✅ Report sent successfully"),
        Err(e) => tracing::error!("❌ Webhook error: {}", e),
    }
}

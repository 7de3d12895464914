use crate::domain::model::AggregationRow;
use crate::domain::ports::{AggregationQuery, AnalyticsSource, ConfigProvider};
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Read-only client for the Fathom aggregations endpoint.
pub struct FathomClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> FathomClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    fn aggregations_url(&self) -> String {
        format!(
            "{}/aggregations",
            self.config.api_base_url().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> AnalyticsSource for FathomClient<C> {
    async fn fetch_aggregation(&self, query: &AggregationQuery) -> Result<Vec<AggregationRow>> {
        let url = self.aggregations_url();
        tracing::debug!(
            "Querying {} (grouping: {:?}, limit: {:?}, {} -> {})",
            url,
            query.field_grouping,
            query.limit,
            query.date_from,
            query.date_to
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.config.api_token())
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Aggregation response status: {}", status);

        if !status.is_success() {
            return Err(ReportError::request(status));
        }

        let rows: Option<Vec<AggregationRow>> = response.json().await?;
        let rows = rows.unwrap_or_default();
        tracing::debug!("Received {} aggregation rows", rows.len());
        Ok(rows)
    }
}

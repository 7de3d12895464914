use crate::domain::model::{AggregationRow, DateRange, WebhookMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_token(&self) -> &str;
    fn site_id(&self) -> &str;
    fn webhook_url(&self) -> &str;
    fn report_title(&self) -> &str;
}

/// Query parameters for one aggregation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationQuery {
    pub entity: String,
    pub entity_id: String,
    pub aggregates: String,
    pub field_grouping: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<u32>,
    pub date_from: String,
    pub date_to: String,
    pub timezone: String,
}

impl AggregationQuery {
    /// Ungrouped pageview total over `range`.
    pub fn total_pageviews(site_id: &str, range: &DateRange) -> Self {
        Self {
            entity: "pageview".to_string(),
            entity_id: site_id.to_string(),
            aggregates: "pageviews".to_string(),
            field_grouping: None,
            sort_by: None,
            limit: None,
            date_from: range.start_timestamp(),
            date_to: range.end_timestamp(),
            timezone: "UTC".to_string(),
        }
    }

    /// Pageviews per pathname, busiest first.
    pub fn top_pages(site_id: &str, range: &DateRange, limit: u32) -> Self {
        Self {
            field_grouping: Some("pathname".to_string()),
            sort_by: Some("pageviews:desc".to_string()),
            limit: Some(limit),
            ..Self::total_pageviews(site_id, range)
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("entity", self.entity.clone()),
            ("entity_id", self.entity_id.clone()),
            ("aggregates", self.aggregates.clone()),
        ];
        if let Some(grouping) = &self.field_grouping {
            params.push(("field_grouping", grouping.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("sort_by", sort_by.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params.push(("date_from", self.date_from.clone()));
        params.push(("date_to", self.date_to.clone()));
        params.push(("timezone", self.timezone.clone()));
        params
    }
}

#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn fetch_aggregation(&self, query: &AggregationQuery) -> Result<Vec<AggregationRow>>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one message. Errors are returned, not logged.
    async fn deliver(&self, message: &WebhookMessage) -> Result<()>;
}

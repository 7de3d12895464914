use crate::core::date_range::comparison_windows;
use crate::domain::model::{
    AggregationRow, DateRange, Embed, EmbedField, EmbedFooter, PageStat, ReportPayload, TopPage,
    WebhookMessage,
};
use crate::domain::ports::{AggregationQuery, AnalyticsSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::format;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const REPORT_USERNAME: &str = "weekly fathom roundup bot";
pub const ERROR_USERNAME: &str = "Traffic Bot - Error";

const LAST_WEEK_LIMIT: u32 = 15;
// Must stay >= LAST_WEEK_LIMIT; pages missing here get a zero baseline.
const WEEK_BEFORE_LIMIT: u32 = 20;
const TOP_PAGES_SHOWN: usize = 10;

pub struct ReportCompiler<A: AnalyticsSource, C: ConfigProvider> {
    source: A,
    config: C,
}

impl<A: AnalyticsSource, C: ConfigProvider> ReportCompiler<A, C> {
    pub fn new(source: A, config: C) -> Self {
        Self { source, config }
    }

    pub async fn generate_report(&self) -> WebhookMessage {
        self.generate_report_at(Utc::now()).await
    }

    /// Builds the webhook message for the weeks preceding `now`. A failed
    /// query turns the whole report into an error message.
    pub async fn generate_report_at(&self, now: DateTime<Utc>) -> WebhookMessage {
        match self.compile(now).await {
            Ok(payload) => {
                tracing::info!(
                    "📈 Compiled report for {}: {} pageviews ({}), {} top pages",
                    payload.date_range_label,
                    payload.total_last,
                    format::signed_delta(payload.total_delta),
                    payload.top_pages.len()
                );
                payload.into_message(now)
            }
            Err(e) => {
                tracing::error!("❌ Report generation failed: {}", e);
                error_message(&e.to_string())
            }
        }
    }

    /// Runs the four analytics queries in order and assembles the payload.
    pub async fn compile(&self, now: DateTime<Utc>) -> Result<ReportPayload> {
        let (last_week, week_before) = comparison_windows(now);
        let site_id = self.config.site_id();

        let last_rows = self
            .source
            .fetch_aggregation(&AggregationQuery::top_pages(site_id, &last_week, LAST_WEEK_LIMIT))
            .await?;
        let before_rows = self
            .source
            .fetch_aggregation(&AggregationQuery::top_pages(
                site_id,
                &week_before,
                WEEK_BEFORE_LIMIT,
            ))
            .await?;
        let baseline: HashMap<String, u64> = before_rows
            .iter()
            .filter_map(page_stat)
            .map(|page| (page.path, page.views))
            .collect();

        let total_last = self.total_pageviews(site_id, &last_week).await?;
        let total_before = self.total_pageviews(site_id, &week_before).await?;

        // Slice by rank first; a path-less row still occupies its slot.
        let top_pages = last_rows
            .iter()
            .take(TOP_PAGES_SHOWN)
            .filter_map(page_stat)
            .map(|page| {
                let prior = baseline.get(&page.path).copied().unwrap_or(0);
                TopPage {
                    delta: delta(page.views, prior),
                    path: page.path,
                    views: page.views,
                }
            })
            .collect();

        Ok(ReportPayload {
            title: self.config.report_title().to_string(),
            total_last,
            total_delta: delta(total_last, total_before),
            date_range_label: last_week.label(),
            top_pages,
        })
    }

    async fn total_pageviews(&self, site_id: &str, range: &DateRange) -> Result<u64> {
        let query = AggregationQuery::total_pageviews(site_id, range);
        let rows = self.source.fetch_aggregation(&query).await?;
        Ok(rows
            .first()
            .and_then(|row| row.count("pageviews"))
            .unwrap_or(0))
    }
}

fn page_stat(row: &AggregationRow) -> Option<PageStat> {
    let path = row.text("pathname")?;
    let views = row.count("pageviews").unwrap_or_else(|| {
        tracing::warn!("Non-numeric pageviews for {}, counting as 0", path);
        0
    });
    Some(PageStat {
        path: path.to_string(),
        views,
    })
}

fn delta(current: u64, previous: u64) -> i64 {
    (current as i128 - previous as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

pub fn error_message(reason: &str) -> WebhookMessage {
    WebhookMessage::Error {
        username: ERROR_USERNAME.to_string(),
        content: format!("❌ Failed to generate report: {}", reason),
    }
}

impl TopPage {
    /// `→ /docs: 500 (+500)`
    pub fn line(&self) -> String {
        format!(
            "→ {}: {} ({})",
            self.path,
            format::count(self.views),
            format::signed_delta(self.delta)
        )
    }
}

impl ReportPayload {
    pub fn into_message(self, generated_at: DateTime<Utc>) -> WebhookMessage {
        let top_pages = self
            .top_pages
            .iter()
            .map(TopPage::line)
            .collect::<Vec<_>>()
            .join("\n");

        WebhookMessage::Report {
            username: REPORT_USERNAME.to_string(),
            embeds: vec![Embed {
                title: self.title,
                fields: vec![
                    EmbedField {
                        name: "🌐 Total Pageviews".to_string(),
                        value: format!(
                            "{} ({})",
                            format::count(self.total_last),
                            format::signed_delta(self.total_delta)
                        ),
                        inline: Some(true),
                    },
                    EmbedField {
                        name: "📅 Date Range".to_string(),
                        value: self.date_range_label,
                        inline: Some(true),
                    },
                    EmbedField {
                        name: "🔝 Top Pages".to_string(),
                        value: top_pages,
                        inline: None,
                    },
                ],
                footer: EmbedFooter {
                    text: format!(
                        "Generated at {}",
                        generated_at.format("%a, %d %b %Y %H:%M:%S GMT")
                    ),
                },
            }],
        }
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An inclusive Monday 00:00:00 to Sunday 23:59:59 window, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn shifted_back_one_week(&self) -> Self {
        Self {
            start: self.start - Duration::days(7),
            end: self.end - Duration::days(7),
        }
    }

    pub fn start_timestamp(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_timestamp(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `YYYY-MM-DD to YYYY-MM-DD`, dates only.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// One decoded aggregation row. Values are kept as raw JSON because the
/// analytics API reports counts either as numbers or as numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationRow {
    #[serde(flatten)]
    pub data: HashMap<String, serde_json::Value>,
}

impl AggregationRow {
    pub fn text(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(|v| v.as_str())
    }

    pub fn count(&self, field: &str) -> Option<u64> {
        match self.data.get(field)? {
            serde_json::Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
            serde_json::Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f.round() as u64)
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStat {
    pub path: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPage {
    pub path: String,
    pub views: u64,
    pub delta: i64,
}

/// A compiled week-over-week report, before it is shaped for the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub title: String,
    pub total_last: u64,
    pub total_delta: i64,
    pub date_range_label: String,
    pub top_pages: Vec<TopPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

/// Body posted to the webhook sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookMessage {
    Report { username: String, embeds: Vec<Embed> },
    Error { username: String, content: String },
}

impl WebhookMessage {
    pub fn username(&self) -> &str {
        match self {
            WebhookMessage::Report { username, .. } | WebhookMessage::Error { username, .. } => {
                username
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WebhookMessage::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn row(value: serde_json::Value) -> AggregationRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_count_coerces_strings_and_numbers() {
        let r = row(json!({"pathname": "/", "pageviews": "1234", "visits": 17, "avg": 2.6}));
        assert_eq!(r.count("pageviews"), Some(1234));
        assert_eq!(r.count("visits"), Some(17));
        assert_eq!(r.count("avg"), Some(3));
        assert_eq!(r.count("missing"), None);
        assert_eq!(r.text("pathname"), Some("/"));
    }

    #[test]
    fn test_count_rejects_garbage() {
        let r = row(json!({"a": "n/a", "b": null, "c": -5, "d": true}));
        assert_eq!(r.count("a"), None);
        assert_eq!(r.count("b"), None);
        assert_eq!(r.count("c"), None);
        assert_eq!(r.count("d"), None);
    }

    #[test]
    fn test_date_range_rendering() {
        let range = DateRange {
            start: Utc.with_ymd_and_hms(2026, 10, 5, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 10, 11, 23, 59, 59).unwrap(),
        };
        assert_eq!(range.start_timestamp(), "2026-10-05 00:00:00");
        assert_eq!(range.end_timestamp(), "2026-10-11 23:59:59");
        assert_eq!(range.label(), "2026-10-05 to 2026-10-11");

        let before = range.shifted_back_one_week();
        assert_eq!(before.label(), "2026-09-28 to 2026-10-04");
    }

    #[test]
    fn test_webhook_message_serialization() {
        let error = WebhookMessage::Error {
            username: "Traffic Bot - Error".to_string(),
            content: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"username": "Traffic Bot - Error", "content": "boom"})
        );

        let report = WebhookMessage::Report {
            username: "bot".to_string(),
            embeds: vec![Embed {
                title: "t".to_string(),
                fields: vec![
                    EmbedField {
                        name: "a".to_string(),
                        value: "1".to_string(),
                        inline: Some(true),
                    },
                    EmbedField {
                        name: "b".to_string(),
                        value: "2".to_string(),
                        inline: None,
                    },
                ],
                footer: EmbedFooter {
                    text: "f".to_string(),
                },
            }],
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "username": "bot",
                "embeds": [{
                    "title": "t",
                    "fields": [
                        {"name": "a", "value": "1", "inline": true},
                        {"name": "b", "value": "2"}
                    ],
                    "footer": {"text": "f"}
                }]
            })
        );
    }
}

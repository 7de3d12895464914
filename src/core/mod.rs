pub mod date_range;
pub mod report;
pub mod runner;

pub use crate::domain::model::{DateRange, ReportPayload, WebhookMessage};
pub use crate::domain::ports::{AnalyticsSource, ConfigProvider, Notifier};
pub use crate::utils::error::Result;

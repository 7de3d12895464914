pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{send_webhook, FathomClient, WebhookNotifier};
pub use config::ReportConfig;
pub use crate::core::{report::ReportCompiler, runner::ReportRunner};
pub use utils::error::{ReportError, Result};

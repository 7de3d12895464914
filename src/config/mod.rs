use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_secret, validate_url, Validate};
use std::env;
use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "https://api.usefathom.com/v1";
pub const DEFAULT_REPORT_TITLE: &str = "reactflow.dev Traffic Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Settings for one report run.
///
/// Missing values are left empty rather than rejected: a run with a blank
/// token still executes and reports the resulting API failure to the sink.
#[derive(Clone)]
pub struct ReportConfig {
    pub webhook_url: String,
    pub api_token: String,
    pub site_id: String,
    pub api_base_url: String,
    pub report_title: String,
    pub log_format: LogFormat,
}

impl ReportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            webhook_url: lookup("DISCORD_WEBHOOK_URL").unwrap_or_default(),
            api_token: lookup("FATHOM_API_TOKEN").unwrap_or_default(),
            site_id: lookup("FATHOM_SITE_ID").unwrap_or_default(),
            api_base_url: non_empty("FATHOM_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            report_title: non_empty("REPORT_TITLE")
                .unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = if self.api_token.is_empty() { "" } else { "***" };
        f.debug_struct("ReportConfig")
            .field("webhook_url", &mask_webhook_url(&self.webhook_url))
            .field("api_token", &masked)
            .field("site_id", &self.site_id)
            .field("api_base_url", &self.api_base_url)
            .field("report_title", &self.report_title)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Discord webhook URLs embed their secret as the last path segment.
fn mask_webhook_url(url: &str) -> String {
    match url.rfind('/') {
        Some(pos) if pos + 1 < url.len() && url[..pos].contains("://") => {
            format!("{}/***", &url[..pos])
        }
        _ => url.to_string(),
    }
}

impl ConfigProvider for ReportConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn site_id(&self) -> &str {
        &self.site_id
    }

    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn report_title(&self) -> &str {
        &self.report_title
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_url("DISCORD_WEBHOOK_URL", &self.webhook_url)?;
        validate_url("FATHOM_API_BASE_URL", &self.api_base_url)?;
        validate_secret("FATHOM_API_TOKEN", &self.api_token)?;
        validate_non_empty_string("FATHOM_SITE_ID", &self.site_id)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The analytics endpoint answered with a non-success status.
    #[error("API Error: {status_text}")]
    RequestError { status: u16, status_text: String },

    /// The webhook sink rejected the message or could not be reached.
    #[error("Webhook failed: {reason}")]
    DeliveryError { status: Option<u16>, reason: String },

    #[error("{0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ReportError {
    pub(crate) fn request(status: reqwest::StatusCode) -> Self {
        ReportError::RequestError {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }

    pub(crate) fn delivery_status(status: reqwest::StatusCode) -> Self {
        ReportError::DeliveryError {
            status: Some(status.as_u16()),
            reason: status.as_u16().to_string(),
        }
    }

    pub(crate) fn delivery_transport(err: reqwest::Error) -> Self {
        ReportError::DeliveryError {
            status: None,
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

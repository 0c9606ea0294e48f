use crate::domain::{ApiErrorBody, CredentialField};
use serde_json::{json, Value};
use thiserror::Error;

pub type Result<T = (), E = CampaignError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone)]
pub enum CampaignError {
    #[error("Validation failed. Missing fields: {}", CredentialField::join_labels(.0))]
    MissingCredentials(Vec<CredentialField>),

    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        details: Option<ApiErrorBody>,
    },

    #[error("Malformed API response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    #[error("API response did not include an id")]
    MissingId,

    #[error("HTTP request failed: {0}")]
    Transport(String),
}

impl CampaignError {
    /// Fallback message when the platform gives no `error.message`.
    pub fn status_failure(status: u16) -> Self {
        Self::Api {
            status,
            message: format!("API request failed with status {status}"),
            details: None,
        }
    }

    /// Structured payload attached to the ERROR log entry.
    pub fn log_payload(&self) -> Option<Value> {
        match self {
            Self::MissingCredentials(_) => None,
            Self::Api {
                status, details, ..
            } => Some(json!({ "status": status, "error": details })),
            Self::MalformedResponse { status, reason } => {
                Some(json!({ "status": status, "reason": reason }))
            }
            Self::MissingId => None,
            Self::Transport(reason) => Some(json!({ "transport": reason })),
        }
    }
}

impl From<reqwest::Error> for CampaignError {
    fn from(e: reqwest::Error) -> Self {
        CampaignError::Transport(e.to_string())
    }
}

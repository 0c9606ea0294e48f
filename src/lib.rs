pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Public, stable-ish API surface for consumers (UI / tests)

pub use crate::config::GraphApiConfig;

pub use crate::domain::{
    BudgetPlan, CampaignSpec, CredentialField, Credentials, FlowPhase, LogEntry, LogSink,
    LogStatus, ProgressLog, RunOutcome,
};

pub use crate::error::{CampaignError, Result};

pub use crate::repositories::{AdsApi, GraphApiClient};

pub use crate::services::CampaignCreator;

pub mod prelude {
    pub use crate::config::GraphApiConfig;
    pub use crate::domain::{
        CampaignSpec, CredentialField, Credentials, FlowPhase, LogEntry, LogSink, LogStatus,
        ProgressLog, RunOutcome,
    };
    pub use crate::error::{CampaignError, Result};
    pub use crate::repositories::{AdsApi, GraphApiClient};
    pub use crate::services::CampaignCreator;
}

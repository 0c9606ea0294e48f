//! Pipeline steps, the identifiers they produce, and run phases.

use super::credentials::CredentialField;
use crate::error::CampaignError;
use std::fmt;

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(CampaignId);
entity_id!(AdSetId);
entity_id!(CreativeId);
entity_id!(AdId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Campaign,
    AdSet,
    AdCreative,
    Ad,
}

impl Step {
    pub const COUNT: usize = 4;

    pub fn number(self) -> usize {
        match self {
            Self::Campaign => 1,
            Self::AdSet => 2,
            Self::AdCreative => 3,
            Self::Ad => 4,
        }
    }

    /// Lower-case noun for the LOADING line.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Campaign => "campaign",
            Self::AdSet => "ad set",
            Self::AdCreative => "ad creative",
            Self::Ad => "final ad",
        }
    }

    /// Capitalised noun for the SUCCESS line.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Campaign => "Campaign",
            Self::AdSet => "Ad Set",
            Self::AdCreative => "Ad Creative",
            Self::Ad => "Ad",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/{}", self.number(), Self::COUNT)
    }
}

/// Everything a completed run left behind on the platform, all paused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntities {
    pub campaign_id: CampaignId,
    pub ad_set_id: AdSetId,
    pub creative_id: CreativeId,
    pub ad_id: AdId,
}

#[derive(Debug, Clone)]
pub struct StepFailure {
    pub step: Step,
    pub error: CampaignError,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed(CreatedEntities),
    ValidationFailed(Vec<CredentialField>),
    /// Entities from earlier steps stay on the platform in PAUSED state.
    Aborted(StepFailure),
}

impl RunOutcome {
    pub fn phase(&self) -> FlowPhase {
        match self {
            Self::Completed(_) => FlowPhase::Completed,
            Self::ValidationFailed(_) => FlowPhase::ValidationFailed,
            Self::Aborted(failure) => FlowPhase::Aborted(failure.step),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Running,
    Completed,
    ValidationFailed,
    Aborted(Step),
}

impl FlowPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Running)
    }
}

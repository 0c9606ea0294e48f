//! Graph API wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_user_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_user_msg: Option<String>,
    #[serde(rename = "fbtrace_id", default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

// =============================================================================
// Edges
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Campaigns,
    AdSets,
    AdCreatives,
    Ads,
}

impl Edge {
    pub fn path(self) -> &'static str {
        match self {
            Self::Campaigns => "campaigns",
            Self::AdSets => "adsets",
            Self::AdCreatives => "adcreatives",
            Self::Ads => "ads",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// Platform enumerations
// =============================================================================

/// Only `Paused` exists: nothing this tool creates may start spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Objective {
    OutcomeTraffic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialAdCategory {
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingEvent {
    Impressions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationGoal {
    LinkClicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStrategy {
    LowestCostWithoutCap,
}

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CampaignRequest {
    pub name: String,
    pub objective: Objective,
    pub status: EntityStatus,
    pub special_ad_categories: Vec<SpecialAdCategory>,
}

impl CampaignRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objective: Objective::OutcomeTraffic,
            status: EntityStatus::Paused,
            special_ad_categories: vec![SpecialAdCategory::None],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoLocations {
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Targeting {
    pub geo_locations: GeoLocations,
    pub age_min: u8,
    pub publisher_platforms: Vec<String>,
    pub device_platforms: Vec<String>,
}

impl Default for Targeting {
    fn default() -> Self {
        Self {
            geo_locations: GeoLocations {
                countries: vec!["US".into()],
            },
            age_min: 18,
            publisher_platforms: vec!["facebook".into(), "instagram".into()],
            device_platforms: vec!["mobile".into(), "desktop".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdSetRequest {
    pub campaign_id: String,
    pub name: String,
    /// Minor currency units.
    pub daily_budget: u64,
    pub start_time: String,
    pub end_time: String,
    pub billing_event: BillingEvent,
    pub optimization_goal: OptimizationGoal,
    pub bid_strategy: BidStrategy,
    pub targeting: Targeting,
    pub status: EntityStatus,
}

impl AdSetRequest {
    pub fn new(
        campaign_id: impl Into<String>,
        name: impl Into<String>,
        daily_budget: u64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            name: name.into(),
            daily_budget,
            start_time: start_time.into(),
            end_time: end_time.into(),
            billing_event: BillingEvent::Impressions,
            optimization_goal: OptimizationGoal::LinkClicks,
            bid_strategy: BidStrategy::LowestCostWithoutCap,
            targeting: Targeting::default(),
            status: EntityStatus::Paused,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkData {
    pub link: String,
    pub message: String,
    pub picture: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectStorySpec {
    pub page_id: String,
    pub link_data: LinkData,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdCreativeRequest {
    pub name: String,
    pub object_story_spec: ObjectStorySpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreativeRef {
    pub creative_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdRequest {
    pub name: String,
    pub adset_id: String,
    pub creative: CreativeRef,
    pub status: EntityStatus,
}

impl AdRequest {
    pub fn new(
        name: impl Into<String>,
        adset_id: impl Into<String>,
        creative_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            adset_id: adset_id.into(),
            creative: CreativeRef {
                creative_id: creative_id.into(),
            },
            status: EntityStatus::Paused,
        }
    }
}

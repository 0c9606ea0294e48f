//! Campaign content and the names derived from it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSpec {
    pub artist: String,
    /// Whole-run budget in major currency units.
    pub total_budget: f64,
    /// ISO 8601 with offset, passed through to the ad set as-is.
    pub start_time: String,
    pub end_time: String,
    pub primary_copy: String,
    pub secondary_copy: String,
    pub image_url: String,
    pub link_url: String,
}

impl CampaignSpec {
    pub fn demo() -> Self {
        Self {
            artist: "The Cool Rockers".into(),
            total_budget: 150.0,
            start_time: "2025-11-01T10:00:00-0500".into(),
            end_time: "2025-11-08T23:59:59-0500".into(),
            primary_copy: "Check out the new single from The Cool Rockers!".into(),
            secondary_copy: "Listen now on all streaming platforms.".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/95/Big_Pine_BC_Canada.jpg/1200px-Big_Pine_BC_Canada.jpg".into(),
            link_url: "https://www.facebook.com".into(),
        }
    }

    pub fn campaign_name(&self) -> String {
        format!("{} Dummy Campaign", self.artist)
    }

    pub fn ad_set_name(&self) -> String {
        format!("{} Dummy Ad Set", self.artist)
    }

    pub fn creative_name(&self) -> String {
        format!("{} Dummy Creative", self.artist)
    }

    pub fn ad_name(&self) -> String {
        format!("{} Dummy Ad", self.artist)
    }
}

impl Default for CampaignSpec {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_artist() {
        let spec = CampaignSpec {
            artist: "Night Owls".into(),
            ..CampaignSpec::demo()
        };
        assert_eq!(spec.campaign_name(), "Night Owls Dummy Campaign");
        assert_eq!(spec.ad_set_name(), "Night Owls Dummy Ad Set");
        assert_eq!(spec.creative_name(), "Night Owls Dummy Creative");
        assert_eq!(spec.ad_name(), "Night Owls Dummy Ad");
    }
}

//! Graph API endpoint settings.

pub const DEFAULT_GRAPH_HOST: &str = "https://graph.facebook.com";
pub const DEFAULT_API_VERSION: &str = "v20.0";

/// Ad account ids are addressed as `act_<id>` on every edge.
pub const AD_ACCOUNT_PREFIX: &str = "act_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphApiConfig {
    pub base_url: String,
    pub api_version: String,
}

impl GraphApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// `<base>/<version>/act_<account>`, tolerant of a trailing slash on the base.
    pub fn account_url(&self, ad_account_id: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            AD_ACCOUNT_PREFIX,
            ad_account_id
        )
    }
}

impl Default for GraphApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAPH_HOST.into(),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }
}

//! Graph API access - thin wrapper over reqwest.

use crate::config::GraphApiConfig;
use crate::domain::{
    AdCreativeRequest, AdRequest, AdSetRequest, ApiResponse, CampaignRequest, Credentials, Edge,
};
use crate::error::{CampaignError, Result};
use async_trait::async_trait;
use serde::Serialize;

/// The four create operations, one POST each.
#[async_trait]
pub trait AdsApi: Send + Sync {
    async fn create_campaign(
        &self,
        credentials: &Credentials,
        request: &CampaignRequest,
    ) -> Result<ApiResponse>;

    async fn create_ad_set(
        &self,
        credentials: &Credentials,
        request: &AdSetRequest,
    ) -> Result<ApiResponse>;

    async fn create_ad_creative(
        &self,
        credentials: &Credentials,
        request: &AdCreativeRequest,
    ) -> Result<ApiResponse>;

    async fn create_ad(&self, credentials: &Credentials, request: &AdRequest)
        -> Result<ApiResponse>;
}

/// Turns a raw HTTP reply into the uniform success/failure shape.
///
/// Non-2xx or a payload-level `error` object fails with the platform's
/// message, falling back to the status code. A body that is not JSON fails
/// the same way on error statuses and as a malformed response otherwise.
pub fn parse_api_response(status: u16, body: &[u8]) -> Result<ApiResponse> {
    let is_success = (200..300).contains(&status);

    let response: ApiResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) if !is_success => return Err(CampaignError::status_failure(status)),
        Err(e) => {
            return Err(CampaignError::MalformedResponse {
                status,
                reason: e.to_string(),
            })
        }
    };

    if !is_success || response.error.is_some() {
        let message = response
            .error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| format!("API request failed with status {status}"));
        return Err(CampaignError::Api {
            status,
            message,
            details: response.error,
        });
    }

    Ok(response)
}

pub struct GraphApiClient {
    client: reqwest::Client,
    config: GraphApiConfig,
}

impl GraphApiClient {
    pub fn new(config: GraphApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, config: GraphApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GraphApiConfig {
        &self.config
    }

    pub fn edge_url(&self, ad_account_id: &str, edge: Edge) -> String {
        format!("{}/{}", self.config.account_url(ad_account_id), edge)
    }

    async fn post<B: Serialize + Sync>(
        &self,
        credentials: &Credentials,
        edge: Edge,
        body: &B,
    ) -> Result<ApiResponse> {
        let url = self.edge_url(&credentials.ad_account_id, edge);
        tracing::debug!(%edge, account = %credentials.ad_account_id, "POST to Graph API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&credentials.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        parse_api_response(status, &bytes).inspect_err(|e| {
            tracing::warn!(%edge, status, error = %e, "Graph API call failed");
        })
    }
}

impl Default for GraphApiClient {
    fn default() -> Self {
        Self::new(GraphApiConfig::default())
    }
}

#[async_trait]
impl AdsApi for GraphApiClient {
    async fn create_campaign(
        &self,
        credentials: &Credentials,
        request: &CampaignRequest,
    ) -> Result<ApiResponse> {
        self.post(credentials, Edge::Campaigns, request).await
    }

    async fn create_ad_set(
        &self,
        credentials: &Credentials,
        request: &AdSetRequest,
    ) -> Result<ApiResponse> {
        self.post(credentials, Edge::AdSets, request).await
    }

    async fn create_ad_creative(
        &self,
        credentials: &Credentials,
        request: &AdCreativeRequest,
    ) -> Result<ApiResponse> {
        self.post(credentials, Edge::AdCreatives, request).await
    }

    async fn create_ad(
        &self,
        credentials: &Credentials,
        request: &AdRequest,
    ) -> Result<ApiResponse> {
        self.post(credentials, Edge::Ads, request).await
    }
}

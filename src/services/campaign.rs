//! Campaign creation flow - business logic only.
//!
//! Four dependent steps run strictly in order: campaign, ad set (needs the
//! campaign id), ad creative, then the ad (needs the ad set and creative
//! ids). The first failure ends the run; anything already created is left
//! paused on the platform.

use crate::domain::{
    AdCreativeRequest, AdId, AdRequest, AdSetId, AdSetRequest, ApiResponse, BudgetPlan,
    CampaignId, CampaignRequest, CampaignSpec, CreatedEntities, CreativeId, Credentials,
    LinkData, LogEntry, LogSink, ObjectStorySpec, RunOutcome, Step, StepFailure,
};
use crate::error::{CampaignError, Result};
use crate::repositories::AdsApi;
use std::future::Future;

pub const FAILURE_HINT: &str =
    "Campaign creation failed. Please check your credentials, permissions, and campaign data.";

pub const COMPLETION_MESSAGE: &str =
    "Process complete. Campaign is PAUSED and ready for review in Ads Manager.";

pub struct CampaignCreator<A> {
    api: A,
    spec: CampaignSpec,
}

impl<A: AdsApi> CampaignCreator<A> {
    pub fn new(api: A, spec: CampaignSpec) -> Self {
        Self { api, spec }
    }

    pub fn spec(&self) -> &CampaignSpec {
        &self.spec
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Runs the whole flow, reporting progress to `sink`.
    ///
    /// Always returns an outcome; failures are reported through the log
    /// rather than propagated.
    pub async fn run<S>(&self, credentials: &Credentials, sink: &mut S) -> RunOutcome
    where
        S: LogSink + Send,
    {
        if let Err(err) = credentials.validate() {
            tracing::warn!(error = %err, "credential validation failed");
            sink.log(LogEntry::error(err.to_string()));
            return RunOutcome::ValidationFailed(credentials.missing_fields());
        }

        let plan = BudgetPlan::for_campaign(&self.spec);
        tracing::info!(
            days = plan.duration_days,
            daily_budget = plan.daily_budget,
            "budget computed"
        );
        sink.log(LogEntry::info(plan.summary()));

        match self.run_steps(credentials, &plan, sink).await {
            Ok(created) => {
                tracing::info!(
                    campaign_id = %created.campaign_id,
                    ad_id = %created.ad_id,
                    "campaign created"
                );
                sink.log(LogEntry::success(COMPLETION_MESSAGE));
                RunOutcome::Completed(created)
            }
            Err(failure) => {
                tracing::warn!(
                    step = %failure.step,
                    error = %failure.error,
                    "campaign creation aborted"
                );
                sink.log(
                    LogEntry::error(format!("Error: {}", failure.error))
                        .with_data(failure.error.log_payload()),
                );
                sink.log(LogEntry::info(FAILURE_HINT));
                RunOutcome::Aborted(failure)
            }
        }
    }

    async fn run_steps<S>(
        &self,
        credentials: &Credentials,
        plan: &BudgetPlan,
        sink: &mut S,
    ) -> std::result::Result<CreatedEntities, StepFailure>
    where
        S: LogSink + Send,
    {
        let campaign_id = self.create_campaign(credentials, sink).await?;
        let ad_set_id = self
            .create_ad_set(credentials, &campaign_id, plan, sink)
            .await?;
        let creative_id = self.create_ad_creative(credentials, sink).await?;
        let ad_id = self
            .create_ad(credentials, &ad_set_id, &creative_id, sink)
            .await?;

        Ok(CreatedEntities {
            campaign_id,
            ad_set_id,
            creative_id,
            ad_id,
        })
    }

    async fn create_campaign<S>(
        &self,
        credentials: &Credentials,
        sink: &mut S,
    ) -> std::result::Result<CampaignId, StepFailure>
    where
        S: LogSink + Send,
    {
        let name = self.spec.campaign_name();
        let request = CampaignRequest::new(&name);
        let call = self.api.create_campaign(credentials, &request);
        run_step(Step::Campaign, &name, sink, call)
            .await
            .map(CampaignId)
    }

    async fn create_ad_set<S>(
        &self,
        credentials: &Credentials,
        campaign_id: &CampaignId,
        plan: &BudgetPlan,
        sink: &mut S,
    ) -> std::result::Result<AdSetId, StepFailure>
    where
        S: LogSink + Send,
    {
        let name = self.spec.ad_set_name();
        let request = AdSetRequest::new(
            campaign_id.as_str(),
            &name,
            plan.daily_budget,
            &self.spec.start_time,
            &self.spec.end_time,
        );
        let call = self.api.create_ad_set(credentials, &request);
        run_step(Step::AdSet, &name, sink, call).await.map(AdSetId)
    }

    async fn create_ad_creative<S>(
        &self,
        credentials: &Credentials,
        sink: &mut S,
    ) -> std::result::Result<CreativeId, StepFailure>
    where
        S: LogSink + Send,
    {
        let name = self.spec.creative_name();
        let request = AdCreativeRequest {
            name: name.clone(),
            object_story_spec: ObjectStorySpec {
                page_id: credentials.page_id.clone(),
                link_data: LinkData {
                    link: self.spec.link_url.clone(),
                    message: self.spec.primary_copy.clone(),
                    picture: self.spec.image_url.clone(),
                    name: self.spec.artist.clone(),
                    description: self.spec.secondary_copy.clone(),
                },
            },
        };
        let call = self.api.create_ad_creative(credentials, &request);
        run_step(Step::AdCreative, &name, sink, call)
            .await
            .map(CreativeId)
    }

    async fn create_ad<S>(
        &self,
        credentials: &Credentials,
        ad_set_id: &AdSetId,
        creative_id: &CreativeId,
        sink: &mut S,
    ) -> std::result::Result<AdId, StepFailure>
    where
        S: LogSink + Send,
    {
        let name = self.spec.ad_name();
        let request = AdRequest::new(&name, ad_set_id.as_str(), creative_id.as_str());
        let call = self.api.create_ad(credentials, &request);
        run_step(Step::Ad, &name, sink, call).await.map(AdId)
    }
}

/// LOADING before the call, SUCCESS with the new id after it.
async fn run_step<S, F>(
    step: Step,
    name: &str,
    sink: &mut S,
    call: F,
) -> std::result::Result<String, StepFailure>
where
    S: LogSink + Send,
    F: Future<Output = Result<ApiResponse>> + Send,
{
    sink.log(LogEntry::loading(format!(
        "[{step}] Creating {}: \"{name}\"...",
        step.resource()
    )));
    tracing::info!(%step, name, "creating {}", step.resource());

    let id = call.await.and_then(|response| {
        response
            .id
            .filter(|id| !id.is_empty())
            .ok_or(CampaignError::MissingId)
    });

    match id {
        Ok(id) => {
            sink.log(LogEntry::success(format!(
                "{} created with ID: {id}",
                step.entity()
            )));
            Ok(id)
        }
        Err(error) => Err(StepFailure { step, error }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialField, Edge, LogStatus};
    use crate::repositories::parse_api_response;
    use async_trait::async_trait;
    use serde::Serialize;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned replies in order and records every request body.
    #[derive(Default)]
    struct ScriptedApi {
        replies: Mutex<VecDeque<Result<ApiResponse>>>,
        calls: Mutex<Vec<(Edge, Value)>>,
    }

    impl ScriptedApi {
        fn replying(replies: Vec<Result<ApiResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::default(),
            }
        }

        fn reply(&self, edge: Edge, body: &impl Serialize) -> Result<ApiResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((edge, serde_json::to_value(body).unwrap()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected API call")
        }

        fn calls(&self) -> Vec<(Edge, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdsApi for ScriptedApi {
        async fn create_campaign(
            &self,
            _: &Credentials,
            request: &CampaignRequest,
        ) -> Result<ApiResponse> {
            self.reply(Edge::Campaigns, request)
        }

        async fn create_ad_set(&self, _: &Credentials, request: &AdSetRequest) -> Result<ApiResponse> {
            self.reply(Edge::AdSets, request)
        }

        async fn create_ad_creative(
            &self,
            _: &Credentials,
            request: &AdCreativeRequest,
        ) -> Result<ApiResponse> {
            self.reply(Edge::AdCreatives, request)
        }

        async fn create_ad(&self, _: &Credentials, request: &AdRequest) -> Result<ApiResponse> {
            self.reply(Edge::Ads, request)
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("token", "1234", "5678")
    }

    fn statuses(log: &[LogEntry]) -> Vec<LogStatus> {
        log.iter().map(|e| e.status).collect()
    }

    #[tokio::test]
    async fn empty_credentials_stop_before_any_call() {
        let creator = CampaignCreator::new(ScriptedApi::default(), CampaignSpec::demo());
        let mut log = Vec::new();

        let outcome = creator.run(&Credentials::default(), &mut log).await;

        assert!(matches!(
            outcome,
            RunOutcome::ValidationFailed(ref fields) if fields == &CredentialField::ALL.to_vec()
        ));
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].status, LogStatus::Error);
        assert_eq!(
            log[0].text,
            "Validation failed. Missing fields: Access Token, Ad Account ID, Page ID"
        );
        assert!(creator.api().calls().is_empty());
    }

    #[tokio::test]
    async fn full_run_chains_ids() {
        let api = ScriptedApi::replying(vec![
            Ok(ApiResponse::with_id("cmp-1")),
            Ok(ApiResponse::with_id("set-2")),
            Ok(ApiResponse::with_id("cr-3")),
            Ok(ApiResponse::with_id("ad-4")),
        ]);
        let creator = CampaignCreator::new(api, CampaignSpec::demo());
        let mut log = Vec::new();

        let outcome = creator.run(&credentials(), &mut log).await;

        let RunOutcome::Completed(created) = outcome else {
            panic!("expected completed run");
        };
        assert_eq!(created.campaign_id.as_str(), "cmp-1");
        assert_eq!(created.ad_id.as_str(), "ad-4");

        use LogStatus::*;
        assert_eq!(
            statuses(&log),
            [Info, Loading, Success, Loading, Success, Loading, Success, Loading, Success, Success]
        );
        assert_eq!(log[0].text, "Calculated daily budget: $18.75 over 8 days.");
        assert_eq!(
            log[1].text,
            "[Step 1/4] Creating campaign: \"The Cool Rockers Dummy Campaign\"..."
        );
        assert_eq!(log[2].text, "Campaign created with ID: cmp-1");
        assert_eq!(log[8].text, "Ad created with ID: ad-4");
        assert_eq!(log[9].text, COMPLETION_MESSAGE);

        let calls = creator.api().calls();
        let edges: Vec<_> = calls.iter().map(|(edge, _)| *edge).collect();
        assert_eq!(edges, [Edge::Campaigns, Edge::AdSets, Edge::AdCreatives, Edge::Ads]);

        assert_eq!(calls[1].1["campaign_id"], "cmp-1");
        assert_eq!(calls[1].1["daily_budget"], 1875);
        assert_eq!(calls[2].1["object_story_spec"]["page_id"], "5678");
        assert_eq!(calls[3].1["adset_id"], "set-2");
        assert_eq!(calls[3].1["creative"]["creative_id"], "cr-3");
        for (_, body) in calls.iter().filter(|(edge, _)| *edge != Edge::AdCreatives) {
            assert_eq!(body["status"], "PAUSED");
        }
    }

    #[tokio::test]
    async fn ad_set_error_aborts_remaining_steps() {
        let api = ScriptedApi::replying(vec![
            Ok(ApiResponse::with_id("cmp-1")),
            parse_api_response(400, br#"{"error":{"message":"Invalid budget"}}"#),
        ]);
        let creator = CampaignCreator::new(api, CampaignSpec::demo());
        let mut log = Vec::new();

        let outcome = creator.run(&credentials(), &mut log).await;

        let RunOutcome::Aborted(failure) = outcome else {
            panic!("expected aborted run");
        };
        assert_eq!(failure.step, Step::AdSet);

        use LogStatus::*;
        assert_eq!(statuses(&log), [Info, Loading, Success, Loading, Error, Info]);
        assert!(log[4].text.contains("Invalid budget"));
        assert_eq!(log[4].data.as_ref().unwrap()["error"]["message"], "Invalid budget");
        assert_eq!(log[5].text, FAILURE_HINT);
        assert_eq!(creator.api().calls().len(), 2);
    }

    #[tokio::test]
    async fn success_without_id_fails_the_step() {
        let api = ScriptedApi::replying(vec![Ok(ApiResponse::default())]);
        let creator = CampaignCreator::new(api, CampaignSpec::demo());
        let mut log = Vec::new();

        let outcome = creator.run(&credentials(), &mut log).await;

        assert!(matches!(
            outcome,
            RunOutcome::Aborted(StepFailure {
                step: Step::Campaign,
                error: CampaignError::MissingId
            })
        ));
        assert_eq!(log.last().unwrap().text, FAILURE_HINT);
    }

    #[tokio::test]
    async fn injected_spec_drives_names_and_budget() {
        let spec = CampaignSpec {
            artist: "Fixture Band".into(),
            total_budget: 30.0,
            start_time: "2026-01-01".into(),
            end_time: "2026-01-03".into(),
            ..CampaignSpec::demo()
        };
        let api = ScriptedApi::replying(vec![
            Ok(ApiResponse::with_id("1")),
            Ok(ApiResponse::with_id("2")),
            Ok(ApiResponse::with_id("3")),
            Ok(ApiResponse::with_id("4")),
        ]);
        let creator = CampaignCreator::new(api, spec);
        let mut log = Vec::new();

        creator.run(&credentials(), &mut log).await;

        assert_eq!(log[0].text, "Calculated daily budget: $10.00 over 3 days.");
        let calls = creator.api().calls();
        assert_eq!(calls[0].1["name"], "Fixture Band Dummy Campaign");
        assert_eq!(calls[1].1["daily_budget"], 1000);
        assert_eq!(
            calls[2].1["object_story_spec"]["link_data"]["name"],
            "Fixture Band"
        );
    }
}

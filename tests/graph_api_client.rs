
use campaign_creator::domain::{AdRequest, CampaignRequest};
use campaign_creator::prelude::*;
use mock_graph_api::{MockGraphApi, MockReply};
use serde_json::json;

fn client_for(mock: &MockGraphApi) -> GraphApiClient {
    GraphApiClient::new(GraphApiConfig::default().with_base_url(mock.url()))
}

fn credentials() -> Credentials {
    Credentials::new("test-token", "1234567890", "55555")
}

#[tokio::test]
async fn campaign_post_hits_account_edge_with_bearer_auth() {
    let mock = MockGraphApi::builder()
        .reply("campaigns", MockReply::created("120210000000001"))
        .start()
        .await;

    let response = client_for(&mock)
        .create_campaign(&credentials(), &CampaignRequest::new("Demo Campaign"))
        .await
        .unwrap();
    assert_eq!(response.id.as_deref(), Some("120210000000001"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.version, "v20.0");
    assert_eq!(request.account, "act_1234567890");
    assert_eq!(request.edge, "campaigns");
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(
        request.body,
        json!({
            "name": "Demo Campaign",
            "objective": "OUTCOME_TRAFFIC",
            "status": "PAUSED",
            "special_ad_categories": ["NONE"],
        })
    );
}

#[tokio::test]
async fn platform_error_message_is_surfaced() {
    let mock = MockGraphApi::builder()
        .reply(
            "ads",
            MockReply::json(
                400,
                json!({
                    "error": {
                        "message": "Invalid parameter",
                        "type": "OAuthException",
                        "code": 100,
                        "fbtrace_id": "A1b2C3"
                    }
                }),
            ),
        )
        .start()
        .await;

    let err = client_for(&mock)
        .create_ad(&credentials(), &AdRequest::new("Ad", "set-1", "cr-1"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid parameter");
    match err {
        CampaignError::Api {
            status, details, ..
        } => {
            assert_eq!(status, 400);
            let details = details.unwrap();
            assert_eq!(details.code, Some(100));
            assert_eq!(details.trace_id.as_deref(), Some("A1b2C3"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_failure_falls_back_to_status() {
    let mock = MockGraphApi::builder()
        .reply("campaigns", MockReply::raw(500, "upstream exploded"))
        .start()
        .await;

    let err = client_for(&mock)
        .create_campaign(&credentials(), &CampaignRequest::new("C"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API request failed with status 500");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = GraphApiClient::new(GraphApiConfig::default().with_base_url("http://127.0.0.1:1"));

    let err = client
        .create_campaign(&credentials(), &CampaignRequest::new("C"))
        .await
        .unwrap_err();

    assert!(matches!(err, CampaignError::Transport(_)));
}

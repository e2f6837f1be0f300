use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::common::{DomainError, DomainResult};
use crate::domains::planning::{PlanRequest, PlanResponse, PlanResult, PlanService};

/// Planning service reached over HTTP: one POST to `{base_url}/path` per
/// request, no retries.
pub struct HttpPlanService {
    client: Client,
    base_url: String,
}

impl HttpPlanService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::Infrastructure(format!("failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn request_plan(&self, request: &PlanRequest) -> DomainResult<PlanResult> {
        let url = format!("{}/path", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::PlanUnavailable {
                reason: format!("planning service unreachable: {}", e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::PlanUnavailable {
                reason: format!("failed to read planner response: {}", e),
            })?;

        if !status.is_success() {
            return Err(DomainError::PlanUnavailable {
                reason: format!("planner responded with {}: {}", status, body),
            });
        }

        let parsed: PlanResponse =
            serde_json::from_str(&body).map_err(|e| DomainError::PlanUnavailable {
                reason: format!("planner response was not valid JSON: {}", e),
            })?;

        PlanResult::from_response(parsed)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{PlanRequest, PlanResult};
use crate::common::DomainResult;

/// Port to the external path-planning service: one request, one response.
/// Failures surface as `DomainError::PlanUnavailable` and are never retried
/// here; the caller decides what to show the operator.
#[async_trait]
pub trait PlanService: Send + Sync {
    async fn request_plan(&self, request: &PlanRequest) -> DomainResult<PlanResult>;
}

pub type DynPlanService = Arc<dyn PlanService>;

use crate::domain::model::{FieldErrors, SimulationRequest, SimulationResult};
use crate::utils::error::ApiError;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// The remote simulation service.
#[async_trait]
pub trait SimulationApi: Send + Sync {
    /// One attempt, bounded by the adapter's deadline.
    async fn submit(&self, request: &SimulationRequest) -> Result<SimulationResult, ApiError>;

    /// Never fails: any problem reaching the service reads as unhealthy.
    async fn check_health(&self) -> bool;
}

/// Where submission progress and outcomes are reported.
pub trait SubmissionView: Send + Sync {
    fn clear(&self) {}

    fn set_busy(&self, _busy: bool) {}

    fn show_field_errors(&self, errors: &FieldErrors);

    fn show_failure(&self, error: &ApiError);

    fn show_result(&self, result: &SimulationResult);

    fn show_rejected(&self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentView;

impl SubmissionView for SilentView {
    fn show_field_errors(&self, _errors: &FieldErrors) {}

    fn show_failure(&self, _error: &ApiError) {}

    fn show_result(&self, _result: &SimulationResult) {}
}

use crate::domain::model::{SimulationRequest, SimulationResult};
use crate::domain::ports::{ConfigProvider, SimulationApi};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const SIMULATION_PATH: &str = "/simulacao";
pub const HEALTH_PATH: &str = "/health";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by the simulation service.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    detail: Option<serde_json::Value>,
}

/// `SimulationApi` over HTTP. Each exchange runs under `timeout`.
#[derive(Debug, Clone)]
pub struct HttpSimulationApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSimulationApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("api.base_url", base_url)?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn exchange(
        &self,
        request: &SimulationRequest,
    ) -> std::result::Result<SimulationResult, ApiError> {
        let url = self.endpoint(SIMULATION_PATH);
        tracing::debug!("POST {} with {:?}", url, request);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        tracing::debug!("Simulation service responded with {}", status);

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = server_error_message(status, &body);
            tracing::error!("Simulation service error (status {}): {}", status, message);
            return Err(ApiError::ServerError(message));
        }

        let result: SimulationResult = response.json().await?;
        if !result.is_well_formed() {
            return Err(ApiError::Unknown(
                "Simulation service returned a negative or non-finite amount".to_string(),
            ));
        }
        Ok(result)
    }
}

/// Picks the message out of an error body, falling back to the status code.
fn server_error_message(status: StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.detail);

    match detail {
        Some(serde_json::Value::String(message)) if !message.trim().is_empty() => message,
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if messages.is_empty() {
                format!("HTTP status {}", status.as_u16())
            } else {
                messages.join("; ")
            }
        }
        _ => format!("HTTP status {}", status.as_u16()),
    }
}

#[async_trait]
impl SimulationApi for HttpSimulationApi {
    async fn submit(
        &self,
        request: &SimulationRequest,
    ) -> std::result::Result<SimulationResult, ApiError> {
        tracing::info!("Sending simulation to {}", self.base_url);

        match tokio::time::timeout(self.timeout, self.exchange(request)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                tracing::error!("Simulation request timed out after {:?}", self.timeout);
                Err(ApiError::Timeout)
            }
        }
    }

    async fn check_health(&self) -> bool {
        let url = self.endpoint(HEALTH_PATH);

        let health = self.client.get(&url).send();
        let healthy = match tokio::time::timeout(self.timeout, health).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                tracing::warn!("Health check failed: {}", e);
                false
            }
            Err(_elapsed) => {
                tracing::warn!("Health check timed out after {:?}", self.timeout);
                false
            }
        };

        tracing::info!("API health check: {}", if healthy { "OK" } else { "ERROR" });
        healthy
    }
}

//! Health check against the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status shown before the first response arrives.
pub const LOADING_STATUS: &str = "Loading...";
/// Status shown when the request fails for any reason.
pub const FAILED_STATUS: &str = "Failed to connect";
/// Status the backend reports when it is up.
pub const LIVE_STATUS: &str = "OK";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct HealthClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HealthClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one `GET` and decode the JSON body.
    pub async fn check(&self) -> Result<HealthResponse, HealthError> {
        tracing::debug!("Checking backend health at {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HealthError::Status(status.as_u16()));
        }
        Ok(response.json::<HealthResponse>().await?)
    }
}

/// What the header indicator shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub error: Option<String>,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: LOADING_STATUS.to_string(),
            error: None,
        }
    }
}

impl HealthStatus {
    /// Fold the outcome of a health check into the displayed state.
    pub fn record(&mut self, result: Result<HealthResponse, HealthError>) {
        match result {
            Ok(response) => {
                self.status = response.status;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                self.status = FAILED_STATUS.to_string();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == LIVE_STATUS && self.error.is_none()
    }

    pub fn indicator_class(&self) -> &'static str {
        if self.is_live() {
            "status-indicator live"
        } else {
            "status-indicator"
        }
    }
}

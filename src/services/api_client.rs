use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use crate::config::constants::{COMPARE_ENDPOINT, GENERIC_COMPARE_ERROR, INCIDENTS_ENDPOINT, timeout_duration_secs};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::comparison_dataset::ComparisonDataset;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::incident::Incident;
use crate::structs::incident_listing::IncidentListing;
use crate::structs::submit_receipt::SubmitReceipt;
use crate::traits::comparison_source::ComparisonSource;
use crate::traits::incident_sink::IncidentSink;

#[derive(Serialize)]
struct IncidentsRequest<'a> {
    incidents: &'a [Incident],
}

/// Client for the comparison/incident backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ReviewResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/compare`. Failures carry either the server's `error` text or a generic message.
    pub async fn fetch_comparison(&self) -> ReviewResult<ComparisonDataset> {
        let url = self.endpoint(COMPARE_ENDPOINT);
        log::debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Comparison request failed: {}", e);
                return Err(ReviewError::api_error(COMPARE_ENDPOINT, None, GENERIC_COMPARE_ERROR));
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or_else(|| GENERIC_COMPARE_ERROR.to_string());
            log::warn!("⚠️ Comparison endpoint answered HTTP {}", status);
            return Err(ReviewError::api_error(COMPARE_ENDPOINT, Some(status.as_u16()), &message));
        }

        serde_json::from_str::<ComparisonDataset>(&body).map_err(|e| {
            log::error!("❌ Could not parse comparison response: {}", e);
            ReviewError::api_error(COMPARE_ENDPOINT, Some(status.as_u16()), GENERIC_COMPARE_ERROR)
        })
    }

    /// `POST /api/incidents` with `{ "incidents": [...] }`.
    pub async fn submit_incidents(&self, incidents: &[Incident]) -> ReviewResult<SubmitReceipt> {
        let url = self.endpoint(INCIDENTS_ENDPOINT);
        log::debug!("POST {} ({} incidents)", url, incidents.len());

        let response = self
            .client
            .post(&url)
            .json(&IncidentsRequest { incidents })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(http_failure(INCIDENTS_ENDPOINT, status, &body));
        }

        let body = serde_json::from_str(&body).unwrap_or_else(|_| serde_json::Value::String(body.clone()));
        Ok(SubmitReceipt {
            submitted: incidents.len(),
            body,
        })
    }

    /// `GET /api/incidents`.
    pub async fn list_incidents(&self) -> ReviewResult<IncidentListing> {
        let url = self.endpoint(INCIDENTS_ENDPOINT);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(http_failure(INCIDENTS_ENDPOINT, status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ComparisonSource for ApiClient {
    async fn fetch_comparison(&self) -> ReviewResult<ComparisonDataset> {
        ApiClient::fetch_comparison(self).await
    }
}

#[async_trait]
impl IncidentSink for ApiClient {
    async fn submit(&self, incidents: Vec<Incident>) -> ReviewResult<SubmitReceipt> {
        self.submit_incidents(&incidents).await
    }
}

/// Pull a human-readable message out of an error body: `{"error": ...}` or FastAPI's `{"detail": ...}`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn http_failure(endpoint: &str, status: StatusCode, body: &str) -> ReviewError {
    let message = extract_error_message(body).unwrap_or_else(|| format!("HTTP {}", status));
    ReviewError::api_error(endpoint, Some(status.as_u16()), &message)
}

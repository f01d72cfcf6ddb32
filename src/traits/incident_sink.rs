use async_trait::async_trait;
use crate::errors::ReviewResult;
use crate::structs::incident::Incident;
use crate::structs::submit_receipt::SubmitReceipt;

/// Where finished reviews send their incidents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncidentSink: Send + Sync {
    async fn submit(&self, incidents: Vec<Incident>) -> ReviewResult<SubmitReceipt>;
}

use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::structs::incident::Incident;
use crate::traits::incident_sink::IncidentSink;

/// Submit incidents in the background. The outcome is only logged; nothing is retried.
/// Returns `None` without touching the sink when there is nothing to submit.
pub fn dispatch_incidents(sink: Arc<dyn IncidentSink>, incidents: Vec<Incident>) -> Option<JoinHandle<()>> {
    if incidents.is_empty() {
        return None;
    }

    let count = incidents.len();
    Some(tokio::spawn(async move {
        match sink.submit(incidents).await {
            Ok(receipt) => {
                log::info!("💾 Saved {} incident(s): {}", count, receipt.body);
            }
            Err(e) => {
                log::error!("❌ Failed to save incidents: {}", e);
            }
        }
    }))
}

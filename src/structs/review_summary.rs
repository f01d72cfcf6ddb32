use serde::{Deserialize, Serialize};
use crate::structs::incident::Incident;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Number of visible increased rows when the session ran out of targets.
    pub reviewed_count: usize,
    pub incidents: Vec<Incident>,
}

impl ReviewSummary {
    pub fn has_incidents(&self) -> bool {
        !self.incidents.is_empty()
    }

    pub fn print_summary(&self) {
        log::info!("\n🏁 Review complete: {} cost increase(s) reviewed", self.reviewed_count);

        if self.incidents.is_empty() {
            log::info!("📝 No incidents recorded.");
            return;
        }

        log::info!("📝 {} incident(s) recorded:", self.incidents.len());
        for incident in &self.incidents {
            log::info!("  • {} - {}", incident.id, incident.service);
            log::info!("    {}", incident.cost_line());
            log::info!("    \"{}\"", incident.explanation);
        }
    }
}

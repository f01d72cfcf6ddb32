use serde::{Deserialize, Serialize};
use crate::structs::incident::Incident;

/// Response of `GET /api/incidents`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentListing {
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub count: usize,
}

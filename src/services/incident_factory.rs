use chrono::{DateTime, SecondsFormat, Utc};
use crate::structs::comparison_item::ComparisonItem;
use crate::structs::incident::Incident;

/// Builds incidents with time-derived ids that stay unique within one factory.
#[derive(Debug, Clone)]
pub struct IncidentFactory {
    prefix: String,
    last_millis: Option<i64>,
}

impl IncidentFactory {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last_millis: None,
        }
    }

    /// Returns `None` when the explanation is blank after trimming.
    pub fn create(&mut self, item: &ComparisonItem, explanation: &str, now: DateTime<Utc>) -> Option<Incident> {
        let explanation = explanation.trim();
        if explanation.is_empty() {
            return None;
        }

        Some(Incident {
            id: self.next_id(now),
            service: item.service.clone(),
            cost_change: item.change,
            change_percent: item.change_percent.unwrap_or_default(),
            explanation: explanation.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        if let Some(last) = self.last_millis {
            if millis <= last {
                millis = last + 1;
            }
        }
        self.last_millis = Some(millis);
        format!("{}-{}", self.prefix, millis)
    }
}

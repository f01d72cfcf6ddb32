//! Guided, one-row-at-a-time review of visible cost increases.
//!
//! The session never caches visibility: every advance re-derives the target
//! list from the filter it is handed, so changing the search query while a
//! review is running changes what is left to review. The cursor is an index
//! into that freshly derived list.

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use crate::config::constants::DEFAULT_INCIDENT_PREFIX;
use crate::enums::review_phase::ReviewPhase;
use crate::enums::review_step::ReviewStep;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::incident_factory::IncidentFactory;
use crate::services::visibility_filter::VisibilityFilter;
use crate::structs::comparison_dataset::ComparisonDataset;
use crate::structs::incident::Incident;
use crate::structs::review_prompt::ReviewPrompt;
use crate::structs::review_summary::ReviewSummary;
use crate::structs::review_target::ReviewTarget;

#[derive(Debug, Clone)]
pub struct ReviewSession {
    phase: ReviewPhase,
    cursor: usize,
    current: Option<ReviewTarget>,
    completed_rows: BTreeSet<usize>,
    incidents: Vec<Incident>,
    reviewed_count: usize,
    factory: IncidentFactory,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new(DEFAULT_INCIDENT_PREFIX)
    }
}

impl ReviewSession {
    pub fn new(incident_prefix: &str) -> Self {
        Self {
            phase: ReviewPhase::Idle,
            cursor: 0,
            current: None,
            completed_rows: BTreeSet::new(),
            incidents: Vec::new(),
            reviewed_count: 0,
            factory: IncidentFactory::new(incident_prefix),
        }
    }

    pub fn phase(&self) -> ReviewPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn active_row(&self) -> Option<usize> {
        self.current.as_ref().map(|target| target.index)
    }

    pub fn current_target(&self) -> Option<&ReviewTarget> {
        self.current.as_ref()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed_rows.contains(&index)
    }

    pub fn completed_rows(&self) -> &BTreeSet<usize> {
        &self.completed_rows
    }

    /// Visible increased rows, in dataset order.
    pub fn targets(dataset: &ComparisonDataset, filter: &VisibilityFilter) -> Vec<ReviewTarget> {
        let term = filter.term();
        dataset
            .comparison
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_reviewable() && item.matches_term(&term))
            .map(|(index, item)| ReviewTarget {
                index,
                item: item.clone(),
            })
            .collect()
    }

    /// `Idle -> Active`, or straight to `Complete` when nothing is reviewable.
    pub fn start(&mut self, dataset: &ComparisonDataset, filter: &VisibilityFilter) -> ReviewResult<ReviewStep> {
        if self.phase != ReviewPhase::Idle {
            return Err(ReviewError::invalid_transition(self.phase, "start a review"));
        }

        self.cursor = 0;
        self.current = None;
        self.incidents.clear();
        self.completed_rows.clear();
        self.reviewed_count = 0;
        self.phase = ReviewPhase::Active;

        log::debug!("Review started with query '{}'", filter.query());
        Ok(self.advance(dataset, filter))
    }

    /// Answer the open prompt. A blank explanation marks the row reviewed without an incident.
    pub fn submit_explanation(
        &mut self,
        explanation: &str,
        dataset: &ComparisonDataset,
        filter: &VisibilityFilter,
        now: DateTime<Utc>,
    ) -> ReviewResult<ReviewStep> {
        if self.phase != ReviewPhase::Active {
            return Err(ReviewError::invalid_transition(self.phase, "submit an explanation"));
        }
        let target = self
            .current
            .take()
            .ok_or_else(|| ReviewError::invalid_transition(self.phase, "submit an explanation without an open prompt"))?;

        if let Some(incident) = self.factory.create(&target.item, explanation, now) {
            log::debug!("Recorded {} for {}", incident.id, incident.service);
            self.incidents.push(incident);
        }
        self.completed_rows.insert(target.index);
        self.cursor += 1;

        Ok(self.advance(dataset, filter))
    }

    /// `Complete -> Idle`. Hands back the summary so the caller can show it and submit the incidents.
    pub fn reset(&mut self) -> ReviewResult<ReviewSummary> {
        if self.phase != ReviewPhase::Complete {
            return Err(ReviewError::invalid_transition(self.phase, "reset the review"));
        }

        let summary = ReviewSummary {
            reviewed_count: self.reviewed_count,
            incidents: std::mem::take(&mut self.incidents),
        };

        self.cursor = 0;
        self.current = None;
        self.completed_rows.clear();
        self.reviewed_count = 0;
        self.phase = ReviewPhase::Idle;

        Ok(summary)
    }

    fn advance(&mut self, dataset: &ComparisonDataset, filter: &VisibilityFilter) -> ReviewStep {
        let targets = Self::targets(dataset, filter);
        let total = targets.len();

        match targets.into_iter().nth(self.cursor) {
            Some(target) => {
                let prompt = ReviewPrompt::new(&target, self.cursor, total);
                self.current = Some(target);
                ReviewStep::Prompt(prompt)
            }
            None => {
                self.phase = ReviewPhase::Complete;
                self.current = None;
                self.reviewed_count = total;
                ReviewStep::Complete(ReviewSummary {
                    reviewed_count: total,
                    incidents: self.incidents.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::cost_status::CostStatus;
    use crate::structs::comparison_item::ComparisonItem;
    use proptest::prelude::*;

    fn item(service: &str, previous: f64, current: f64, status: CostStatus) -> ComparisonItem {
        ComparisonItem {
            service: service.to_string(),
            previous_cost: previous,
            current_cost: current,
            change: current - previous,
            change_percent: (previous > 0.0).then(|| (current - previous) / previous * 100.0),
            status,
        }
    }

    fn dataset(items: Vec<ComparisonItem>) -> ComparisonDataset {
        ComparisonDataset {
            comparison: items,
            ..Default::default()
        }
    }

    fn ec2_only() -> ComparisonDataset {
        dataset(vec![item("EC2", 100.0, 150.0, CostStatus::Increased)])
    }

    #[test]
    fn single_increase_with_explanation_records_incident() {
        let data = ec2_only();
        let filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        let step = session.start(&data, &filter).unwrap();
        let prompt = step.prompt().unwrap();
        assert_eq!(prompt.service, "EC2");
        assert_eq!(prompt.headline(), "+$50.00 (+50.0%)");
        assert_eq!(session.active_row(), Some(0));

        let step = session.submit_explanation("scaled up", &data, &filter, Utc::now()).unwrap();
        assert!(step.is_complete());
        assert_eq!(session.phase(), ReviewPhase::Complete);
        assert!(session.is_completed(0));
        assert_eq!(session.active_row(), None);

        let summary = session.reset().unwrap();
        assert_eq!(summary.reviewed_count, 1);
        assert_eq!(summary.incidents.len(), 1);
        assert_eq!(summary.incidents[0].cost_change, 50.0);
        assert_eq!(summary.incidents[0].change_percent, 50.0);
        assert_eq!(session.phase(), ReviewPhase::Idle);
        assert_eq!(session.cursor(), 0);
        assert!(session.completed_rows().is_empty());
    }

    #[test]
    fn blank_explanation_completes_without_incident() {
        let data = ec2_only();
        let filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        session.start(&data, &filter).unwrap();
        let step = session.submit_explanation("   ", &data, &filter, Utc::now()).unwrap();

        match step {
            ReviewStep::Complete(summary) => {
                assert_eq!(summary.reviewed_count, 1);
                assert!(summary.incidents.is_empty());
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(session.is_completed(0));
    }

    #[test]
    fn nothing_visible_completes_immediately() {
        let data = dataset(vec![
            item("S3", 100.0, 50.0, CostStatus::Decreased),
            item("EC2", 100.0, 150.0, CostStatus::Increased),
        ]);
        let filter = VisibilityFilter::new("s3");
        let mut session = ReviewSession::default();

        let step = session.start(&data, &filter).unwrap();
        assert_eq!(
            step,
            ReviewStep::Complete(ReviewSummary {
                reviewed_count: 0,
                incidents: Vec::new()
            })
        );
        assert_eq!(session.phase(), ReviewPhase::Complete);
    }

    #[test]
    fn filter_change_mid_review_drops_hidden_rows() {
        let data = dataset(vec![
            item("Alpha", 10.0, 20.0, CostStatus::Increased),
            item("Beta", 10.0, 20.0, CostStatus::Increased),
        ]);
        let mut filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        let step = session.start(&data, &filter).unwrap();
        assert_eq!(step.prompt().unwrap().service, "Alpha");

        filter.set_query("alpha");
        let step = session.submit_explanation("expected", &data, &filter, Utc::now()).unwrap();

        match step {
            ReviewStep::Complete(summary) => {
                assert_eq!(summary.reviewed_count, 1);
                assert_eq!(summary.incidents.len(), 1);
                assert_eq!(summary.incidents[0].service, "Alpha");
            }
            other => panic!("Beta should not be presented, got {:?}", other),
        }
    }

    #[test]
    fn presents_rows_in_dataset_order_skipping_non_increases() {
        let data = dataset(vec![
            item("Lambda", 10.0, 30.0, CostStatus::Increased),
            item("Glue", 0.0, 80.0, CostStatus::New),
            item("RDS", 100.0, 50.0, CostStatus::Decreased),
            item("CloudWatch", 10.0, 15.0, CostStatus::Increased),
        ]);
        let filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        let first = session.start(&data, &filter).unwrap();
        assert_eq!(first.prompt().unwrap().row_index, 0);
        assert_eq!(first.prompt().unwrap().progress(), "1/2");

        let second = session.submit_explanation("", &data, &filter, Utc::now()).unwrap();
        assert_eq!(second.prompt().unwrap().row_index, 3);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn invalid_transitions_are_rejected_without_side_effects() {
        let data = ec2_only();
        let filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        assert!(matches!(
            session.submit_explanation("x", &data, &filter, Utc::now()),
            Err(ReviewError::InvalidTransition { phase: ReviewPhase::Idle, .. })
        ));
        assert!(session.reset().is_err());

        session.start(&data, &filter).unwrap();
        assert!(session.start(&data, &filter).is_err());
        assert!(session.reset().is_err());
        assert_eq!(session.active_row(), Some(0));
    }

    #[test]
    fn session_can_run_again_after_reset() {
        let data = ec2_only();
        let filter = VisibilityFilter::default();
        let mut session = ReviewSession::default();

        session.start(&data, &filter).unwrap();
        session.submit_explanation("first pass", &data, &filter, Utc::now()).unwrap();
        session.reset().unwrap();

        let step = session.start(&data, &filter).unwrap();
        assert_eq!(step.prompt().unwrap().service, "EC2");
        assert!(session.incidents().is_empty());
        assert!(!session.is_completed(0));
    }

    proptest! {
        #[test]
        fn invariants_hold_under_random_answers_and_filters(
            statuses in proptest::collection::vec(0u8..5, 0..12),
            actions in proptest::collection::vec((any::<bool>(), 0u8..4), 0..30),
        ) {
            let names = ["alpha", "beta", "gamma", "delta"];
            let items = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let status = match s {
                        0 => CostStatus::New,
                        1 => CostStatus::Increased,
                        2 => CostStatus::Decreased,
                        3 => CostStatus::Unchanged,
                        _ => CostStatus::Removed,
                    };
                    item(&format!("{}-{}", names[i % names.len()], i), 10.0, 20.0, status)
                })
                .collect();
            let data = dataset(items);
            let mut filter = VisibilityFilter::default();
            let mut session = ReviewSession::default();

            let mut step = session.start(&data, &filter).unwrap();
            let mut last_cursor = session.cursor();

            for (explain, filter_choice) in actions {
                if step.is_complete() {
                    break;
                }
                filter.set_query(match filter_choice {
                    0 => "",
                    1 => "alpha",
                    2 => "a",
                    _ => "zzz",
                });
                let text = if explain { "because" } else { "" };
                step = session.submit_explanation(text, &data, &filter, Utc::now()).unwrap();

                prop_assert!(session.cursor() >= last_cursor);
                last_cursor = session.cursor();
                prop_assert!(session.incidents().len() <= session.completed_rows().len());
                for incident in session.incidents() {
                    prop_assert!(data
                        .comparison
                        .iter()
                        .any(|i| i.service == incident.service && i.is_reviewable()));
                }
            }

            if let ReviewStep::Prompt(prompt) = &step {
                prop_assert!(data.comparison[prompt.row_index].is_reviewable());
            }
        }
    }
}

use std::sync::Arc;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::review_step::ReviewStep;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::incident_dispatch::dispatch_incidents;
use crate::services::review_session::ReviewSession;
use crate::services::visibility_filter::VisibilityFilter;
use crate::structs::board::board_view::{BoardView, PromptView};
use crate::structs::board::row_view::RowView;
use crate::structs::comparison_dataset::ComparisonDataset;
use crate::structs::review_prompt::ReviewPrompt;
use crate::structs::review_summary::ReviewSummary;
use crate::traits::comparison_source::ComparisonSource;
use crate::traits::incident_sink::IncidentSink;

/// One browser tab's worth of state: the dataset, its search query and a review session.
struct Board {
    dataset: ComparisonDataset,
    filter: VisibilityFilter,
    session: ReviewSession,
    prompt: Option<ReviewPrompt>,
    last_summary: Option<ReviewSummary>,
}

impl Board {
    fn new(dataset: ComparisonDataset, incident_prefix: &str) -> Self {
        Self {
            dataset,
            filter: VisibilityFilter::default(),
            session: ReviewSession::new(incident_prefix),
            prompt: None,
            last_summary: None,
        }
    }

    fn view(&self, id: &str) -> BoardView {
        let totals = self.dataset.totals();
        let visibility = self.filter.visibility(&self.dataset);
        let active_row = self.session.active_row();

        let rows = self
            .dataset
            .comparison
            .iter()
            .enumerate()
            .map(|(index, item)| {
                RowView::new(
                    index,
                    item,
                    visibility[index],
                    active_row == Some(index),
                    self.session.is_completed(index),
                )
            })
            .collect();

        let total_trend = if totals.change > 0.0 {
            1
        } else if totals.change < 0.0 {
            -1
        } else {
            0
        };

        BoardView {
            id: id.to_string(),
            previous_month: self.dataset.previous_month.name.clone(),
            current_month: self.dataset.current_month.name.clone(),
            previous_total: totals.previous_display(),
            current_total: totals.current_display(),
            total_change: totals.change_display(),
            total_trend,
            query: self.filter.query().to_string(),
            search_summary: self.filter.summary(&self.dataset).to_string(),
            can_start_review: self.filter.has_reviewable_rows(&self.dataset),
            phase: self.session.phase(),
            prompt: self.prompt.as_ref().map(PromptView::from),
            last_summary: self.last_summary.clone(),
            rows,
        }
    }
}

pub struct BoardManager {
    boards: Arc<DashMap<String, Board>>,
    source: Arc<dyn ComparisonSource>,
    sink: Arc<dyn IncidentSink>,
    incident_prefix: String,
}

impl BoardManager {
    pub fn new(source: Arc<dyn ComparisonSource>, sink: Arc<dyn IncidentSink>, incident_prefix: &str) -> Self {
        Self {
            boards: Arc::new(DashMap::new()),
            source,
            sink,
            incident_prefix: incident_prefix.to_string(),
        }
    }

    pub fn create_board(&self, dataset: ComparisonDataset) -> String {
        let board_id = Uuid::new_v4().to_string();
        self.boards.insert(board_id.clone(), Board::new(dataset, &self.incident_prefix));
        board_id
    }

    /// Fetch a fresh comparison and open a board for it.
    pub async fn load_board(&self) -> ReviewResult<String> {
        let dataset = self.source.fetch_comparison().await?;
        log::info!("📊 Loaded {} services for the dashboard", dataset.len());
        Ok(self.create_board(dataset))
    }

    pub fn view(&self, board_id: &str) -> ReviewResult<BoardView> {
        let board = self.boards.get(board_id).ok_or_else(|| not_found(board_id))?;
        Ok(board.view(board_id))
    }

    pub fn set_filter(&self, board_id: &str, query: &str) -> ReviewResult<BoardView> {
        let mut entry = self.boards.get_mut(board_id).ok_or_else(|| not_found(board_id))?;
        let board = entry.value_mut();
        if query.trim().is_empty() {
            board.filter.clear();
        } else {
            board.filter.set_query(query);
        }
        Ok(board.view(board_id))
    }

    pub fn start_review(&self, board_id: &str) -> ReviewResult<BoardView> {
        let mut entry = self.boards.get_mut(board_id).ok_or_else(|| not_found(board_id))?;
        let board = entry.value_mut();

        let step = board.session.start(&board.dataset, &board.filter)?;
        board.last_summary = None;
        self.apply_step(board, step)?;

        Ok(board.view(board_id))
    }

    pub fn submit_explanation(&self, board_id: &str, explanation: &str) -> ReviewResult<BoardView> {
        let mut entry = self.boards.get_mut(board_id).ok_or_else(|| not_found(board_id))?;
        let board = entry.value_mut();

        let step = board
            .session
            .submit_explanation(explanation, &board.dataset, &board.filter, Utc::now())?;
        self.apply_step(board, step)?;

        Ok(board.view(board_id))
    }

    /// Replace the dataset wholesale. Any review in progress is discarded.
    pub async fn reload(&self, board_id: &str) -> ReviewResult<BoardView> {
        if !self.boards.contains_key(board_id) {
            return Err(not_found(board_id));
        }

        let dataset = self.source.fetch_comparison().await?;

        let mut entry = self.boards.get_mut(board_id).ok_or_else(|| not_found(board_id))?;
        let board = entry.value_mut();
        if board.session.current_target().is_some() {
            log::warn!("⚠️ Reload discarded a review in progress on board {}", board_id);
        }
        board.dataset = dataset;
        board.session = ReviewSession::new(&self.incident_prefix);
        board.prompt = None;
        board.last_summary = None;

        Ok(board.view(board_id))
    }

    fn apply_step(&self, board: &mut Board, step: ReviewStep) -> ReviewResult<()> {
        match step {
            ReviewStep::Prompt(prompt) => {
                board.prompt = Some(prompt);
            }
            ReviewStep::Complete(_) => {
                board.prompt = None;
                let summary = board.session.reset()?;
                summary.print_summary();
                dispatch_incidents(Arc::clone(&self.sink), summary.incidents.clone());
                board.last_summary = Some(summary);
            }
        }
        Ok(())
    }
}

fn not_found(board_id: &str) -> ReviewError {
    ReviewError::SessionNotFound {
        id: board_id.to_string(),
    }
}

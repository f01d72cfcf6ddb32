use chrono::Utc;
use crate::enums::reviewer_input::ReviewerInput;
use crate::enums::review_step::ReviewStep;
use crate::errors::ReviewResult;
use crate::services::review_session::ReviewSession;
use crate::services::visibility_filter::VisibilityFilter;
use crate::structs::comparison_dataset::ComparisonDataset;
use crate::structs::review_summary::ReviewSummary;
use crate::traits::explanation_prompter::ExplanationPrompter;
use crate::ui::table_renderer::TableRenderer;

/// Drives a [`ReviewSession`] from a terminal-style prompter until every visible increase is answered.
pub struct ReviewRunner<'a, P: ExplanationPrompter> {
    dataset: &'a ComparisonDataset,
    filter: VisibilityFilter,
    session: ReviewSession,
    renderer: TableRenderer,
    prompter: P,
}

impl<'a, P: ExplanationPrompter> ReviewRunner<'a, P> {
    pub fn new(dataset: &'a ComparisonDataset, filter: VisibilityFilter, incident_prefix: &str, prompter: P) -> Self {
        Self {
            dataset,
            filter,
            session: ReviewSession::new(incident_prefix),
            renderer: TableRenderer::new(),
            prompter,
        }
    }

    pub fn with_renderer(mut self, renderer: TableRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn filter(&self) -> &VisibilityFilter {
        &self.filter
    }

    /// Run the whole review. The session is back to idle when this returns `Ok`.
    ///
    /// A search change keeps the open prompt; the next target is taken from the
    /// rows visible under the new query.
    pub fn run(&mut self) -> ReviewResult<ReviewSummary> {
        let mut step = self.session.start(self.dataset, &self.filter)?;

        loop {
            let prompt = match step {
                ReviewStep::Prompt(prompt) => prompt,
                ReviewStep::Complete(_) => return self.session.reset(),
            };

            step = loop {
                match self.prompter.ask(&prompt)? {
                    ReviewerInput::Filter(query) => {
                        if query.is_empty() {
                            self.filter.clear();
                        } else {
                            self.filter.set_query(query);
                        }
                        let table = self.renderer.render(self.dataset, &self.filter, Some(&self.session));
                        self.prompter.filter_changed(&self.filter.summary(self.dataset), &table);
                    }
                    ReviewerInput::Explanation(text) => {
                        break self
                            .session
                            .submit_explanation(&text, self.dataset, &self.filter, Utc::now())?;
                    }
                }
            };
        }
    }
}

use std::io::{self, BufRead, Write};
use crate::enums::reviewer_input::ReviewerInput;
use crate::enums::search_summary::SearchSummary;
use crate::errors::ReviewResult;
use crate::structs::review_prompt::ReviewPrompt;
use crate::traits::explanation_prompter::ExplanationPrompter;

/// Line-oriented prompter. End of input counts as a blank explanation.
pub struct StdinPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl StdinPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> ExplanationPrompter for StdinPrompter<R, W> {
    fn ask(&mut self, prompt: &ReviewPrompt) -> ReviewResult<ReviewerInput> {
        writeln!(self.writer, "\n🔍 [{}] {}  {}", prompt.progress(), prompt.service, prompt.headline())?;
        writeln!(
            self.writer,
            "   Why did this cost go up? (Enter to skip, {} <text> to search, {} to clear)",
            ReviewerInput::FILTER_COMMAND,
            ReviewerInput::CLEAR_COMMAND
        )?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(ReviewerInput::Explanation(String::new()));
        }

        Ok(ReviewerInput::parse(&line))
    }

    fn filter_changed(&mut self, summary: &SearchSummary, table: &str) {
        if let Err(e) = writeln!(self.writer, "\n{}", table) {
            log::warn!("⚠️ Could not print the filtered table: {}", e);
        }
        log::debug!("Search changed mid-review: {}", summary);
    }
}

impl Default for StdinPrompter<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

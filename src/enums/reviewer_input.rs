/// One line of reviewer input while a prompt is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewerInput {
    /// Explanation text; blank means "reviewed, no incident".
    Explanation(String),
    /// Replace the search query without answering the prompt.
    Filter(String),
}

impl ReviewerInput {
    pub const FILTER_COMMAND: &'static str = "/filter";
    pub const CLEAR_COMMAND: &'static str = "/clear";

    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();

        if trimmed == Self::CLEAR_COMMAND {
            return Self::Filter(String::new());
        }
        if let Some(rest) = trimmed.strip_prefix(Self::FILTER_COMMAND) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return Self::Filter(rest.trim().to_string());
            }
        }

        Self::Explanation(line.to_string())
    }
}

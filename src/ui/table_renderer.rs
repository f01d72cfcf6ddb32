use terminal_size::{terminal_size, Width};
use crate::config::constants::{DEFAULT_TABLE_WIDTH, MIN_SERVICE_COLUMN_WIDTH};
use crate::helpers::currency::{format_change, format_currency, format_percent};
use crate::services::review_session::ReviewSession;
use crate::services::visibility_filter::VisibilityFilter;
use crate::structs::comparison_dataset::ComparisonDataset;

const MONEY_WIDTH: usize = 12;
const PERCENT_WIDTH: usize = 9;
const STATUS_WIDTH: usize = 10;
const MARKER_WIDTH: usize = 2;

/// Plain-text projection of the comparison table for the terminal.
pub struct TableRenderer {
    width: usize,
}

impl TableRenderer {
    pub fn new() -> Self {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_TABLE_WIDTH);
        Self::with_width(width)
    }

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    fn service_width(&self) -> usize {
        let fixed = MARKER_WIDTH + MONEY_WIDTH * 3 + PERCENT_WIDTH + STATUS_WIDTH + 6;
        self.width.saturating_sub(fixed).max(MIN_SERVICE_COLUMN_WIDTH)
    }

    pub fn render_header(&self, dataset: &ComparisonDataset) -> String {
        let totals = dataset.totals();
        let mut out = String::new();
        out.push_str(&format!(
            "📅 {}  →  {}\n",
            dataset.previous_month.period(),
            dataset.current_month.period()
        ));
        out.push_str(&format!(
            "💰 {}: {}   {}: {}   Change: {}\n",
            dataset.previous_month.name,
            totals.previous_display(),
            dataset.current_month.name,
            totals.current_display(),
            totals.change_display()
        ));
        out
    }

    /// Visible rows only. Rows under review are marked `▶`, reviewed rows `✓`.
    pub fn render(&self, dataset: &ComparisonDataset, filter: &VisibilityFilter, session: Option<&ReviewSession>) -> String {
        let service_width = self.service_width();
        let mut out = String::new();

        out.push_str(&format!(
            "{:<mw$} {:<sw$} {:>w$} {:>w$} {:>w$} {:>pw$} {:<stw$}\n",
            "",
            "Service",
            "Previous",
            "Current",
            "Change",
            "Change %",
            "Status",
            mw = MARKER_WIDTH,
            sw = service_width,
            w = MONEY_WIDTH,
            pw = PERCENT_WIDTH,
            stw = STATUS_WIDTH,
        ));
        out.push_str(&"─".repeat(self.width.min(service_width + MARKER_WIDTH + MONEY_WIDTH * 3 + PERCENT_WIDTH + STATUS_WIDTH + 6)));
        out.push('\n');

        let visibility = filter.visibility(dataset);
        for (index, item) in dataset.comparison.iter().enumerate() {
            if !visibility[index] {
                continue;
            }

            let marker = match session {
                Some(s) if s.active_row() == Some(index) => "▶",
                Some(s) if s.is_completed(index) => "✓",
                _ => "",
            };

            out.push_str(&format!(
                "{:<mw$} {:<sw$} {:>w$} {:>w$} {:>w$} {:>pw$} {:<stw$}\n",
                marker,
                truncate(&item.service, service_width),
                format_currency(item.previous_cost),
                format_currency(item.current_cost),
                format_change(item.change),
                format_percent(item.change_percent),
                item.status.label(),
                mw = MARKER_WIDTH,
                sw = service_width,
                w = MONEY_WIDTH,
                pw = PERCENT_WIDTH,
                stw = STATUS_WIDTH,
            ));
        }

        out.push_str(&format!("\n🔎 {}\n", filter.summary(dataset)));
        out
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

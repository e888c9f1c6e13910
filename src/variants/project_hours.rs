/// Project Hours: dated day cells, blank hours and debt lines in TOTAL

use super::{week_columns, ColumnSpec, ContentPolicy};

pub const TITLE: &str = "Project Hours";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectHours;

impl ContentPolicy for ProjectHours {
    fn title(&self) -> &str {
        TITLE
    }

    fn columns(&self) -> Vec<ColumnSpec> {
        week_columns(90.0, Some(80.0))
    }

    fn total_lines(&self, _week: usize) -> Vec<String> {
        vec!["Hours This Week:".to_string(), "Debt:".to_string()]
    }
}

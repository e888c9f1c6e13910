/// Pages Read: dated day cells and a weekly goal in the TOTAL column

use super::{week_columns, ColumnSpec, ContentPolicy};
use crate::{Error, Result};

pub const TITLE: &str = "Pages Read";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagesRead {
    /// Pages to read each week; the same goal is printed on every row
    pub weekly_goal: u32,
}

impl PagesRead {
    pub fn new(weekly_goal: u32) -> Self {
        Self { weekly_goal }
    }
}

impl ContentPolicy for PagesRead {
    fn title(&self) -> &str {
        TITLE
    }

    fn columns(&self) -> Vec<ColumnSpec> {
        week_columns(90.0, Some(80.0))
    }

    fn validate(&self) -> Result<()> {
        if self.weekly_goal == 0 {
            return Err(Error::InvariantViolation(
                "weekly page goal must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    fn total_lines(&self, _week: usize) -> Vec<String> {
        vec![format!("Goal: {}", self.weekly_goal), "Actual:".to_string()]
    }
}

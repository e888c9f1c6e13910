/// Workouts: one fixed label per weekday, repeated on every week row

use super::{week_columns, ColumnSpec, ContentPolicy, DayCell};
use crate::grid::{format_date, DAYS};
use crate::{Error, Result};
use chrono::NaiveDate;

pub const TITLE: &str = "Workouts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workouts {
    /// Monday..Sunday
    pub labels: Vec<String>,
}

impl Workouts {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl ContentPolicy for Workouts {
    fn title(&self) -> &str {
        TITLE
    }

    fn columns(&self) -> Vec<ColumnSpec> {
        week_columns(100.0, None)
    }

    fn validate(&self) -> Result<()> {
        if self.labels.len() != DAYS {
            return Err(Error::InvariantViolation(format!(
                "expected {DAYS} workout labels, got {}",
                self.labels.len()
            )));
        }
        if let Some(day) = self.labels.iter().position(|l| l.trim().is_empty()) {
            return Err(Error::InvariantViolation(format!(
                "workout label for day {day} is empty"
            )));
        }
        Ok(())
    }

    fn day_cell(&self, _week: usize, day: usize, date: NaiveDate) -> DayCell {
        DayCell {
            date: format_date(date),
            label: self.labels.get(day).cloned(),
        }
    }
}

//! Calendar variants and the per-variant cell content policies
//!
//! The renderer only ever sees a [`ContentPolicy`]: the column sequence it
//! returns decides the page layout, and the cell hooks decide what goes in
//! each day and TOTAL cell. Nothing else differs between variants.

pub mod pages_read;
pub mod project_hours;
pub mod workouts;

pub use pages_read::PagesRead;
pub use project_hours::ProjectHours;
pub use workouts::Workouts;

use crate::grid::{format_date, DAYS, DAY_NAMES};
use crate::Result;
use chrono::NaiveDate;

/// Nominal width of the week-number column
pub const WEEK_COLUMN_WEIGHT: f64 = 40.0;

/// What a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 1-based week number
    Week,
    /// Day of the week, 0 = Monday
    Day(usize),
    /// Trailing weekly summary
    Total,
}

/// A named column with its nominal width weight
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub weight: f64,
    /// Whether body cells in this column get the week-number fill
    pub filled: bool,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(name: &str, weight: f64, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            weight,
            filled: kind == ColumnKind::Week,
            kind,
        }
    }
}

/// `[Week, Mon..Sun]` plus an optional trailing TOTAL column
pub fn week_columns(day_weight: f64, total_weight: Option<f64>) -> Vec<ColumnSpec> {
    let mut columns = Vec::with_capacity(DAYS + 2);
    columns.push(ColumnSpec::new("Week", WEEK_COLUMN_WEIGHT, ColumnKind::Week));
    columns.extend(
        DAY_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| ColumnSpec::new(name, day_weight, ColumnKind::Day(i))),
    );
    if let Some(weight) = total_weight {
        columns.push(ColumnSpec::new("TOTAL", weight, ColumnKind::Total));
    }
    columns
}

/// Text for one day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// `MM/DD`, drawn small in the top-right corner
    pub date: String,
    /// Optional text centred in the rest of the cell
    pub label: Option<String>,
}

/// Per-variant content rules.
pub trait ContentPolicy {
    /// Document title, also used as the output file stem
    fn title(&self) -> &str;

    /// Full column sequence, week-number column first
    fn columns(&self) -> Vec<ColumnSpec>;

    /// Reject parameters that should never have reached the renderer
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Content for the day cell at zero-based `(week, day)`
    fn day_cell(&self, week: usize, day: usize, date: NaiveDate) -> DayCell {
        let _ = (week, day);
        DayCell {
            date: format_date(date),
            label: None,
        }
    }

    /// Lines for the TOTAL cell of zero-based `week`; empty when the
    /// variant has no TOTAL column
    fn total_lines(&self, week: usize) -> Vec<String> {
        let _ = week;
        Vec::new()
    }
}

/// Variant selector without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    PagesRead,
    ProjectHours,
    Workouts,
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 3] = [
        CalendarKind::PagesRead,
        CalendarKind::ProjectHours,
        CalendarKind::Workouts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CalendarKind::PagesRead => pages_read::TITLE,
            CalendarKind::ProjectHours => project_hours::TITLE,
            CalendarKind::Workouts => workouts::TITLE,
        }
    }
}

/// A calendar variant together with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarVariant {
    PagesRead(PagesRead),
    ProjectHours(ProjectHours),
    Workouts(Workouts),
}

impl CalendarVariant {
    pub fn kind(&self) -> CalendarKind {
        match self {
            CalendarVariant::PagesRead(_) => CalendarKind::PagesRead,
            CalendarVariant::ProjectHours(_) => CalendarKind::ProjectHours,
            CalendarVariant::Workouts(_) => CalendarKind::Workouts,
        }
    }

    pub fn policy(&self) -> &dyn ContentPolicy {
        match self {
            CalendarVariant::PagesRead(p) => p,
            CalendarVariant::ProjectHours(p) => p,
            CalendarVariant::Workouts(p) => p,
        }
    }
}

//! Ten-week date grid and the start-date helpers that feed it.

use crate::{Error, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Number of tracking weeks on a calendar page
pub const WEEKS: usize = 10;
/// Days per week row, Monday through Sunday
pub const DAYS: usize = 7;

/// Short weekday names used in the header row, Monday first
pub const DAY_NAMES: [&str; DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seven consecutive dates starting on a Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    days: [NaiveDate; DAYS],
}

impl WeekRow {
    fn starting(monday: NaiveDate) -> Result<Self> {
        let mut days = [monday; DAYS];
        for (offset, slot) in days.iter_mut().enumerate().skip(1) {
            *slot = add_days(monday, offset as u64)?;
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[NaiveDate; DAYS] {
        &self.days
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn day(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }
}

/// The full page of dates: [`WEEKS`] rows of [`DAYS`] dates each.
///
/// Built once per document and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    weeks: Vec<WeekRow>,
}

impl CalendarGrid {
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    pub fn start(&self) -> NaiveDate {
        self.weeks[0].monday()
    }

    /// Date at `(week, day)`, both zero based
    pub fn date(&self, week: usize, day: usize) -> Option<NaiveDate> {
        self.weeks.get(week).and_then(|w| w.day(day))
    }
}

/// Build the grid for a Monday `start`: `date(w, d) = start + 7w + d` days.
///
/// A non-Monday start is a caller bug and fails with
/// [`Error::InvariantViolation`]; it is never shifted to a nearby Monday.
pub fn build_grid(start: NaiveDate) -> Result<CalendarGrid> {
    if start.weekday() != Weekday::Mon {
        return Err(Error::InvariantViolation(format!(
            "grid start {} is a {:?}, expected a Monday",
            start,
            start.weekday()
        )));
    }

    let weeks = (0..WEEKS)
        .map(|w| add_days(start, (w * DAYS) as u64).and_then(WeekRow::starting))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "built {} week grid {} .. {}",
        weeks.len(),
        start,
        weeks[WEEKS - 1].days[DAYS - 1]
    );
    Ok(CalendarGrid { weeks })
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        Error::InvariantViolation(format!("{date} + {days} days is outside the supported range"))
    })
}

/// Parse a `MM/DD/YYYY` start date and require it to be a Monday.
pub fn parse_start_date(text: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y").map_err(|_| {
        Error::InvalidDate("Invalid date format. Please use MM/DD/YYYY.".to_string())
    })?;
    if date.weekday() != Weekday::Mon {
        return Err(Error::InvalidDate("Date must be a Monday.".to_string()));
    }
    Ok(date)
}

/// `today` if it already is a Monday, otherwise the following Monday.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    today
        .checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(today)
}

/// `MM/DD`, zero padded
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// `MM/DD/YYYY`, the form accepted by [`parse_start_date`]
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

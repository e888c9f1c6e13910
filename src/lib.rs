//! Tenweek: printable ten-week accountability calendars
//!
//! Lays out a fixed grid (a header row plus ten week rows of Monday..Sunday
//! cells) onto a single landscape US Letter page and renders it to PDF.
//! Three variants share the layout and differ only in cell content:
//!
//! - **Pages Read**: a weekly page goal in the TOTAL column
//! - **Project Hours**: blank hours and debt lines in the TOTAL column
//! - **Workouts**: one label per weekday, no TOTAL column
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use tenweek::{render_pages_read, DirectorySink, DocumentSink, PageConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let doc = render_pages_read(start, 100, &PageConfig::default())?;
//! let path = DirectorySink::new("output").persist(&doc)?;
//! println!("Created: {}", path.display());
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use rendering::layout::is_positive;
use std::path::Path;

pub mod error;
pub use error::{Error, Result};

pub mod grid;
pub mod output;
pub mod prompt;
pub mod renderer;
pub mod rendering;
pub mod variants;

pub use grid::{build_grid, next_monday, parse_start_date, CalendarGrid, WeekRow};
pub use output::{DirectorySink, DocumentSink};
pub use rendering::paint::Rgb;
pub use rendering::Document;
pub use variants::{CalendarKind, CalendarVariant, ContentPolicy, PagesRead, ProjectHours, Workouts};

/// Page and style constants for one render.
///
/// Defaults reproduce the printed calendar: landscape US Letter in points,
/// 20pt margins, a 20pt header row and ten equal week rows below it.
///
/// # Examples
///
/// ```
/// let cfg = tenweek::PageConfig::default();
/// assert_eq!((cfg.page_width, cfg.page_height), (792.0, 612.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Margin on all four sides
    pub margin: f64,
    /// Height of the column header row
    pub header_height: f64,
    /// Fill for every header cell
    pub header_fill: Rgb,
    /// Fill for week-number cells
    pub week_fill: Rgb,
    /// Outline stroke width
    pub line_width: f64,
    pub header_font_size: f64,
    pub week_font_size: f64,
    pub date_font_size: f64,
    pub label_font_size: f64,
    pub total_font_size: f64,
    /// Gap between a day cell's right edge and its date
    pub date_inset_right: f64,
    /// Offset of the date line from the top of a day cell
    pub date_inset_top: f64,
    pub date_line_height: f64,
    /// Horizontal inset of TOTAL text
    pub total_inset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: 11.0 * 72.0,
            page_height: 8.5 * 72.0,
            margin: 20.0,
            header_height: 20.0,
            header_fill: Rgb::LIGHT_BLUE,
            week_fill: Rgb::PEACH,
            line_width: 0.567,
            header_font_size: 10.0,
            week_font_size: 10.0,
            date_font_size: 7.0,
            label_font_size: 9.0,
            total_font_size: 8.0,
            date_inset_right: 1.0,
            date_inset_top: 5.0,
            date_line_height: 5.0,
            total_inset: 2.0,
        }
    }
}

impl PageConfig {
    /// Load overrides from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject pages whose margins leave nothing to draw on
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("header_height", self.header_height),
            ("header_font_size", self.header_font_size),
            ("week_font_size", self.week_font_size),
            ("date_font_size", self.date_font_size),
            ("label_font_size", self.label_font_size),
            ("total_font_size", self.total_font_size),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, v)| !is_positive(*v)) {
            return Err(Error::ConfigError(format!("{name} must be positive, got {value}")));
        }
        let insets = [
            ("margin", self.margin),
            ("line_width", self.line_width),
            ("date_inset_right", self.date_inset_right),
            ("date_inset_top", self.date_inset_top),
            ("date_line_height", self.date_line_height),
            ("total_inset", self.total_inset),
        ];
        if let Some((name, value)) = insets.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
            return Err(Error::ConfigError(format!("{name} must not be negative, got {value}")));
        }
        if 2.0 * self.margin >= self.page_width || 2.0 * self.margin >= self.page_height {
            return Err(Error::ConfigError(format!(
                "{}pt margins leave no drawable area on a {}x{}pt page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}

/// Build the grid from a Monday `start` and render `variant` onto one page
pub fn render_calendar(start: NaiveDate, variant: &CalendarVariant, config: &PageConfig) -> Result<Document> {
    let grid = build_grid(start)?;
    renderer::render(&grid, variant.policy(), config)
}

/// Pages Read calendar with `weekly_goal` printed in every TOTAL cell
pub fn render_pages_read(start: NaiveDate, weekly_goal: u32, config: &PageConfig) -> Result<Document> {
    render_calendar(start, &CalendarVariant::PagesRead(PagesRead::new(weekly_goal)), config)
}

/// Project Hours calendar
pub fn render_project_hours(start: NaiveDate, config: &PageConfig) -> Result<Document> {
    render_calendar(start, &CalendarVariant::ProjectHours(ProjectHours), config)
}

/// Workouts calendar; `labels` are Monday..Sunday and repeat every week
pub fn render_workouts<S: AsRef<str>>(start: NaiveDate, labels: &[S], config: &PageConfig) -> Result<Document> {
    let workouts = Workouts::new(labels.iter().map(|l| l.as_ref().to_string()));
    render_calendar(start, &CalendarVariant::Workouts(workouts), config)
}

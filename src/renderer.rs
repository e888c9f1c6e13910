//! Calendar renderer: header row plus one row per week onto a single page.

use crate::grid::{CalendarGrid, WEEKS};
use crate::rendering::layout::{PageGeometry, Rect};
use crate::rendering::metrics::string_width;
use crate::rendering::paint::{Align, FontWeight, PaintCommand, Rgb};
use crate::rendering::Document;
use crate::variants::{ColumnKind, ColumnSpec, ContentPolicy, DayCell};
use crate::{Error, PageConfig, Result};

/// Render `grid` with `policy` onto one page described by `config`.
///
/// Fails without producing a document when the policy parameters or the
/// geometry are invalid.
pub fn render(grid: &CalendarGrid, policy: &dyn ContentPolicy, config: &PageConfig) -> Result<Document> {
    policy.validate()?;
    if grid.weeks().len() != WEEKS {
        return Err(Error::InvariantViolation(format!(
            "expected {WEEKS} week rows, got {}",
            grid.weeks().len()
        )));
    }

    let columns = policy.columns();
    let weights: Vec<f64> = columns.iter().map(|c| c.weight).collect();
    let geometry = PageGeometry::compute(config, &weights, WEEKS)?;

    let mut painter = Painter {
        config,
        doc: Document::empty(policy.title(), config.page_width, config.page_height, config.line_width),
    };

    for (col, spec) in columns.iter().enumerate() {
        let cell = geometry.header_cell(col);
        painter.fill(cell, config.header_fill);
        painter.text(cell, &spec.name, config.header_font_size, FontWeight::Bold, Align::Center);
    }

    for (week, row) in grid.weeks().iter().enumerate() {
        for (col, spec) in columns.iter().enumerate() {
            let cell = geometry.week_cell(week, col);
            painter.body_cell(cell, spec);
            match spec.kind {
                ColumnKind::Week => {
                    let number = (week + 1).to_string();
                    painter.text(cell, &number, config.week_font_size, FontWeight::Regular, Align::Center);
                }
                ColumnKind::Day(day) => {
                    let date = row.day(day).ok_or_else(|| {
                        Error::InvariantViolation(format!("no day {day} in week {week}"))
                    })?;
                    painter.day(cell, &policy.day_cell(week, day, date));
                }
                ColumnKind::Total => painter.total(cell, &policy.total_lines(week)),
            }
        }
    }

    log::debug!(
        "rendered '{}' from {}: {} paint commands",
        policy.title(),
        grid.start(),
        painter.doc.commands.len()
    );
    Ok(painter.doc)
}

struct Painter<'a> {
    config: &'a PageConfig,
    doc: Document,
}

impl Painter<'_> {
    fn fill(&mut self, rect: Rect, fill: Rgb) {
        self.doc.commands.push(PaintCommand::FillRect { rect, fill });
    }

    fn body_cell(&mut self, rect: Rect, spec: &ColumnSpec) {
        if spec.filled {
            self.fill(rect, self.config.week_fill);
        } else {
            self.doc.commands.push(PaintCommand::StrokeRect { rect });
        }
    }

    fn text(&mut self, rect: Rect, text: &str, size: f64, weight: FontWeight, align: Align) {
        self.doc.commands.push(PaintCommand::Text {
            rect,
            text: text.to_string(),
            size,
            weight,
            align,
        });
    }

    fn day(&mut self, cell: Rect, content: &DayCell) {
        let c = self.config;
        let size = c.date_font_size;
        let width = string_width(&content.date, size, FontWeight::Regular);
        let date_box = Rect::new(
            cell.right() - width - c.date_inset_right,
            cell.y + c.date_inset_top,
            width,
            c.date_line_height,
        );
        self.text(date_box, &content.date, size, FontWeight::Regular, Align::Right);

        if let Some(label) = &content.label {
            let label_box = Rect::new(
                cell.x,
                cell.y + c.date_inset_top,
                cell.width,
                (cell.height - c.date_inset_top).max(0.0),
            );
            self.text(label_box, label, c.label_font_size, FontWeight::Regular, Align::Center);
        }
    }

    fn total(&mut self, cell: Rect, lines: &[String]) {
        if lines.is_empty() {
            return;
        }
        let inset = self.config.total_inset;
        let line_height = cell.height / lines.len() as f64;
        for (i, line) in lines.iter().enumerate() {
            let line_box =
                Rect::new(cell.x, cell.y + i as f64 * line_height, cell.width, line_height).inset(inset, 0.0);
            self.text(line_box, line, self.config.total_font_size, FontWeight::Regular, Align::Left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::variants::{PagesRead, ProjectHours, Workouts};
    use chrono::NaiveDate;

    fn grid() -> CalendarGrid {
        build_grid(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()).unwrap()
    }

    fn fills(doc: &Document) -> Vec<Rgb> {
        doc.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillRect { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn header_is_uniformly_filled() {
        let doc = render(&grid(), &PagesRead::new(50), &PageConfig::default()).unwrap();
        let fills = fills(&doc);
        // 9 header cells, then one week-number cell per row
        assert_eq!(fills.len(), 9 + 10);
        assert!(fills[..9].iter().all(|f| *f == Rgb::LIGHT_BLUE));
        assert!(fills[9..].iter().all(|f| *f == Rgb::PEACH));
    }

    #[test]
    fn pages_read_shows_goal_and_dates() {
        let doc = render(&grid(), &PagesRead::new(50), &PageConfig::default()).unwrap();
        let texts: Vec<_> = doc.texts().collect();
        assert_eq!(texts.iter().filter(|t| **t == "Goal: 50").count(), 10);
        assert_eq!(texts.iter().filter(|t| **t == "Actual:").count(), 10);
        assert!(texts.contains(&"01/06"));
        assert!(texts.contains(&"01/12"));
        assert!(texts.contains(&"03/10"));
        assert!(texts.contains(&"10"));
    }

    #[test]
    fn date_sits_in_the_top_right_corner() {
        let config = PageConfig::default();
        let doc = render(&grid(), &ProjectHours, &config).unwrap();
        let date = doc
            .commands
            .iter()
            .find(|c| c.text() == Some("01/06"))
            .unwrap();
        let PaintCommand::Text { rect, size, align, .. } = date else {
            panic!("expected text");
        };
        assert_eq!(*size, 7.0);
        assert_eq!(*align, Align::Right);
        // right edge of Monday's column, minus the 1pt inset
        let geometry = PageGeometry::compute(&config, &[40.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 80.0], 10)
            .unwrap();
        let monday = geometry.week_cell(0, 1);
        assert!((rect.right() - (monday.right() - 1.0)).abs() < 1e-9);
        assert!((rect.y - (monday.y + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn workouts_have_labels_and_no_total() {
        let labels = ["4 Miles", "Weights", "Rest", "4 Miles", "Weights", "Rest", "Rest"];
        let doc = render(&grid(), &Workouts::new(labels), &PageConfig::default()).unwrap();
        let texts: Vec<_> = doc.texts().collect();
        assert!(!texts.contains(&"TOTAL"));
        assert_eq!(texts.iter().filter(|t| **t == "Weights").count(), 20);
        assert_eq!(texts.iter().filter(|t| **t == "Rest").count(), 30);
        // 8 header fills + 10 week fills, 70 day outlines
        let outlines = doc
            .commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::StrokeRect { .. }))
            .count();
        assert_eq!(outlines, 70);
    }

    #[test]
    fn bad_parameters_produce_no_document() {
        let err = render(&grid(), &Workouts::new(["Run"; 5]), &PageConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));

        let config = PageConfig {
            header_height: 600.0,
            ..Default::default()
        };
        let err = render(&grid(), &ProjectHours, &config).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}

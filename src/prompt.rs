//! Interactive prompts for inputs not given on the command line.
//!
//! Every prompt loops until it gets a usable answer and only fails when the
//! input runs dry.

use crate::grid::{format_full_date, parse_start_date, DAY_NAMES};
use crate::variants::CalendarKind;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput("input closed before an answer was given".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Offer the next Monday after `today` or a custom Monday
pub fn prompt_date<R: BufRead, W: Write>(input: &mut R, out: &mut W, today: NaiveDate) -> Result<NaiveDate> {
    let next = crate::grid::next_monday(today);
    loop {
        writeln!(out, "\nChoose start date:")?;
        writeln!(out, "  1. Use next Monday ({})", format_full_date(next))?;
        writeln!(out, "  2. Enter a custom Monday")?;
        match ask(input, out, "Enter choice (1 or 2): ")?.as_str() {
            "1" => return Ok(next),
            "2" => {
                let text = ask(input, out, "Enter start date (MM/DD/YYYY, must be a Monday): ")?;
                match parse_start_date(&text) {
                    Ok(date) => return Ok(date),
                    Err(e) => writeln!(out, "  Error: {e}")?,
                }
            }
            _ => writeln!(out, "  Error: Invalid choice. Please enter 1 or 2.")?,
        }
    }
}

/// Comma separated picks from the numbered list, or `4` for all.
/// Duplicates are dropped and the first-seen order is kept.
pub fn prompt_calendars<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<CalendarKind>> {
    loop {
        writeln!(out, "\nWhich calendar(s) would you like to generate?")?;
        for (i, kind) in CalendarKind::ALL.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, kind.title())?;
        }
        writeln!(out, "  4. All")?;
        let answer = ask(input, out, "Enter choice(s) separated by commas (e.g. 1,3): ")?;
        if answer == "4" {
            return Ok(CalendarKind::ALL.to_vec());
        }

        let selected = parse_calendar_choices(&answer);
        if !selected.is_empty() {
            return Ok(selected);
        }
        writeln!(out, "  Error: Invalid selection. Please try again.")?;
    }
}

fn parse_calendar_choices(answer: &str) -> Vec<CalendarKind> {
    let mut selected = Vec::new();
    for choice in answer.split(',') {
        let kind = match choice.trim() {
            "1" => CalendarKind::PagesRead,
            "2" => CalendarKind::ProjectHours,
            "3" => CalendarKind::Workouts,
            _ => continue,
        };
        if !selected.contains(&kind) {
            selected.push(kind);
        }
    }
    selected
}

/// Positive weekly page goal
pub fn prompt_goal<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<u32> {
    loop {
        let answer = ask(input, out, "\nEnter weekly page goal (e.g. 100): ")?;
        match answer.parse::<i64>() {
            Ok(goal) if goal > 0 => match u32::try_from(goal) {
                Ok(goal) => return Ok(goal),
                Err(_) => writeln!(out, "  Error: Please enter a valid number.")?,
            },
            Ok(_) => writeln!(out, "  Error: Goal must be a positive number.")?,
            Err(_) => writeln!(out, "  Error: Please enter a valid number.")?,
        }
    }
}

/// One non-empty label per weekday, Monday first
pub fn prompt_labels<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    writeln!(out, "\nEnter workout labels for each day (these repeat every week):")?;
    let mut labels = Vec::with_capacity(DAY_NAMES.len());
    for day in DAY_NAMES {
        loop {
            let label = ask(input, out, &format!("  {day}: "))?;
            if !label.is_empty() {
                labels.push(label);
                break;
            }
            writeln!(out, "  Error: Label cannot be empty.")?;
        }
    }
    Ok(labels)
}

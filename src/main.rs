use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tenweek::prompt::{prompt_calendars, prompt_date, prompt_goal, prompt_labels};
use tenweek::{
    next_monday, parse_start_date, CalendarKind, CalendarVariant, DirectorySink, DocumentSink, PageConfig,
    PagesRead, ProjectHours, Workouts,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CalendarArg {
    PagesRead,
    ProjectHours,
    Workouts,
    All,
}

/// Generate printable ten-week accountability calendars as PDFs.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "tenweek", version)]
struct Cli {
    /// Start date, MM/DD/YYYY, must be a Monday
    #[arg(long, conflicts_with = "next_monday")]
    start: Option<String>,

    /// Start on the next Monday (today if today is a Monday)
    #[arg(long)]
    next_monday: bool,

    /// Calendars to generate; repeat or comma separate
    #[arg(long = "calendar", value_enum, value_delimiter = ',')]
    calendars: Vec<CalendarArg>,

    /// Weekly page goal for the Pages Read calendar
    #[arg(long)]
    goal: Option<u32>,

    /// Seven workout labels, Monday..Sunday, comma separated
    #[arg(long, value_delimiter = ',')]
    labels: Vec<String>,

    /// Directory the PDFs are written to
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// JSON file overriding page layout constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn selected_kinds(args: &[CalendarArg]) -> Vec<CalendarKind> {
    let mut kinds = Vec::new();
    for arg in args {
        let picked: &[CalendarKind] = match arg {
            CalendarArg::PagesRead => &[CalendarKind::PagesRead],
            CalendarArg::ProjectHours => &[CalendarKind::ProjectHours],
            CalendarArg::Workouts => &[CalendarKind::Workouts],
            CalendarArg::All => &CalendarKind::ALL,
        };
        for kind in picked {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
    }
    kinds
}

fn resolve_start<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    if cli.next_monday {
        return Ok(next_monday(today));
    }
    match &cli.start {
        Some(text) => parse_start_date(text).with_context(|| format!("bad --start value '{text}'")),
        None => Ok(prompt_date(input, out, today)?),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PageConfig::from_json_file(path)
            .with_context(|| format!("loading page config from {}", path.display()))?,
        None => PageConfig::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Accountability Calendars Generator ===")?;

    let start = resolve_start(&cli, &mut input, &mut out, Local::now().date_naive())?;
    let mut kinds = selected_kinds(&cli.calendars);
    if kinds.is_empty() {
        kinds = prompt_calendars(&mut input, &mut out)?;
    }

    let mut variants = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let variant = match kind {
            CalendarKind::PagesRead => {
                let goal = match cli.goal {
                    Some(0) => bail!("--goal must be a positive number"),
                    Some(goal) => goal,
                    None => prompt_goal(&mut input, &mut out)?,
                };
                CalendarVariant::PagesRead(PagesRead::new(goal))
            }
            CalendarKind::ProjectHours => CalendarVariant::ProjectHours(ProjectHours),
            CalendarKind::Workouts => {
                let labels = if cli.labels.is_empty() {
                    prompt_labels(&mut input, &mut out)?
                } else {
                    cli.labels.iter().map(|l| l.trim().to_string()).collect()
                };
                CalendarVariant::Workouts(Workouts::new(labels))
            }
        };
        variants.push(variant);
    }

    writeln!(out, "\nGenerating calendars...")?;
    let mut sink = DirectorySink::new(&cli.output);
    for variant in &variants {
        let title = variant.policy().title();
        let doc = tenweek::render_calendar(start, variant, &config)
            .with_context(|| format!("rendering {title}"))?;
        let path = sink
            .persist(&doc)
            .with_context(|| format!("writing {title} to {}", cli.output.display()))?;
        writeln!(out, "  Created: {}", path.display())?;
    }

    writeln!(out, "\nDone!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn all_expands_and_dedupes() {
        let kinds = selected_kinds(&[CalendarArg::Workouts, CalendarArg::All]);
        assert_eq!(
            kinds,
            vec![CalendarKind::Workouts, CalendarKind::PagesRead, CalendarKind::ProjectHours]
        );
        assert!(selected_kinds(&[]).is_empty());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "tenweek",
            "--start",
            "03/02/2026",
            "--calendar",
            "pages-read,workouts",
            "--goal",
            "100",
            "--labels",
            "Run,Lift,Rest,Run,Lift,Rest,Rest",
        ])
        .unwrap();
        assert_eq!(cli.calendars, vec![CalendarArg::PagesRead, CalendarArg::Workouts]);
        assert_eq!(cli.goal, Some(100));
        assert_eq!(cli.labels.len(), 7);
        assert_eq!(cli.output, PathBuf::from("output"));

        assert!(Cli::try_parse_from(["tenweek", "--start", "03/02/2026", "--next-monday"]).is_err());
    }

    #[test]
    fn start_from_flag_skips_prompt() {
        let cli = Cli::try_parse_from(["tenweek", "--start", "03/02/2026"]).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let start = resolve_start(&cli, &mut input, &mut out, today).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert!(out.is_empty());

        let cli = Cli::try_parse_from(["tenweek", "--start", "03/03/2026"]).unwrap();
        assert!(resolve_start(&cli, &mut input, &mut out, today).is_err());
    }
}

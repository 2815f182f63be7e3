use std::str::FromStr;

use crate::prelude::{println, *};
use colored::Colorize;
use pagewise_core::{Paginator, PaginatorView};
use serde::Serialize;

use crate::render::colored_bar;

#[derive(Debug, clap::Parser)]
#[command(name = "nav")]
#[command(about = "Step a paginator through a sequence of moves")]
pub struct App {
    /// Total number of pages
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// Moves to apply in order: next, prev, first, last or a page number
    #[arg(value_name = "STEPS")]
    pub steps: Vec<String>,

    /// Page to start on
    #[arg(short, long, default_value = "1")]
    pub start: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A single paginator move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Next,
    Prev,
    First,
    Last,
    Goto(usize),
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "n" => Ok(Step::Next),
            "prev" | "previous" | "p" => Ok(Step::Prev),
            "first" => Ok(Step::First),
            "last" => Ok(Step::Last),
            other => other
                .parse::<usize>()
                .map(Step::Goto)
                .map_err(|_| Error::UnknownStep(s.to_string())),
        }
    }
}

/// Outcome of one move; `error` is set when the move was refused
#[derive(Debug, Serialize, Clone)]
pub struct NavRecord {
    pub step: Step,
    pub view: PaginatorView,
    pub error: Option<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let steps = app
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut paginator =
        Paginator::at(app.start, app.count, global.visible).map_err(Error::from)?;

    if global.verbose {
        println!(
            "Start: {} (visible count {})",
            colored_bar(&paginator.view()),
            paginator.visible_count()
        );
    }

    let records = nav_data(&mut paginator, &steps);

    if app.json {
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", format_nav_text(&records));
    }

    Ok(())
}

/// Apply every step to the paginator, recording the state after each one
///
/// A refused step leaves the paginator where it was and the walk continues.
pub fn nav_data(paginator: &mut Paginator, steps: &[Step]) -> Vec<NavRecord> {
    steps
        .iter()
        .map(|&step| {
            let outcome = match step {
                Step::Next => paginator.go_to_next(),
                Step::Prev => paginator.go_to_previous(),
                Step::First => paginator.go_to(1),
                Step::Last => paginator.go_to(paginator.page_count()),
                Step::Goto(page) => paginator.go_to(page),
            };

            if let Err(err) = &outcome {
                log::info!("step {step:?} refused: {err}");
            }

            NavRecord {
                step,
                view: paginator.view(),
                error: outcome.err().map(|e| e.to_string()),
            }
        })
        .collect()
}

fn format_nav_text(records: &[NavRecord]) -> String {
    let mut result = String::new();

    for record in records {
        let step = match record.step {
            Step::Goto(page) => format!("goto {page}"),
            other => format!("{other:?}").to_lowercase(),
        };

        result.push_str(&format!("{:>8}  {}", step.yellow(), colored_bar(&record.view)));
        if let Some(err) = &record.error {
            result.push_str(&format!("  {}", err.red()));
        }
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("next".parse::<Step>().unwrap(), Step::Next);
        assert_eq!("P".parse::<Step>().unwrap(), Step::Prev);
        assert_eq!("last".parse::<Step>().unwrap(), Step::Last);
        assert_eq!("12".parse::<Step>().unwrap(), Step::Goto(12));
    }

    #[test]
    fn test_parse_unknown_step() {
        let err = "sideways".parse::<Step>().unwrap_err();
        assert!(matches!(err, Error::UnknownStep(s) if s == "sideways"));
    }

    #[test]
    fn test_nav_data_walk() {
        let mut paginator = Paginator::new(18, 5).unwrap();
        let steps = [Step::Next, Step::Goto(9), Step::Last, Step::Prev];
        let records = nav_data(&mut paginator, &steps);

        let pages: Vec<usize> = records.iter().map(|r| r.view.current_page).collect();
        assert_eq!(pages, vec![2, 9, 18, 17]);
        assert_eq!(records[1].view.triggers, vec![1, 8, 9, 10, 18]);
        assert!(records.iter().all(|r| r.error.is_none()));
    }

    #[test]
    fn test_nav_data_refused_step_keeps_state() {
        let mut paginator = Paginator::new(3, 5).unwrap();
        let records = nav_data(&mut paginator, &[Step::Prev, Step::Goto(7), Step::Next]);

        assert!(records[0].error.is_some());
        assert_eq!(records[0].view.current_page, 1);
        assert!(records[1].error.is_some());
        assert_eq!(records[1].view.current_page, 1);
        assert_eq!(records[2].view.current_page, 2);
    }

    #[test]
    fn test_nav_record_serializes_goto() {
        let mut paginator = Paginator::new(18, 5).unwrap();
        let records = nav_data(&mut paginator, &[Step::Goto(4)]);
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0]["step"], serde_json::json!({ "goto": 4 }));
        assert_eq!(json[0]["error"], serde_json::Value::Null);
    }
}

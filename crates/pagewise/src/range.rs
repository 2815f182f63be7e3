use crate::prelude::{println, *};
use colored::Colorize;
use pagewise_core::{Paginator, PaginatorView};

use crate::render::colored_bar;

#[derive(Debug, clap::Parser)]
#[command(name = "range")]
#[command(about = "Print the page triggers for a current page and page count")]
pub struct App {
    /// Current page (1-indexed)
    #[arg(value_name = "CURRENT")]
    pub current: usize,

    /// Total number of pages
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let view = range_data(app.current, app.count, global.visible)?;

    if global.verbose {
        println!(
            "Window: {:?} (visible count {})",
            view.window, global.visible
        );
    }

    if app.json {
        println!("{}", format_range_json(&view)?);
    } else {
        println!("{}", format_range_text(&view));
    }

    Ok(())
}

/// Build the paginator view for a single (current, count) pair
pub fn range_data(current: usize, count: usize, visible: usize) -> Result<PaginatorView> {
    let paginator = Paginator::at(current, count, visible).map_err(Error::from)?;
    log::debug!("triggers for {current}/{count}: {:?}", paginator.triggers());
    Ok(paginator.view())
}

fn format_range_json(view: &PaginatorView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_range_text(view: &PaginatorView) -> String {
    format!(
        "{} {} {} {}\n{}",
        "Page".bright_white(),
        view.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        view.page_count.to_string().bright_cyan().bold(),
        colored_bar(view)
    )
}

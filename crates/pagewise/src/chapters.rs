use std::path::PathBuf;

use crate::prelude::{println, *};
use colored::Colorize;
use pagewise_core::chapters::{list_chapters, page_chapters, ChapterPage};

use crate::render::colored_bar;

#[derive(Debug, clap::Parser)]
#[command(name = "chapters")]
#[command(about = "List markdown chapters one page at a time")]
pub struct App {
    /// Directory containing the markdown chapters
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Number of chapters per page
    #[arg(short, long, env = "PAGEWISE_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Reading chapters from {}", app.dir.display());
    }

    let chapter_page = chapters_data(app.dir.clone(), app.page, app.limit, global.visible).await?;

    if app.json {
        let json = serde_json::to_string_pretty(&chapter_page)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        output_formatted(&chapter_page);
    }

    Ok(())
}

/// Reads the chapter directory and returns the requested page of it
pub async fn chapters_data(
    dir: PathBuf,
    page: usize,
    limit: usize,
    visible: usize,
) -> Result<ChapterPage> {
    let scan_dir = dir.clone();
    let chapters = tokio::task::spawn_blocking(move || list_chapters(&scan_dir))
        .await
        .context("Chapter scan task failed")?
        .map_err(|e| Error::Chapters(e.to_string()))?;

    log::debug!("found {} chapters in {}", chapters.len(), dir.display());

    let dir_arg = dir.display().to_string();
    let chapter_page =
        page_chapters(chapters, &dir_arg, page, limit, visible).map_err(Error::from)?;

    Ok(chapter_page)
}

fn output_formatted(chapter_page: &ChapterPage) {
    let view = &chapter_page.pagination;

    println!(
        "\n{}\n",
        format!(
            "CHAPTERS (Page {} of {}, {} total)",
            view.current_page, view.page_count, chapter_page.total_items
        )
        .bright_cyan()
        .bold()
    );

    if chapter_page.chapters.is_empty() {
        println!("{}", "No chapters on this page.".yellow());
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["#", "SLUG", "TITLE"]);

        let offset = (view.current_page - 1) * chapter_page.limit;
        for (idx, chapter) in chapter_page.chapters.iter().enumerate() {
            let number = offset + idx + 1;
            table.add_row(prettytable::row![number, chapter.slug, chapter.title]);
        }

        table.printstd();
    }

    println!("\n{}", colored_bar(view));

    if let Some(cmd) = &chapter_page.next_page_command {
        println!("  {}: {}", "Next page".green(), cmd.cyan());
    }
    if let Some(cmd) = &chapter_page.prev_page_command {
        println!("  {}: {}", "Previous page".green(), cmd.cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_chapters_data_pages_directory() {
        let temp_dir = TempDir::new().unwrap();
        for n in 1..=12 {
            fs::write(
                temp_dir.path().join(format!("{n:02}-recipe.md")),
                format!("# Recipe {n}\n"),
            )
            .unwrap();
        }

        let page = chapters_data(temp_dir.path().to_path_buf(), 2, 5, 5)
            .await
            .unwrap();

        assert_eq!(page.total_items, 12);
        assert_eq!(page.chapters.len(), 5);
        assert_eq!(page.chapters[0].title, "Recipe 6");
        assert_eq!(page.pagination.triggers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_chapters_data_page_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("01-intro.md"), "# Intro\n").unwrap();

        let result = chapters_data(temp_dir.path().to_path_buf(), 2, 10, 5).await;
        assert!(result.is_err());
    }
}

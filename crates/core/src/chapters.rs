//! Chapter listing
//!
//! Functions for enumerating the markdown chapters of a cookbook directory.
//! The chapter list is the collection the paginator pages through.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::bounds::{page_bounds, page_count_for};
use crate::error::PaginationError;
use crate::paginator::{Paginator, PaginatorView};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)[ \t#]*$").expect("valid title regex"));

/// Error type for chapter operations
#[derive(Debug)]
pub enum ChapterError {
    Io(String),
    NotADirectory(String),
}

impl std::fmt::Display for ChapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChapterError::Io(msg) => write!(f, "IO error: {}", msg),
            ChapterError::NotADirectory(path) => write!(f, "Not a directory: {}", path),
        }
    }
}

impl std::error::Error for ChapterError {}

impl From<std::io::Error> for ChapterError {
    fn from(err: std::io::Error) -> Self {
        ChapterError::Io(err.to_string())
    }
}

/// A single markdown chapter
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// File stem, e.g. `02-pagination`
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
}

/// One page of the chapter list with its paginator state
#[derive(Debug, Serialize, Clone)]
pub struct ChapterPage {
    pub chapters: Vec<Chapter>,
    pub total_items: usize,
    pub limit: usize,
    pub pagination: PaginatorView,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Extract the first level-one heading of a markdown document
///
/// Closing hashes (`# Title #`) are dropped.
pub fn extract_title(markdown: &str) -> Option<String> {
    TITLE_RE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// List all markdown chapters in the given directory
///
/// Returns chapters sorted by file name. A missing directory yields an empty
/// list; chapters without a heading use their slug as title.
pub fn list_chapters(chapters_dir: &Path) -> Result<Vec<Chapter>, ChapterError> {
    if !chapters_dir.exists() {
        return Ok(Vec::new());
    }

    if !chapters_dir.is_dir() {
        return Err(ChapterError::NotADirectory(
            chapters_dir.display().to_string(),
        ));
    }

    let mut chapters = Vec::new();

    for entry in fs::read_dir(chapters_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            if let Some(slug) = path.file_stem().and_then(|n| n.to_str()) {
                let content = fs::read_to_string(&path)?;
                let title = extract_title(&content).unwrap_or_else(|| slug.to_string());
                chapters.push(Chapter {
                    slug: slug.to_string(),
                    title,
                    path: path.clone(),
                });
            }
        }
    }

    chapters.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(chapters)
}

/// Slice a chapter list down to one page
///
/// Takes the full sorted chapter list and constructs a ChapterPage with:
/// - The chapters of the requested page
/// - Paginator state, including the trigger sequence
/// - Navigation commands
pub fn page_chapters(
    chapters: Vec<Chapter>,
    dir: &str,
    page: usize,
    limit: usize,
    visible_count: usize,
) -> Result<ChapterPage, PaginationError> {
    let total_items = chapters.len();
    let page_count = page_count_for(total_items, limit)?;
    let (start, end) = page_bounds(total_items, page, limit)?;
    let paginator = Paginator::at(page, page_count, visible_count)?;

    let dir = shlex::try_quote(dir).map_err(|e| {
        PaginationError::invalid(format!("cannot quote directory {dir:?}: {e}"))
    })?;
    let command =
        |target: usize| format!("pagewise chapters {dir} --page {target} --limit {limit}");

    let next_page_command = (!paginator.is_last_page()).then(|| command(page + 1));
    let prev_page_command = (!paginator.is_first_page()).then(|| command(page - 1));

    Ok(ChapterPage {
        chapters: chapters.into_iter().skip(start).take(end - start).collect(),
        total_items,
        limit,
        pagination: paginator.view(),
        next_page_command,
        prev_page_command,
    })
}

//! Visible page range computation
//!
//! Pure functions that decide which page numbers a paginator renders as
//! clickable triggers. The first and last pages are always present; the
//! remaining slots form a window around the current page whose shape depends
//! on where the current page sits relative to the half-window `threshold`.

use std::iter::once;

use serde::Serialize;

use crate::error::PaginationError;

/// Number of triggers rendered when the caller does not ask for another count
pub const DEFAULT_VISIBLE_COUNT: usize = 5;

/// Which layout the trigger sequence takes for a given current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    /// Every page fits, no compression.
    All,
    /// Current page is close to page 1.
    Start,
    /// Current page is close to the last page.
    End,
    /// Current page is centered between the first and last page.
    Middle,
}

/// Half-width of the visible window, rounded down
pub fn threshold(visible_count: usize) -> usize {
    visible_count.saturating_sub(1) / 2
}

/// Check the inputs of [`compute_visible_pages`]
///
/// Returns `InvalidArgument` when `page_count < 1`, `current_page` is outside
/// `[1, page_count]`, or `visible_count` is smaller than 3 or even.
pub fn validate(
    current_page: usize,
    page_count: usize,
    visible_count: usize,
) -> Result<(), PaginationError> {
    if page_count < 1 {
        return Err(PaginationError::invalid("page count must be at least 1"));
    }

    if current_page < 1 || current_page > page_count {
        return Err(PaginationError::invalid(format!(
            "current page {current_page} is out of range 1..={page_count}"
        )));
    }

    validate_visible_count(visible_count)
}

/// Check that a visible count is odd and at least 3
pub fn validate_visible_count(visible_count: usize) -> Result<(), PaginationError> {
    if visible_count < 3 || visible_count % 2 == 0 {
        return Err(PaginationError::invalid(format!(
            "visible count must be an odd number >= 3, got {visible_count}"
        )));
    }

    Ok(())
}

/// Current page sits within the first `threshold + 1` pages
pub fn is_near_start(current_page: usize, threshold: usize) -> bool {
    current_page <= threshold + 1
}

/// Current page sits within the last `threshold` pages
// current_page >= page_count - threshold + 1, rearranged to stay in unsigned range
pub fn is_near_end(current_page: usize, page_count: usize, threshold: usize) -> bool {
    current_page + threshold > page_count
}

pub fn is_middle(current_page: usize, page_count: usize, threshold: usize) -> bool {
    current_page > threshold + 1 && current_page + threshold <= page_count
}

/// Classify the current page into one of the trigger layouts
pub fn classify(
    current_page: usize,
    page_count: usize,
    visible_count: usize,
) -> Result<Window, PaginationError> {
    validate(current_page, page_count, visible_count)?;
    Ok(window_for(current_page, page_count, visible_count))
}

/// Layout for inputs that already passed [`validate`]
pub(crate) fn window_for(current_page: usize, page_count: usize, visible_count: usize) -> Window {
    if page_count <= visible_count {
        return Window::All;
    }

    let threshold = threshold(visible_count);

    if is_near_start(current_page, threshold) {
        Window::Start
    } else if is_middle(current_page, page_count, threshold) {
        Window::Middle
    } else {
        debug_assert!(is_near_end(current_page, page_count, threshold));
        Window::End
    }
}

/// Compute the ordered page numbers to render as pagination triggers
///
/// # Arguments
/// * `current_page` - 1-indexed page the user is on
/// * `page_count` - Total number of pages
/// * `visible_count` - Maximum number of triggers, odd and >= 3
///
/// # Returns
/// A strictly increasing sequence starting at 1 and ending at `page_count`
///
/// # Example
///
/// ```
/// use pagewise_core::range::compute_visible_pages;
///
/// assert_eq!(compute_visible_pages(9, 18, 5).unwrap(), vec![1, 8, 9, 10, 18]);
/// assert_eq!(compute_visible_pages(1, 1, 5).unwrap(), vec![1]);
/// ```
pub fn compute_visible_pages(
    current_page: usize,
    page_count: usize,
    visible_count: usize,
) -> Result<Vec<usize>, PaginationError> {
    let window = classify(current_page, page_count, visible_count)?;
    Ok(pages_for(window, current_page, page_count, visible_count))
}

/// Trigger sequence for a layout computed by [`window_for`]
pub(crate) fn pages_for(
    window: Window,
    current_page: usize,
    page_count: usize,
    visible_count: usize,
) -> Vec<usize> {
    match window {
        Window::All => (1..=page_count).collect(),
        Window::Start => (1..visible_count).chain(once(page_count)).collect(),
        Window::End => once(1)
            .chain(page_count + 2 - visible_count..=page_count)
            .collect(),
        Window::Middle => {
            // Clamped to [2, page_count - 1] so the fixed ends never repeat.
            let start = (current_page + 1 - threshold(visible_count)).max(2);
            let end = (start + visible_count - 3).min(page_count - 1);
            once(1)
                .chain(start..=end)
                .chain(once(page_count))
                .collect()
        }
    }
}

/// Whether the current page is the first one
pub fn is_first_page(current_page: usize) -> bool {
    current_page == 1
}

/// Whether the current page is the last one
pub fn is_last_page(current_page: usize, page_count: usize) -> bool {
    current_page == page_count
}

/// Page after the current one, `None` when already on the last page
pub fn next_page(current_page: usize, page_count: usize) -> Option<usize> {
    if current_page >= page_count {
        None
    } else {
        Some(current_page + 1)
    }
}

/// Page before the current one, `None` when already on the first page
pub fn previous_page(current_page: usize) -> Option<usize> {
    if current_page <= 1 {
        None
    } else {
        Some(current_page - 1)
    }
}

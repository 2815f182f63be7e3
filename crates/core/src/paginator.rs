//! Paginator state
//!
//! A small owned value holding the current page and page count of a paged
//! collection. Every read of the trigger sequence is recomputed from the
//! current state, so the state itself never stores derived data.

use serde::Serialize;

use crate::error::PaginationError;
use crate::range::{
    is_first_page, is_last_page, next_page, pages_for, previous_page, validate_visible_count,
    window_for, Window, DEFAULT_VISIBLE_COUNT,
};

/// Current position within a paged collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_count: usize,
    visible_count: usize,
}

/// Serializable snapshot of a paginator, what a view needs to draw it
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PaginatorView {
    pub current_page: usize,
    pub page_count: usize,
    pub window: Window,
    pub triggers: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Paginator {
    /// Create a paginator positioned on page 1
    pub fn new(page_count: usize, visible_count: usize) -> Result<Self, PaginationError> {
        if page_count < 1 {
            return Err(PaginationError::invalid("page count must be at least 1"));
        }
        validate_visible_count(visible_count)?;

        Ok(Self {
            current_page: 1,
            page_count,
            visible_count,
        })
    }

    /// Create a paginator positioned on `current_page`
    pub fn at(
        current_page: usize,
        page_count: usize,
        visible_count: usize,
    ) -> Result<Self, PaginationError> {
        let mut paginator = Self::new(page_count, visible_count)?;
        paginator.go_to(current_page)?;
        Ok(paginator)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_first_page(&self) -> bool {
        is_first_page(self.current_page)
    }

    pub fn is_last_page(&self) -> bool {
        is_last_page(self.current_page, self.page_count)
    }

    /// Move to the next page and return it
    ///
    /// Fails without moving when already on the last page.
    pub fn go_to_next(&mut self) -> Result<usize, PaginationError> {
        let page = next_page(self.current_page, self.page_count).ok_or_else(|| {
            PaginationError::invalid(format!(
                "already on the last page ({})",
                self.page_count
            ))
        })?;
        self.current_page = page;
        Ok(page)
    }

    /// Move to the previous page and return it
    ///
    /// Fails without moving when already on the first page.
    pub fn go_to_previous(&mut self) -> Result<usize, PaginationError> {
        let page = previous_page(self.current_page)
            .ok_or_else(|| PaginationError::invalid("already on the first page"))?;
        self.current_page = page;
        Ok(page)
    }

    /// Jump to `page`
    pub fn go_to(&mut self, page: usize) -> Result<usize, PaginationError> {
        if page < 1 || page > self.page_count {
            return Err(PaginationError::invalid(format!(
                "page {page} is out of range 1..={}",
                self.page_count
            )));
        }
        self.current_page = page;
        Ok(page)
    }

    /// Refresh the page count after new data arrived
    ///
    /// The current page is clamped into the new range, so shrinking a
    /// collection under the user moves them to its last page.
    pub fn set_page_count(&mut self, page_count: usize) -> Result<(), PaginationError> {
        if page_count < 1 {
            return Err(PaginationError::invalid("page count must be at least 1"));
        }
        self.page_count = page_count;
        self.current_page = self.current_page.clamp(1, page_count);
        Ok(())
    }

    /// Page numbers to render as triggers for the current state
    pub fn triggers(&self) -> Vec<usize> {
        pages_for(
            self.window(),
            self.current_page,
            self.page_count,
            self.visible_count,
        )
    }

    // The constructor and every setter keep the state valid, so no revalidation here.
    fn window(&self) -> Window {
        window_for(self.current_page, self.page_count, self.visible_count)
    }

    pub fn view(&self) -> PaginatorView {
        PaginatorView {
            current_page: self.current_page,
            page_count: self.page_count,
            window: self.window(),
            triggers: self.triggers(),
            has_previous: !self.is_first_page(),
            has_next: !self.is_last_page(),
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_count: 1,
            visible_count: DEFAULT_VISIBLE_COUNT,
        }
    }
}

use crate::error::PaginationError;

/// Number of pages needed to show `total_items` at `page_size` per page
///
/// An empty collection still has one (empty) page, so the result is never 0.
pub fn page_count_for(total_items: usize, page_size: usize) -> Result<usize, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::invalid("page size must be at least 1"));
    }

    Ok(total_items.div_ceil(page_size).max(1))
}

/// Calculate slice bounds for a given page
///
/// Returns (start_index, end_index) for slicing the items array.
/// Returns an error if the page is out of range or the page size is zero.
pub fn page_bounds(
    total_items: usize,
    page: usize,
    page_size: usize,
) -> Result<(usize, usize), PaginationError> {
    let total_pages = page_count_for(total_items, page_size)?;

    if page < 1 || page > total_pages {
        return Err(PaginationError::invalid(format!(
            "Page {page} is out of range. Only {total_pages} pages available."
        )));
    }

    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_items);
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // page_count_for tests
    // ============================================================================

    #[test]
    fn test_page_count_exact_fit() {
        assert_eq!(page_count_for(30, 10).unwrap(), 3);
    }

    #[test]
    fn test_page_count_partial_last_page() {
        assert_eq!(page_count_for(31, 10).unwrap(), 4);
    }

    #[test]
    fn test_page_count_empty_collection() {
        assert_eq!(page_count_for(0, 10).unwrap(), 1);
    }

    #[test]
    fn test_page_count_zero_size() {
        assert!(page_count_for(10, 0).is_err());
    }

    // ============================================================================
    // page_bounds tests
    // ============================================================================

    #[test]
    fn test_page_bounds_first_page() {
        assert_eq!(page_bounds(25, 1, 10).unwrap(), (0, 10));
    }

    #[test]
    fn test_page_bounds_last_partial_page() {
        assert_eq!(page_bounds(25, 3, 10).unwrap(), (20, 25));
    }

    #[test]
    fn test_page_bounds_empty_collection() {
        assert_eq!(page_bounds(0, 1, 10).unwrap(), (0, 0));
    }

    #[test]
    fn test_page_bounds_out_of_range() {
        let err = page_bounds(25, 4, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Page 4 is out of range. Only 3 pages available."
        );
    }

    #[test]
    fn test_page_bounds_huge_page_size() {
        // Two pages; start + page_size on the second one is past usize::MAX.
        let page_size = usize::MAX / 2 + 1;
        assert_eq!(
            page_bounds(usize::MAX, 2, page_size).unwrap(),
            (page_size, usize::MAX)
        );
        assert_eq!(page_bounds(25, 1, usize::MAX - 1).unwrap(), (0, 25));
    }

    #[test]
    fn test_page_bounds_page_zero() {
        assert!(page_bounds(25, 0, 10).is_err());
    }
}

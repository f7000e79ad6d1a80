use serde::Serialize;

/// One window of a sequence plus the page metadata needed by a pager.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Requested 1-based page number, echoed back unchanged.
    pub page: usize,
    /// `ceil(len / page_size)`. Zero for an empty sequence.
    pub total_pages: usize,
}

/// Cut the `page`-th window (1-based) of `page_size` items out of `items`.
///
/// Pages past the end and page 0 give an empty window rather than an error.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            page,
            total_pages: 0,
        };
    }

    let total_pages = items.len().div_ceil(page_size);
    let window = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size);
            items.into_iter().skip(start).take(page_size).collect()
        }
        None => Vec::new(),
    };

    Page {
        items: window,
        page,
        total_pages,
    }
}

/// Page number from a raw query-string value.
///
/// An absent value means page 1. A value that is present but not a
/// non-negative integer (blank, non-numeric, negative) maps to page 0, which
/// is out of range and therefore paginates to an empty window.
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    match raw {
        None => 1,
        Some(value) => value.trim().parse::<usize>().unwrap_or(0),
    }
}

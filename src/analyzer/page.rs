use serde::{Deserialize, Serialize};

/// One slot of a numbered pager: either a concrete page number or a gap
/// marker standing in for a collapsed run of hidden pages.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page number to render as a link
    Num(usize),
    /// An ellipsis between shown page numbers
    Gap,
}

/// Pagination descriptors for one result page.
/// Everything a presentation layer needs to render the pager: the current
/// page, the totals, previous/next availability, and the windowed list of
/// visible page numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based
    pub page: usize,
    /// Page size
    pub per_page: usize,
    /// Total ranked entries across all pages
    pub total: usize,
    /// `ceil(total / per_page)`; 0 when there are no entries
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Previous page number, None on the first page
    pub prev_num: Option<usize>,
    /// Next page number, None on the last page
    pub next_num: Option<usize>,
    /// Windowed page numbers with gap markers
    pub visible_pages: Vec<PageItem>,
}

impl Pagination {
    /// Build the descriptors for `page` over a list of `total` entries.
    ///
    /// # Arguments
    /// * `page` - current page, already validated against the page range
    /// * `per_page` - page size, >= 1
    /// * `total` - total ranked entries
    /// * `window` - visible-pages window radius around the current page
    pub fn build(page: usize, per_page: usize, total: usize, window: usize) -> Self {
        let total_pages = total_pages(total, per_page);
        Pagination {
            page,
            per_page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
            prev_num: (page > 1).then(|| page - 1),
            next_num: (page < total_pages).then(|| page + 1),
            visible_pages: visible_pages(page, total_pages, window),
        }
    }

    /// Half-open slice bounds of the current page within the ranked list:
    /// `[(page - 1) * per_page, min(page * per_page, total))`.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let start = (self.page - 1) * self.per_page;
        let start = start.min(self.total);
        let end = (start + self.per_page).min(self.total);
        (start, end)
    }
}

/// Total page count, `ceil(total / per_page)`.
#[inline]
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

/// Windowed visible-pages rule, a pure function of its arguments:
/// page 1 and page `total` are always shown, every page within `window` of
/// `current` is shown, and each maximal run of hidden pages collapses into
/// a single `Gap`.
///
/// `total == 0` yields an empty list (nothing to page through).
pub fn visible_pages(current: usize, total: usize, window: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut gap_pending = false;
    for page in 1..=total {
        let near_current = page >= current.saturating_sub(window) && page <= current.saturating_add(window);
        if page == 1 || page == total || near_current {
            if gap_pending {
                items.push(PageItem::Gap);
                gap_pending = false;
            }
            items.push(PageItem::Num(page));
        } else {
            gap_pending = true;
        }
    }
    items
}

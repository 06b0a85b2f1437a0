/// `ceil(len / page_size)`; an empty list has zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice of a 1-indexed page. Pages outside `[1, total_pages]` are empty.
pub fn paginate<T>(records: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Pagination counters of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-indexed
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        Self {
            page,
            page_size,
            total_count,
            total_pages: total_pages(total_count, page_size),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "page / total (count)"; shows at least one page.
    pub fn label(&self) -> String {
        format!(
            "{} / {} ({})",
            self.page,
            self.total_pages.max(1),
            self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page_of_ten() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 10, 2), &(10..20).collect::<Vec<usize>>()[..]);
        assert_eq!(paginate(&items, 10, 3), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<u8> = Vec::new();
        assert!(paginate(&empty, 10, 1).is_empty());
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 10, 2).is_empty());
        assert!(paginate(&items, 10, usize::MAX).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_page_info() {
        let info = PageInfo::new(1, 10, 25);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_previous());
        assert!(info.has_next());
        assert_eq!(info.label(), "1 / 3 (25)");
        assert_eq!(PageInfo::new(1, 10, 0).label(), "1 / 1 (0)");
    }
}

//! Page-number windowing for list pagination

/// One entry of the pager: a page number or an elided run of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Build the pager sequence for `current` out of `total_pages`.
///
/// Page 1, the last page and every page within `radius` of `current` are
/// listed; a single `Gap` stands in for each run of skipped pages.
/// Returns an empty sequence when there are no pages.
///
/// # Examples
/// ```ignore
/// generate_pagination(5, 10, 2) // -> [1, .., 3, 4, 5, 6, 7, .., 10]
/// ```
pub fn generate_pagination(current: usize, total_pages: usize, radius: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut last: Option<usize> = None;

    for page in 1..=total_pages {
        if page == 1 || page == total_pages || page.abs_diff(current) <= radius {
            if let Some(prev) = last {
                if page - prev != 1 {
                    items.push(PageItem::Gap);
                }
            }
            items.push(PageItem::Page(page));
            last = Some(page);
        }
    }

    items
}

/// Number of pages needed for `total_items` at `per_page` items each
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Items shown on `page` (1-based): `[(page-1)*per_page, page*per_page)`
/// clamped to the slice. Pages past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Position within a paginated list together with its pager sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total_pages: usize,
    /// Target of the "previous" link, never below 1
    pub prev: usize,
    /// Target of the "next" link, never above `total_pages` nor below 1
    pub next: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub items: Vec<PageItem>,
}

impl PageWindow {
    pub fn new(current: usize, total_items: usize, per_page: usize, radius: usize) -> Self {
        let total_pages = total_pages(total_items, per_page);
        Self {
            current,
            total_pages,
            prev: current.saturating_sub(1).max(1),
            next: current.saturating_add(1).min(total_pages).max(1),
            has_prev: current > 1,
            has_next: current < total_pages,
            items: generate_pagination(current, total_pages, radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            generate_pagination(5, 10, 2),
            vec![
                Page(1),
                Gap,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Gap,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_full_range_within_radius() {
        assert_eq!(
            generate_pagination(1, 3, 2),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn test_radius_one() {
        assert_eq!(
            generate_pagination(1, 10, 1),
            vec![Page(1), Page(2), Gap, Page(10)]
        );
        assert_eq!(
            generate_pagination(10, 10, 1),
            vec![Page(1), Gap, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_gap_for_single_skipped_page() {
        // 1 and 3 are not adjacent, so a gap still stands for page 2
        assert_eq!(
            generate_pagination(5, 7, 2),
            vec![
                Page(1),
                Gap,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7)
            ]
        );
    }

    #[test]
    fn test_no_pages() {
        assert!(generate_pagination(1, 0, 2).is_empty());
        assert!(generate_pagination(0, 0, 1).is_empty());
    }

    #[test]
    fn test_current_out_of_range() {
        assert_eq!(generate_pagination(50, 4, 2), vec![Page(1), Gap, Page(4)]);
    }

    #[test]
    fn test_sequence_invariants() {
        for radius in 0..=3 {
            for total in 1..=15 {
                for current in 1..=total {
                    let items = generate_pagination(current, total, radius);
                    assert_eq!(items.first(), Some(&Page(1)));
                    assert_eq!(items.last(), Some(&Page(total)));
                    assert!(items.contains(&Page(current)));

                    for pair in items.windows(2) {
                        if let [Page(a), Page(b)] = pair {
                            assert_eq!(b - a, 1);
                        }
                    }

                    for (i, item) in items.iter().enumerate() {
                        if *item != Gap {
                            continue;
                        }
                        let before = i.checked_sub(1).and_then(|j| items.get(j));
                        match (before, items.get(i + 1)) {
                            (Some(Page(a)), Some(Page(b))) => assert!(b - a > 1),
                            other => panic!("misplaced gap for {current}/{total}: {other:?}"),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(20, 9), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(page_slice(&items, 1, 9), &items[0..9]);
        assert_eq!(page_slice(&items, 3, 9), &[18, 19]);
        assert!(page_slice(&items, 4, 9).is_empty());
        assert_eq!(page_slice(&items, 0, 9), &items[0..9]);
        assert!(page_slice(&[] as &[usize], 1, 9).is_empty());
    }

    #[test]
    fn test_page_window_links() {
        let window = PageWindow::new(1, 20, 9, 2);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.prev, 1);
        assert_eq!(window.next, 2);
        assert!(!window.has_prev);
        assert!(window.has_next);

        let window = PageWindow::new(3, 20, 9, 2);
        assert_eq!(window.prev, 2);
        assert_eq!(window.next, 3);
        assert!(!window.has_next);

        let empty = PageWindow::new(1, 0, 9, 2);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.next, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_page_window_at_usize_max() {
        let window = PageWindow::new(usize::MAX, 20, 9, 2);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.next, 3);
        assert_eq!(window.prev, usize::MAX - 1);
        assert!(window.has_prev);
        assert!(!window.has_next);
        assert_eq!(
            window.items,
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
    }
}

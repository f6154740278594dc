use std::ops::Range;

/// Rows per page. Not configurable.
pub const PAGE_SIZE: usize = 10;

/// Upper bound of numbered buttons in the page strip.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// One slot of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// ceil(total_items / page_size)
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Keeps a 1-based page inside `[1, total_pages]` (page 1 when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of a 1-based page inside a sequence of `total_items`.
pub fn page_range(total_items: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Page-number strip for `current` out of `total_pages`.
///
/// Up to five pages: all of them. Otherwise exactly five numbered buttons: the
/// first page, the last page and three consecutive pages around `current`
/// (shifted to stay inside `2..=total_pages - 1`), with an ellipsis wherever two
/// shown pages are not adjacent.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageButton::Page).collect();
    }

    let center = current.clamp(3, total_pages - 2);
    let pages = [1, center - 1, center, center + 1, total_pages];

    let mut buttons = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page > prev + 1 {
                buttons.push(PageButton::Ellipsis);
            }
        }
        buttons.push(PageButton::Page(page));
        previous = Some(page);
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use PageButton::{Ellipsis, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(10, PAGE_SIZE), 1);
        assert_eq!(page_count(12, PAGE_SIZE), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_twelve_rows_split_ten_and_two() {
        assert_eq!(page_range(12, 1, PAGE_SIZE), 0..10);
        assert_eq!(page_range(12, 2, PAGE_SIZE), 10..12);
        assert_eq!(page_range(12, 3, PAGE_SIZE), 12..12);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_few_pages_show_all() {
        assert!(page_buttons(1, 0).is_empty());
        assert_eq!(page_buttons(1, 1), vec![Page(1)]);
        assert_eq!(
            page_buttons(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_buttons(1, 10), expected);
        assert_eq!(page_buttons(2, 10), expected);
        assert_eq!(page_buttons(3, 10), expected);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_buttons(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_buttons(9, 10), expected);
        assert_eq!(page_buttons(10, 10), expected);
    }

    #[test]
    fn test_six_pages_has_single_ellipsis() {
        assert_eq!(
            page_buttons(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            page_buttons(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    proptest! {
        #[test]
        fn prop_pages_cover_sequence_once(total in 0usize..200) {
            let pages = page_count(total, PAGE_SIZE);
            let mut covered = Vec::new();
            for page in 1..=pages {
                let range = page_range(total, page, PAGE_SIZE);
                prop_assert!(range.len() <= PAGE_SIZE);
                if page < pages {
                    prop_assert_eq!(range.len(), PAGE_SIZE);
                }
                covered.extend(range);
            }
            prop_assert_eq!(covered, (0..total).collect::<Vec<_>>());
        }

        #[test]
        fn prop_strip_is_bounded_and_contains_current(total in 1usize..100, current in 1usize..100) {
            let current = clamp_page(current, total);
            let buttons = page_buttons(current, total);
            let numbered: Vec<usize> = buttons
                .iter()
                .filter_map(|b| match b { Page(p) => Some(*p), Ellipsis => None })
                .collect();
            prop_assert!(numbered.len() <= MAX_PAGE_BUTTONS);
            prop_assert!(numbered.contains(&current));
            prop_assert!(numbered.contains(&1));
            prop_assert!(numbered.contains(&total));
            prop_assert!(numbered.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

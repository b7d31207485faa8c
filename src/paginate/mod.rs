//! Page slicing and pagination controls.
//!
//! Pages are 1-based and hold [`PAGE_SIZE`] recipes. All functions are total:
//! out-of-range pages yield empty windows or are clamped, never an error.

mod model;

pub use model::{PageControl, PageControlKind, PageNavigation};

/// Number of recipes shown per page.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `count` items. Zero items need zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamps `page` into `[1, max(1, total_pages(count))]`.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, total_pages(count).max(1))
}

/// Returns the slice of `items` shown on `page`.
///
/// # Examples
///
/// ```
/// use recipe_browser::paginate::page_window;
///
/// let items: Vec<u32> = (1..=7).collect();
/// assert_eq!(page_window(&items, 1), &[1, 2, 3, 4, 5, 6]);
/// assert_eq!(page_window(&items, 2), &[7]);
/// assert!(page_window(&items, 3).is_empty());
/// ```
pub fn page_window<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Builds the pagination bar for `count` items with `current` shown.
///
/// Returns no controls when everything fits on one page.
pub fn page_controls(count: usize, current: usize) -> Vec<PageControl> {
    let total = total_pages(count);
    if total <= 1 {
        return Vec::new();
    }
    let current = clamp_page(current, count);

    let mut controls = Vec::with_capacity(total + 2);
    if current > 1 {
        controls.push(PageControl::previous(current));
    }
    controls.extend((1..=total).map(|number| PageControl::page(number, current)));
    if current < total {
        controls.push(PageControl::next(current));
    }
    controls
}

/// Resolves a navigation request to the page to show, clamped to range.
pub fn navigate(current: usize, count: usize, navigation: PageNavigation) -> usize {
    let target = match navigation {
        PageNavigation::Previous => current.saturating_sub(1),
        PageNavigation::Next => current.saturating_add(1),
        PageNavigation::Page(page) => page,
    };
    clamp_page(target, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_window_sizes_for_all_counts() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            let total = total_pages(n);

            assert_eq!(page_window(&items, 1).len(), n.min(PAGE_SIZE), "n = {n}");
            if n > 0 {
                let expected_last = if n % PAGE_SIZE == 0 {
                    PAGE_SIZE
                } else {
                    n % PAGE_SIZE
                };
                assert_eq!(page_window(&items, total).len(), expected_last, "n = {n}");
            }
            assert!(page_window(&items, total + 1).is_empty());
        }
    }

    #[test]
    fn test_window_page_zero_is_first_page() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(page_window(&items, 0), page_window(&items, 1));
    }

    #[test]
    fn test_no_controls_for_single_page() {
        assert!(page_controls(0, 1).is_empty());
        assert!(page_controls(6, 1).is_empty());
    }

    #[test]
    fn test_controls_first_page() {
        let controls = page_controls(20, 1);
        let kinds: Vec<PageControlKind> = controls.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageControlKind::Page,
                PageControlKind::Page,
                PageControlKind::Page,
                PageControlKind::Page,
                PageControlKind::Next,
            ]
        );
        assert!(controls[0].disabled);
        assert_eq!(controls[4].target, 2);
        assert_eq!(controls[4].aria_label, "Next Page");
    }

    #[test]
    fn test_controls_middle_and_last_page() {
        let middle = page_controls(20, 2);
        assert_eq!(middle.first().unwrap().kind, PageControlKind::Previous);
        assert_eq!(middle.first().unwrap().target, 1);
        assert_eq!(middle.last().unwrap().kind, PageControlKind::Next);

        let last = page_controls(20, 4);
        assert_eq!(last.first().unwrap().kind, PageControlKind::Previous);
        assert_eq!(last.last().unwrap().kind, PageControlKind::Page);
        assert_eq!(last.last().unwrap().text, "4");
    }

    #[test]
    fn test_exactly_one_disabled_control() {
        for count in 7..40 {
            for current in 1..=total_pages(count) {
                let controls = page_controls(count, current);
                let disabled: Vec<&PageControl> =
                    controls.iter().filter(|c| c.disabled).collect();
                assert_eq!(disabled.len(), 1);
                assert_eq!(disabled[0].target, current);

                let has_prev = controls
                    .iter()
                    .any(|c| c.kind == PageControlKind::Previous);
                let has_next = controls.iter().any(|c| c.kind == PageControlKind::Next);
                assert_eq!(has_prev, current != 1);
                assert_eq!(has_next, current != total_pages(count));
            }
        }
    }

    #[test]
    fn test_navigate_clamps() {
        assert_eq!(navigate(1, 20, PageNavigation::Previous), 1);
        assert_eq!(navigate(4, 20, PageNavigation::Next), 4);
        assert_eq!(navigate(2, 20, PageNavigation::Next), 3);
        assert_eq!(navigate(2, 20, PageNavigation::Page(99)), 4);
        assert_eq!(navigate(2, 0, PageNavigation::Page(3)), 1);
    }

    #[test]
    fn test_control_navigation() {
        let controls = page_controls(20, 2);
        assert_eq!(controls[0].navigation(), PageNavigation::Previous);
        assert_eq!(controls[1].navigation(), PageNavigation::Page(1));
    }
}

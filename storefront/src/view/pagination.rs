//! # Pagination View Model

/// One pagination control. `Previous`/`Next` carry their target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous(u32),
    Page { number: u32, current: bool },
    Next(u32),
}

/// Bounded pagination window: up to two pages either side of the current
/// one, clamped to range, plus Previous/Next when they point somewhere.
/// A single page renders no controls at all.
pub fn pagination_controls(current_page: u32, total_pages: u32) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::new();
    if current_page > 1 {
        controls.push(PageControl::Previous(current_page - 1));
    }

    let first = current_page.saturating_sub(2).max(1);
    let last = (current_page + 2).min(total_pages);
    for number in first..=last {
        controls.push(PageControl::Page {
            number,
            current: number == current_page,
        });
    }

    if current_page < total_pages {
        controls.push(PageControl::Next(current_page + 1));
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(controls: &[PageControl]) -> Vec<u32> {
        controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_window_around_middle_page() {
        let controls = pagination_controls(5, 10);
        assert_eq!(numbers(&controls), vec![3, 4, 5, 6, 7]);
        assert_eq!(controls.first(), Some(&PageControl::Previous(4)));
        assert_eq!(controls.last(), Some(&PageControl::Next(6)));
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let controls = pagination_controls(1, 10);
        assert_eq!(numbers(&controls), vec![1, 2, 3]);
        assert!(!matches!(controls.first(), Some(PageControl::Previous(_))));
        assert_eq!(controls.last(), Some(&PageControl::Next(2)));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let controls = pagination_controls(10, 10);
        assert_eq!(numbers(&controls), vec![8, 9, 10]);
        assert!(!matches!(controls.last(), Some(PageControl::Next(_))));
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(pagination_controls(1, 1).is_empty());
        assert!(pagination_controls(1, 0).is_empty());
    }

    #[test]
    fn test_current_page_is_marked() {
        let controls = pagination_controls(2, 3);
        let current: Vec<u32> = controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![2]);
    }
}

//! Fixed-size pagination over the shuffled catalog.
//!
//! Pages are 1-based. Navigation is clamped by disabling the controls
//! at the boundaries rather than by wrapping or erroring, and an input
//! whose length is an exact multiple of the page size produces no empty
//! trailing page.

/// Images per gallery page. Fixed; not adjustable at runtime.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The slice of items belonging to `page` (1-based). Pages past the
/// end are empty rather than panicking.
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let start = (page.saturating_sub(1)) * page_size;
    let end = (start + page_size).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

/// Whether the "previous" control is enabled.
pub fn has_prev(page: usize) -> bool {
    page > 1
}

/// Whether the "next" control is enabled.
pub fn has_next(page: usize, total: usize) -> bool {
    page < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(9, 6), 2);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(1, 6), 1);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_trailing_page() {
        assert_eq!(total_pages(12, 6), 2);
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(page_slice(&items, 6, 2).len(), 6);
        assert!(page_slice(&items, 6, 3).is_empty());
    }

    #[test]
    fn test_pages_partition_the_input() {
        for len in [1usize, 5, 6, 7, 9, 12, 13] {
            for page_size in [1usize, 3, 6] {
                let items: Vec<usize> = (0..len).collect();
                let total = total_pages(len, page_size);

                let mut reassembled = Vec::new();
                for page in 1..=total {
                    let slice = page_slice(&items, page_size, page);
                    assert!(!slice.is_empty(), "no page may be empty");
                    if page < total {
                        assert_eq!(slice.len(), page_size);
                    } else {
                        assert_eq!(slice.len(), len - page_size * (total - 1));
                    }
                    reassembled.extend_from_slice(slice);
                }

                // Concatenating all pages yields the input, in order,
                // with no duplicates and no omissions.
                assert_eq!(reassembled, items);
            }
        }
    }

    #[test]
    fn test_boundary_controls() {
        let total = total_pages(9, 6);
        assert_eq!(total, 2);

        assert!(!has_prev(1));
        assert!(has_next(1, total));

        assert!(has_prev(2));
        assert!(!has_next(2, total));
    }

    #[test]
    fn test_single_page_disables_both_controls() {
        let total = total_pages(4, 6);
        assert_eq!(total, 1);
        assert!(!has_prev(1));
        assert!(!has_next(1, total));
    }
}

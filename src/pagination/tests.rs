//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::source::{DataSource, MockSource, SharedSource, VecSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use test_case::test_case;

fn sources_with_counts(counts: &[usize]) -> Vec<SharedSource<usize>> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Arc::new(
                VecSource::new((0..count).collect::<Vec<usize>>())
                    .with_name(format!("Source {}", i + 1)),
            ) as SharedSource<usize>
        })
        .collect()
}

fn windows(active: &[ActiveSource]) -> Vec<(usize, usize, usize)> {
    active.iter().map(|a| (a.index, a.limit, a.offset)).collect()
}

// ============================================================================
// SourceDescriptor Tests
// ============================================================================

#[test]
fn test_descriptor_first_source() {
    let d = SourceDescriptor::new(0, "Source 1", 25, 0, 10);
    assert_eq!(d.page_start, 1);
    assert_eq!(d.page_end, 3);
    assert_eq!(d.page_remaining, 5);
}

#[test]
fn test_descriptor_exact_fit_has_no_remainder() {
    let d = SourceDescriptor::new(1, "Source 2", 15, 25, 10);
    assert_eq!(d.page_start, 3);
    assert_eq!(d.page_end, 4);
    assert_eq!(d.page_remaining, 0);
}

#[test]
fn test_descriptor_starts_after_full_page() {
    // Previous sources end exactly on a page boundary
    let d = SourceDescriptor::new(2, "Source 3", 13, 40, 10);
    assert_eq!(d.page_start, 5);
    assert_eq!(d.page_end, 6);
    assert_eq!(d.page_remaining, 7);
}

#[test]
fn test_descriptor_page_range() {
    let d = SourceDescriptor::new(0, "a", 25, 0, 10);
    assert_eq!(d.page_range(), 1..=3);
    assert!(d.contains_page(1));
    assert!(d.contains_page(3));
    assert!(!d.contains_page(4));
}

#[test_case(0 ; "at start")]
#[test_case(20 ; "on page boundary")]
#[test_case(25 ; "mid page")]
fn test_empty_descriptor_contains_no_page(count_before: usize) {
    let d = SourceDescriptor::new(1, "empty", 0, count_before, 10);
    assert!(d.is_empty());
    for page in 1..=5 {
        assert!(!d.contains_page(page));
    }
}

#[test]
fn test_empty_descriptor_on_boundary_has_inverted_range() {
    let d = SourceDescriptor::new(1, "empty", 0, 20, 10);
    assert!(d.page_start > d.page_end);
}

#[test]
fn test_active_source_expected_len() {
    assert_eq!(ActiveSource::new(0, 10, 0).expected_len(25), 10);
    assert_eq!(ActiveSource::new(0, 10, 20).expected_len(25), 5);
    assert_eq!(ActiveSource::new(0, 10, 30).expected_len(25), 0);
}

#[test_case(0, 10 => 0 ; "no items")]
#[test_case(80, 1 => 80 ; "one per page")]
#[test_case(80, 3 => 27 ; "partial last page")]
#[test_case(80, 40 => 2 ; "exact multiple")]
#[test_case(80, 100 => 1 ; "page larger than total")]
fn test_total_pages(total: usize, page_size: usize) -> usize {
    total_pages(total, page_size)
}

// ============================================================================
// Index Builder Tests
// ============================================================================

#[test]
fn test_build_index_prefix_sums() {
    let sources = sources_with_counts(&[25, 15, 13, 17, 10]);
    let index = build_index(&sources, 27).unwrap();

    assert_eq!(index.total_count, 80);
    assert_eq!(index.page_size, 27);

    let before: Vec<_> = index.descriptors().iter().map(|d| d.count_before).collect();
    assert_eq!(before, vec![0, 25, 40, 53, 70]);

    let names: Vec<_> = index.descriptors().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Source 1", "Source 2", "Source 3", "Source 4", "Source 5"]
    );
}

#[test]
fn test_build_index_boundary_pages_are_shared() {
    let sources = sources_with_counts(&[25, 15, 13, 17, 10]);
    let index = build_index(&sources, 27).unwrap();

    for pair in index.descriptors().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.page_remaining > 0 {
            assert_eq!(next.page_start, prev.page_end);
        } else {
            assert_eq!(next.page_start, prev.page_end + 1);
        }
    }
}

#[test]
fn test_build_index_no_sources() {
    let index = build_index::<usize>(&[], 10).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.total_count, 0);
    assert_eq!(index.total_pages(), 0);
}

struct CountingSource {
    count_calls: AtomicUsize,
}

impl DataSource for CountingSource {
    type Item = usize;

    fn count(&self) -> crate::Result<usize> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(4)
    }

    fn fetch(&self, _limit: usize, _offset: usize) -> crate::Result<Vec<usize>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_build_index_counts_each_source_once() {
    let counting = Arc::new(CountingSource {
        count_calls: AtomicUsize::new(0),
    });
    let sources: Vec<SharedSource<usize>> = vec![counting.clone()];

    build_index(&sources, 3).unwrap();
    assert_eq!(counting.count_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_build_index_zero_page_size_touches_no_source() {
    let counting = Arc::new(CountingSource {
        count_calls: AtomicUsize::new(0),
    });
    let sources: Vec<SharedSource<usize>> = vec![counting.clone()];

    let err = build_index(&sources, 0).unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(counting.count_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Resolver Tests
// ============================================================================

#[test]
fn test_resolve_single_source() {
    let index = build_index(&sources_with_counts(&[25]), 10).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 1).unwrap()),
        vec![(0, 10, 0)]
    );
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 3).unwrap()),
        vec![(0, 10, 20)]
    );
}

#[test]
fn test_resolve_page_spanning_two_sources() {
    let index = build_index(&sources_with_counts(&[7, 8, 5]), 10).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 1).unwrap()),
        vec![(0, 10, 0), (1, 3, 0)]
    );
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 2).unwrap()),
        vec![(1, 10, 3), (2, 5, 0)]
    );
}

#[test]
fn test_resolve_page_spanning_many_sources() {
    let index = build_index(&sources_with_counts(&[25, 15, 13, 17, 10]), 40).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 40, 2).unwrap()),
        vec![(2, 40, 0), (3, 27, 0), (4, 10, 0)]
    );
}

#[test]
fn test_resolve_exact_fit_does_not_carry_partial_window() {
    // Source 1 fills page 1 and 2 exactly; source 2 starts a fresh page
    let index = build_index(&sources_with_counts(&[20, 5]), 10).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 3).unwrap()),
        vec![(1, 10, 0)]
    );
}

#[test]
fn test_resolve_small_page_inside_later_source() {
    let index = build_index(&sources_with_counts(&[25, 15, 13, 17, 10]), 3).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 3, 18).unwrap()),
        vec![(2, 3, 11), (3, 1, 0)]
    );
    assert_eq!(
        windows(&resolve_active_sources(&index, 3, 19).unwrap()),
        vec![(3, 3, 1)]
    );
}

#[test]
fn test_resolve_skips_empty_sources() {
    let index = build_index(&sources_with_counts(&[5, 0, 0, 5]), 10).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 1).unwrap()),
        vec![(0, 10, 0), (3, 5, 0)]
    );
}

#[test]
fn test_resolve_leading_empty_sources() {
    let index = build_index(&sources_with_counts(&[0, 0, 12]), 10).unwrap();
    assert_eq!(
        windows(&resolve_active_sources(&index, 10, 2).unwrap()),
        vec![(2, 10, 10)]
    );
}

#[test]
fn test_resolve_past_last_page_is_empty() {
    let index = build_index(&sources_with_counts(&[25, 15]), 10).unwrap();
    assert!(resolve_active_sources(&index, 10, 5).unwrap().is_empty());
    assert!(resolve_active_sources(&index, 10, 500).unwrap().is_empty());
}

#[test]
fn test_resolve_no_sources_is_empty() {
    let index = build_index::<usize>(&[], 10).unwrap();
    assert!(resolve_active_sources(&index, 10, 1).unwrap().is_empty());
}

#[test]
fn test_resolve_page_zero_rejected() {
    let index = build_index(&sources_with_counts(&[5]), 10).unwrap();
    let err = resolve_active_sources(&index, 10, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidPage { page: 0 }));
}

#[test]
fn test_resolve_page_size_mismatch_rejected() {
    let index = build_index(&sources_with_counts(&[5]), 10).unwrap();
    let err = resolve_active_sources(&index, 20, 1).unwrap_err();
    assert!(err.is_config_error());
    assert!(resolve_active_sources(&index, 0, 1)
        .unwrap_err()
        .is_config_error());
}

#[test]
fn test_resolved_windows_fill_every_page() {
    let sources = sources_with_counts(&[25, 15, 13, 17, 10]);
    for page_size in 1..=45 {
        let index = build_index(&sources, page_size).unwrap();
        let pages = index.total_pages();
        for page in 1..=pages {
            let active = resolve_active_sources(&index, page_size, page).unwrap();
            let filled: usize = active
                .iter()
                .map(|a| a.expected_len(index.sources[a.index].count))
                .sum();
            let expected = if page < pages {
                page_size
            } else {
                80 - page_size * (pages - 1)
            };
            assert_eq!(filled, expected, "page {page} of size {page_size}");
        }
    }
}

#[test]
fn test_resolve_with_mock_sources() {
    let sources: Vec<SharedSource<_>> = vec![
        Arc::new(MockSource::new("Source 1", 25)),
        Arc::new(MockSource::new("Source 2", 15)),
    ];
    let index = build_index(&sources, 27).unwrap();
    let active = resolve_active_sources(&index, 27, 1).unwrap();
    assert_eq!(windows(&active), vec![(0, 27, 0), (1, 2, 0)]);
}

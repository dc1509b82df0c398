// Tests for hierarchy building

use navmap_core::hierarchy::{HierarchyError, build_hierarchy};

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Row content
// ============================================================================

#[test]
fn test_sibling_paths_share_first_level() {
    let table = build_hierarchy(&urls(&["https://x.com/a/b", "https://x.com/a/c"])).unwrap();

    assert_eq!(table.max_depth, 2);
    assert_eq!(table.rows.len(), 2);

    let first = &table.rows[0];
    let second = &table.rows[1];
    assert_eq!(first.levels, vec!["/a".to_string(), "/a/b".to_string()]);
    assert_eq!(second.levels, vec!["/a".to_string(), "/a/c".to_string()]);
    assert_eq!(first.url, "https://x.com/a/b");
    assert_eq!(second.url, "https://x.com/a/c");
}

#[test]
fn test_shallow_rows_padded_to_max_depth() {
    let table = build_hierarchy(&urls(&["https://x.com/a", "https://x.com/b/c/d"])).unwrap();

    assert_eq!(table.max_depth, 3);
    for row in &table.rows {
        assert_eq!(row.levels.len(), 3);
    }
    let shallow = table.rows.iter().find(|r| r.url.ends_with("/a")).unwrap();
    assert_eq!(
        shallow.levels,
        vec!["/a".to_string(), String::new(), String::new()]
    );
}

#[test]
fn test_trailing_slash_trimmed_from_segments() {
    let table = build_hierarchy(&urls(&["https://x.com/docs/"])).unwrap();

    assert_eq!(table.max_depth, 1);
    assert_eq!(table.rows[0].levels, vec!["/docs".to_string()]);
    // The URL column keeps the original string untouched.
    assert_eq!(table.rows[0].url, "https://x.com/docs/");
}

#[test]
fn test_column_count_is_depth_plus_url() {
    let table = build_hierarchy(&urls(&["https://x.com/a/b"])).unwrap();
    assert_eq!(table.column_count(), 3);
}

// ============================================================================
// Dropping and failure
// ============================================================================

#[test]
fn test_root_only_urls_dropped() {
    let table = build_hierarchy(&urls(&[
        "https://x.com/",
        "https://x.com",
        "https://x.com/keep",
    ]))
    .unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].url, "https://x.com/keep");
}

#[test]
fn test_no_qualifying_urls_is_empty_input() {
    let err = build_hierarchy(&urls(&["https://x.com/", "https://x.com"])).unwrap_err();
    assert_eq!(err, HierarchyError::EmptyInput);
}

#[test]
fn test_empty_slice_is_empty_input() {
    let err = build_hierarchy(&[]).unwrap_err();
    assert_eq!(err, HierarchyError::EmptyInput);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_rows_sorted_by_slash_split_url() {
    let table = build_hierarchy(&urls(&[
        "https://x.com/b",
        "https://x.com/a/z",
        "https://x.com/a",
    ]))
    .unwrap();

    let order: Vec<&str> = table.rows.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "https://x.com/a",
            "https://x.com/a/z",
            "https://x.com/b",
        ]
    );
}

#[test]
fn test_fragment_variants_stay_distinct_rows() {
    // No canonicalization: /page and /page#section are separate discoveries
    // with identical path segments, so they produce duplicate-looking rows.
    let table = build_hierarchy(&urls(&[
        "https://x.com/page",
        "https://x.com/page#section",
    ]))
    .unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].levels, table.rows[1].levels);
}

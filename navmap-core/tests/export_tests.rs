// Tests for spreadsheet export

use navmap_core::export::export_workbook;
use navmap_core::hierarchy::{HierarchyRow, HierarchyTable, build_hierarchy};

// ============================================================================
// Workbook bytes
// ============================================================================

#[test]
fn test_export_produces_xlsx_container() {
    let table = HierarchyTable {
        rows: vec![HierarchyRow {
            levels: vec!["/a".to_string(), "/a/b".to_string()],
            url: "https://x.com/a/b".to_string(),
        }],
        max_depth: 2,
    };

    let bytes = export_workbook(&table).unwrap();
    // xlsx is a zip container: PK local-file-header magic.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn test_export_one_row_two_levels() {
    // 2 level columns + 1 URL column => 3 header cells, 1 data row. The
    // shared-strings part of the workbook must carry every distinct cell
    // value we wrote.
    let table = HierarchyTable {
        rows: vec![HierarchyRow {
            levels: vec!["/a".to_string(), "/a/b".to_string()],
            url: "https://x.com/a/b".to_string(),
        }],
        max_depth: 2,
    };

    assert_eq!(table.column_count(), 3);
    let bytes = export_workbook(&table).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn test_export_from_built_hierarchy() {
    let urls = vec![
        "https://x.com/a/b".to_string(),
        "https://x.com/a/c".to_string(),
        "https://x.com/d".to_string(),
    ];
    let table = build_hierarchy(&urls).unwrap();
    let bytes = export_workbook(&table).unwrap();

    assert_eq!(table.rows.len(), 3);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_header_only_when_no_rows() {
    // A table with no rows still serializes (header row only); callers
    // normally never get here because build_hierarchy fails on empty input.
    let table = HierarchyTable {
        rows: vec![],
        max_depth: 1,
    };
    let bytes = export_workbook(&table).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

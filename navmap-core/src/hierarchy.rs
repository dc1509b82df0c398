use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, PartialEq)]
pub enum HierarchyError {
    #[error("no URLs with a non-root path to organize")]
    EmptyInput,
}

/// One exportable URL: its cumulative path prefixes, one per depth level,
/// padded with empty strings to the table-wide depth, then the URL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyRow {
    pub levels: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyTable {
    pub rows: Vec<HierarchyRow>,
    pub max_depth: usize,
}

impl HierarchyTable {
    /// Level columns plus the URL column.
    pub fn column_count(&self) -> usize {
        self.max_depth + 1
    }
}

/// Organize a flat URL set into a navigation hierarchy table.
///
/// URLs whose path is empty or root-only are dropped. Each surviving URL
/// yields one row of cumulative prefixes ("/a", "/a/b", ...), padded to the
/// deepest path observed. Rows are ordered by the full URL string split on
/// '/', compared segment by segment.
pub fn build_hierarchy(urls: &[String]) -> Result<HierarchyTable, HierarchyError> {
    let mut sorted: Vec<&String> = urls.iter().collect();
    sorted.sort_by(|a, b| slash_split_cmp(a.as_str(), b.as_str()));

    let max_depth = sorted
        .iter()
        .filter_map(|url| path_segments(url.as_str()))
        .map(|segments| segments.len())
        .max()
        .ok_or(HierarchyError::EmptyInput)?;

    let mut rows = Vec::new();
    for url in sorted {
        let Some(segments) = path_segments(url) else {
            continue;
        };
        let mut levels: Vec<String> = Vec::with_capacity(max_depth);
        for i in 0..segments.len() {
            levels.push(format!("/{}", segments[..=i].join("/")));
        }
        while levels.len() < max_depth {
            levels.push(String::new());
        }
        rows.push(HierarchyRow {
            levels,
            url: url.clone(),
        });
    }

    Ok(HierarchyTable { rows, max_depth })
}

/// Path segments of a URL, with leading and trailing slashes trimmed.
/// None for unparseable URLs and for empty or root-only paths.
fn path_segments(url: &str) -> Option<Vec<String>> {
    let parsed = Url::parse(url).ok()?;
    let trimmed = parsed.path().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split('/').map(str::to_string).collect())
}

fn slash_split_cmp(a: &str, b: &str) -> Ordering {
    a.split('/').cmp(b.split('/'))
}

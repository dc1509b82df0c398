use serde::{Deserialize, Serialize};

/// Outcome of one crawl: every in-scope URL discovered via a link, sorted
/// lexicographically, plus the advisory status log. The seed itself only
/// appears in `urls` if some page linked back to it under a string-distinct
/// form (trailing slash, fragment) before it was visited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub seed_url: String,
    pub scope_domain: String,
    pub urls: Vec<String>,
    pub log: Vec<String>,
    pub visited: usize,
    pub cancelled: bool,
}

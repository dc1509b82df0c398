use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Extract every anchor href from `html` and resolve it against `base`.
///
/// Parsing is lenient: malformed markup degrades to whatever anchors the
/// parser can salvage, never an error. Empty hrefs are skipped, unresolvable
/// ones dropped. Fragments are kept as-is; `#section` on a page resolves to
/// the base URL plus that fragment. Scope filtering is the caller's job.
pub fn extract_links(html: &str, base: &Url) -> HashSet<String> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut links = HashSet::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        match base.join(href) {
            Ok(resolved) => {
                links.insert(resolved.to_string());
            }
            Err(e) => {
                debug!("Skipping unresolvable href {:?}: {}", href, e);
            }
        }
    }

    links
}

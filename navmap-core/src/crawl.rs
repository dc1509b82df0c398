use indicatif::{ProgressBar, ProgressStyle};
use navmap_scanner::{CrawlSummary, Crawler, StatusCallback};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use url::Url;

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub seed_url: String,
    pub workers: usize,
    pub timeout_secs: u64,
    pub show_progress_bar: bool,
}

/// Callback for observing crawl status lines as they happen
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl with the given options.
///
/// Wires up a spinner (when enabled), a ctrl-c cancellation flag and the
/// optional status callback, then runs the scanner. Returns the summary with
/// the sorted discovered URLs and the accumulated status log.
pub async fn execute_crawl(
    options: CrawlOptions,
    status_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlSummary, navmap_scanner::CrawlError> {
    let CrawlOptions {
        seed_url,
        workers,
        timeout_secs,
        show_progress_bar,
    } = options;

    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for visited URLs, driven by the status lines
    let visited_count = Arc::new(AtomicUsize::new(0));

    let internal_callback: StatusCallback = {
        let pb = progress_bar.clone();
        let count = visited_count.clone();
        let user_cb = status_callback.clone();
        Arc::new(move |line: String| {
            if line.starts_with("Visiting URL:") {
                let n = count.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(ref pb) = pb {
                    pb.set_message(format!("Crawling... {n} URLs visited"));
                    pb.tick();
                }
            } else if line.starts_with("Error") {
                if let Some(ref pb) = pb {
                    pb.println(&line);
                }
            }
            if let Some(ref cb) = user_cb {
                cb(line);
            }
        })
    };

    // Ctrl-c stops dispatch of new fetches; in-flight ones drain.
    let cancel_flag = Arc::new(AtomicBool::new(false));
    {
        let flag = cancel_flag.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                flag.store(true, Ordering::Relaxed);
            }
        });
    }

    let crawler = Crawler::with_timeout(timeout_secs)
        .with_workers(workers)
        .with_cancel_flag(cancel_flag)
        .with_status_callback(internal_callback);

    let summary = crawler.crawl(&seed_url).await?;

    if let Some(ref pb) = progress_bar {
        if summary.cancelled {
            pb.finish_with_message(format!(
                "Crawl aborted after {} URLs visited",
                summary.visited
            ));
        } else {
            pb.finish_with_message(format!("Crawl complete! {} URLs visited", summary.visited));
        }
    }

    Ok(summary)
}

/// Generate a human-readable crawl report from a summary
pub fn generate_crawl_report(summary: &CrawlSummary) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Seed URL: {}\n", summary.seed_url));
    report.push_str(&format!("  Scope domain: {}\n", summary.scope_domain));
    report.push_str(&format!("  Pages visited: {}\n", summary.visited));
    report.push_str(&format!(
        "  Unique internal URLs: {}\n",
        summary.urls.len()
    ));
    if summary.cancelled {
        report.push_str("  (crawl aborted early)\n");
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if !summary.urls.is_empty() {
        report.push_str(&format!("## {}\n", summary.scope_domain));
        report.push_str(&format!("  {} URLs found\n\n", summary.urls.len()));
        for url in &summary.urls {
            report.push_str(&format!("  {}\n", extract_url_path(url)));
        }
        report.push('\n');
    }

    report
}

use crate::error::{CrawlError, FetchError, Result};
use crate::extract::extract_links;
use crate::fetch::{DEFAULT_TIMEOUT_SECS, Fetcher};
use crate::result::CrawlSummary;
use crate::session::CrawlSession;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

pub type StatusCallback = Arc<dyn Fn(String) + Send + Sync>;

const DEFAULT_WORKERS: usize = 10;

/// Same-domain crawler. Starting from a seed URL it visits every reachable
/// page whose network location matches the seed's, collecting the set of
/// discovered in-scope URLs.
///
/// Individual fetch failures are recorded and skipped; only a malformed seed
/// aborts the operation. Status lines go to the optional callback as they
/// happen and are also accumulated in the returned summary.
pub struct Crawler {
    fetcher: Arc<Fetcher>,
    workers: usize,
    status_callback: Option<StatusCallback>,
    cancel_flag: Arc<AtomicBool>,
}

enum Step {
    Job(String),
    Idle,
    Done,
}

impl Crawler {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            fetcher: Arc::new(Fetcher::with_timeout(timeout_secs)),
            workers: DEFAULT_WORKERS,
            status_callback: None,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_status_callback(mut self, callback: StatusCallback) -> Self {
        self.status_callback = Some(callback);
        self
    }

    /// Install a shared cancellation flag. Once set, workers stop dequeuing
    /// promptly; fetches already in flight drain normally.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = flag;
        self
    }

    pub async fn crawl(&self, seed_url: &str) -> Result<CrawlSummary> {
        let base = Url::parse(seed_url)
            .map_err(|e| CrawlError::InvalidSeedUrl(format!("{seed_url}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CrawlError::InvalidSeedUrl(format!(
                "{seed_url}: scheme must be http or https"
            )));
        }
        let Some(scope_domain) = network_location(&base) else {
            return Err(CrawlError::InvalidSeedUrl(format!("{seed_url}: no host")));
        };

        info!(
            "Starting crawl of {} with {} workers",
            seed_url, self.workers
        );

        let session = Arc::new(Mutex::new(CrawlSession::new(seed_url.to_string())));
        {
            let mut s = session.lock().await;
            emit(
                &mut s,
                &self.status_callback,
                format!("Starting to crawl the website: {seed_url}"),
            );
        }

        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let session = session.clone();
            let fetcher = self.fetcher.clone();
            let callback = self.status_callback.clone();
            let cancel = self.cancel_flag.clone();
            let base = base.clone();
            let scope = scope_domain.clone();

            handles.push(tokio::spawn(async move {
                debug!("Worker {} started", worker_id);
                loop {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }

                    let step = {
                        let mut s = session.lock().await;
                        match s.next_pending() {
                            Some(url) => {
                                emit(&mut s, &callback, format!("Visiting URL: {url}"));
                                Step::Job(url)
                            }
                            None if s.is_drained() => Step::Done,
                            None => Step::Idle,
                        }
                    };

                    let url = match step {
                        Step::Job(url) => url,
                        Step::Done => break,
                        Step::Idle => {
                            // Another worker may still enqueue new URLs.
                            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
                            continue;
                        }
                    };

                    let fetched = fetcher.fetch(&url).await;

                    let mut s = session.lock().await;
                    match fetched {
                        Ok(body) => {
                            for link in extract_links(&body, &base) {
                                if in_scope(&link, &scope) {
                                    s.note_discovered(link);
                                }
                            }
                        }
                        Err(FetchError::UnexpectedStatus(code)) => {
                            warn!("Unexpected status {} for {}", code, url);
                            emit(
                                &mut s,
                                &callback,
                                format!("Error: Received status code {code} for {url}"),
                            );
                        }
                        Err(e) => {
                            warn!("Fetch failed for {}: {}", url, e);
                            emit(&mut s, &callback, format!("Error crawling {url}: {e}"));
                        }
                    }
                    s.finish_visit();
                }
                debug!("Worker {} finished", worker_id);
            }));
        }

        for handle in handles {
            handle.await?;
        }

        let mut s = session.lock().await;
        let cancelled = self.cancel_flag.load(Ordering::Relaxed);
        let closing_line = if cancelled {
            format!("Crawl aborted; {} URLs left unvisited", s.pending_count())
        } else {
            format!(
                "Finished crawling. Found {} unique internal URLs.",
                s.discovered_count()
            )
        };
        emit(&mut s, &self.status_callback, closing_line);

        info!("Crawl complete. Visited {} pages", s.visited_count());

        let visited = s.visited_count();
        let (urls, log) = s.take_parts();
        Ok(CrawlSummary {
            seed_url: seed_url.to_string(),
            scope_domain,
            urls,
            log,
            visited,
            cancelled,
        })
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}

fn emit(session: &mut CrawlSession, callback: &Option<StatusCallback>, line: String) {
    if let Some(cb) = callback {
        cb(line.clone());
    }
    session.record(line);
}

/// Network location of a URL: host plus explicit port, the component scope
/// membership is tested against.
fn network_location(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

fn in_scope(candidate: &str, scope_domain: &str) -> bool {
    Url::parse(candidate)
        .ok()
        .and_then(|u| network_location(&u))
        .is_some_and(|netloc| netloc == scope_domain)
}

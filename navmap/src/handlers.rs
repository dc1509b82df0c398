use anyhow::Context;
use chrono::Local;
use clap::ArgMatches;
use colored::Colorize;
use navmap_core::hierarchy::HierarchyError;
use navmap_core::{
    CrawlOptions, build_hierarchy, execute_crawl, export_workbook, generate_crawl_report,
};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub async fn handle_crawl(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<Url>("url").unwrap();
    let threads = *sub_matches.get_one::<usize>("threads").unwrap_or(&10);
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let output = sub_matches.get_one::<String>("output");
    let no_export = sub_matches.get_flag("no-export");

    println!("\n🕷  Crawling {}", url.host_str().unwrap_or("unknown"));
    println!("Workers: {}", threads);
    println!("Timeout: {}s\n", timeout);

    let options = CrawlOptions {
        seed_url: url.as_str().to_string(),
        workers: threads,
        timeout_secs: timeout,
        show_progress_bar: true,
    };

    let summary = match execute_crawl(options, None).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} Crawl failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("\n{} Crawl complete!\n", "✓".green().bold());
    print!("{}", generate_crawl_report(&summary));

    if no_export {
        return;
    }

    if summary.urls.is_empty() {
        println!("{} No URLs found.", "ℹ".blue());
        return;
    }

    match build_hierarchy(&summary.urls) {
        Ok(table) => {
            let bytes = match export_workbook(&table) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("{} Export failed: {}", "✗".red().bold(), e);
                    std::process::exit(1);
                }
            };

            let path = resolve_output_path(output.map(String::as_str), &summary.scope_domain);
            if let Err(e) = write_workbook(&path, &bytes) {
                eprintln!("{} {:#}", "✗".red().bold(), e);
                std::process::exit(1);
            }

            println!(
                "{} Wrote {} rows to {}",
                "✓".green().bold(),
                table.rows.len().to_string().cyan(),
                path.display().to_string().bright_white()
            );
        }
        Err(HierarchyError::EmptyInput) => {
            println!(
                "{} Only root-level URLs discovered; nothing to export.",
                "ℹ".blue()
            );
        }
    }
}

/// Expand and resolve the output path, falling back to a timestamped
/// filename in the working directory.
pub fn resolve_output_path(output: Option<&str>, scope_domain: &str) -> PathBuf {
    match output {
        Some(path) => PathBuf::from(shellexpand::tilde(path).as_ref()),
        None => PathBuf::from(default_output_name(scope_domain)),
    }
}

pub fn default_output_name(scope_domain: &str) -> String {
    let host = scope_domain.replace(':', "_");
    format!(
        "{}_sitemap_{}.xlsx",
        host,
        Local::now().format("%Y%m%d-%H%M%S")
    )
}

pub fn write_workbook(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    fs::write(path, bytes)
        .with_context(|| format!("failed to write workbook to {}", path.display()))
}

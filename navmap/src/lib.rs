// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    default_output_name,
    resolve_output_path,
    write_workbook,
};

// Re-export the crawl pipeline from navmap-core
pub use navmap_core::{
    CrawlOptions, build_hierarchy, execute_crawl, export_workbook, extract_url_path,
    generate_crawl_report,
};

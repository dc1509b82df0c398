pub mod crawl;
pub mod export;
pub mod hierarchy;

pub use crawl::{
    CrawlOptions, CrawlProgressCallback, execute_crawl, extract_url_path, generate_crawl_report,
};
pub use export::{ExportError, export_workbook};
pub use hierarchy::{HierarchyError, HierarchyRow, HierarchyTable, build_hierarchy};

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
 _ __    __ _ __   __ _ __ ___    __ _  _ __
| '_ \  / _` |\ \ / /| '_ ` _ \  / _` || '_ \
| | | || (_| | \ V / | | | | | || (_| || |_) |
|_| |_| \__,_|  \_/  |_| |_| |_| \__,_|| .__/
                                       |_|    "#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}\n",
        format!("  site hierarchy mapper v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

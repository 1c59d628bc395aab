pub mod crawl;
pub mod graph;
pub mod path;
pub mod progress;
pub mod report;

pub use crawl::{CrawlOptions, DEFAULT_CONCURRENCY, GraphBuilder, SeedReport, execute_crawl};
pub use graph::ActorGraph;
pub use path::{SearchOutcome, shortest_distance};
pub use progress::{ProgressCallback, ProgressHandle, ProgressReporter};
pub use report::{TraceReport, generate_neighborhood_report, generate_trace_report};

use colored::Colorize;

/// Print the startup banner.
pub fn print_banner() {
    let banner = r#"
                _
   ___ ___  ___| |_ __ _ _ __
  / __/ _ \/ __| __/ _` | '__|
 | (_| (_) \__ \ || (_| | |
  \___\___/|___/\__\__,_|_|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "  costar v{} · shortest path through the silver screen\n",
        env!("CARGO_PKG_VERSION")
    );
}

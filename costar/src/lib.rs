pub mod handlers;

// Re-export commonly used handler helpers for convenience
pub use handlers::parse_seed_url;

// Re-export the core surface so callers need a single crate
pub use costar_core::{
    ActorGraph, CrawlOptions, SearchOutcome, TraceReport, execute_crawl, shortest_distance,
};

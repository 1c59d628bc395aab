use crate::crawl::SeedReport;
use crate::graph::ActorGraph;
use crate::path::SearchOutcome;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";

/// How many co-stars a neighborhood listing shows before truncating.
const NEIGHBOR_DISPLAY_LIMIT: usize = 25;

/// Machine-readable result of a trace run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    pub from: String,
    pub to: String,
    pub degrees: Option<usize>,
    pub outcome: String,
    pub actors: usize,
    /// Undirected edge count (the adjacency representation counts each edge
    /// twice; this is the human number).
    pub edges: usize,
    pub seeds: Vec<SeedReport>,
    pub elapsed_secs: f64,
}

impl TraceReport {
    pub fn new(
        from: &str,
        to: &str,
        outcome: SearchOutcome,
        graph: &ActorGraph,
        seeds: Vec<SeedReport>,
        elapsed: Duration,
    ) -> Self {
        let (degrees, outcome_str) = match outcome {
            SearchOutcome::Found(d) => (Some(d), "found"),
            SearchOutcome::NoPath => (None, "no-path"),
            SearchOutcome::NotFound => (None, "not-found"),
        };

        Self {
            from: from.to_string(),
            to: to.to_string(),
            degrees,
            outcome: outcome_str.to_string(),
            actors: graph.vertex_count(),
            edges: graph.edge_count() / 2,
            seeds,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}

/// Extract the path component from an actor URL for compact display
pub fn display_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() { "/".to_string() } else { path }
        })
        .unwrap_or_else(|| url.to_string())
}

fn seed_summary(report: &mut String, seed: &SeedReport) {
    report.push_str(&format!("\n## {}\n", display_path(&seed.seed)));
    report.push_str(&format!(
        "  Works: {} found · {} crawled · {} excluded · {} failed\n",
        seed.works_found, seed.works_crawled, seed.works_excluded, seed.works_failed
    ));
    report.push_str(&format!("  Co-stars linked: {}\n", seed.co_stars));
}

/// Render the human-readable summary of a trace run. The verdict line is
/// printed separately by the caller so it can be colored.
pub fn generate_trace_report(trace: &TraceReport) -> String {
    let mut report = String::new();
    report.push_str(DIVIDER);
    report.push_str("\n# Summary:\n");
    report.push_str(&format!("  Actors discovered: {}\n", trace.actors));
    report.push_str(&format!("  Co-star edges: {}\n", trace.edges));

    for seed in &trace.seeds {
        seed_summary(&mut report, seed);
    }

    report.push_str(&format!("\n  Total elapsed: {:.2}s\n\n", trace.elapsed_secs));
    report.push_str(DIVIDER);
    report
}

/// Render a single seed's one-hop neighborhood.
pub fn generate_neighborhood_report(graph: &ActorGraph, seed: &SeedReport) -> String {
    let mut report = String::new();
    report.push_str(DIVIDER);
    report.push_str("\n# Summary:\n");
    report.push_str(&format!("  Actors discovered: {}\n", graph.vertex_count()));
    report.push_str(&format!("  Co-star edges: {}\n", graph.edge_count() / 2));
    seed_summary(&mut report, seed);

    if let Some(neighbors) = graph.neighbors(&seed.seed) {
        let mut listed: Vec<String> = neighbors.iter().map(|n| display_path(n)).collect();
        listed.sort();

        report.push_str("\n## Co-stars\n");
        for path in listed.iter().take(NEIGHBOR_DISPLAY_LIMIT) {
            report.push_str(&format!("  {}\n", path));
        }
        if listed.len() > NEIGHBOR_DISPLAY_LIMIT {
            report.push_str(&format!(
                "  ... and {} more\n",
                listed.len() - NEIGHBOR_DISPLAY_LIMIT
            ));
        }
    }

    report.push('\n');
    report.push_str(DIVIDER);
    report
}

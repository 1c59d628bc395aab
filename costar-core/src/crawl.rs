use crate::graph::ActorGraph;
use costar_scraper::{Extractor, Fetcher};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use url::Url;

/// Default cap on simultaneous in-flight work fetches per seed.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Options for configuring a crawl across one or more seed actors
pub struct CrawlOptions {
    pub seeds: Vec<String>,
    pub concurrency: usize,
    pub timeout_secs: u64,
}

/// Per-seed crawl statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub seed: String,
    pub works_found: usize,
    pub works_crawled: usize,
    pub works_excluded: usize,
    pub works_failed: usize,
    pub co_stars: usize,
}

impl SeedReport {
    fn empty(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            works_found: 0,
            works_crawled: 0,
            works_excluded: 0,
            works_failed: 0,
            co_stars: 0,
        }
    }
}

enum WorkOutcome {
    Crawled,
    Excluded,
    Failed,
}

/// One-hop crawl around a seed actor: filmography first, then every work's
/// cast list, inserting a co-star edge for each participant.
///
/// The crawl never recurses into co-stars' own filmographies; the graph is
/// a star-shaped neighborhood around each seed, plus overlap where seeds
/// share a work.
pub struct GraphBuilder {
    fetcher: Fetcher,
    extractor: Extractor,
    graph: ActorGraph,
    concurrency: usize,
}

impl GraphBuilder {
    pub fn new(graph: ActorGraph) -> Self {
        Self {
            fetcher: Fetcher::new(),
            extractor: Extractor::new(),
            graph,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn graph(&self) -> &ActorGraph {
        &self.graph
    }

    /// Build the seed's one-hop neighborhood.
    ///
    /// A failed or empty filmography fetch leaves the seed out of the graph
    /// entirely; a later path query reports it as not found. Individual
    /// work failures are logged and skipped, and whatever edges were
    /// discovered before a failure stay in the graph.
    pub async fn build_graph(&self, seed: &str) -> SeedReport {
        let mut report = SeedReport::empty(seed);

        let seed_url = match Url::parse(seed) {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid seed URL {}: {}", seed, e);
                return report;
            }
        };

        let html = match self.fetcher.fetch(seed).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch filmography for {}: {}", seed, e);
                return report;
            }
        };

        let works = self.extractor.extract_works(&seed_url, &html);
        if works.is_empty() {
            debug!("No credited works found for {}", seed);
            return report;
        }

        report.works_found = works.len();
        info!("Discovered {} works for {}", works.len(), seed);

        // Bound the fan-out; a prolific filmography must not translate into
        // hundreds of simultaneous outstanding requests.
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = Vec::new();

        for work_url in works {
            let fetcher = self.fetcher.clone();
            let extractor = self.extractor.clone();
            let graph = self.graph.clone();
            let seed = seed.to_string();
            let semaphore = semaphore.clone();

            tasks.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();

                let html = match fetcher.fetch(&work_url).await {
                    Ok(html) => html,
                    Err(e) => {
                        warn!("Skipping work {}: {}", work_url, e);
                        return WorkOutcome::Failed;
                    }
                };

                if extractor.is_excluded_category(&html) {
                    debug!("Skipping excluded work {}", work_url);
                    return WorkOutcome::Excluded;
                }

                let base = match Url::parse(&work_url) {
                    Ok(url) => url,
                    Err(e) => {
                        warn!("Skipping work {}: {}", work_url, e);
                        return WorkOutcome::Failed;
                    }
                };

                for co_star in extractor.extract_participants(&base, &html) {
                    if co_star != seed {
                        graph.add_edge(&seed, &co_star);
                    }
                }

                WorkOutcome::Crawled
            }));
        }

        for task in tasks {
            match task.await {
                Ok(WorkOutcome::Crawled) => report.works_crawled += 1,
                Ok(WorkOutcome::Excluded) => report.works_excluded += 1,
                Ok(WorkOutcome::Failed) => report.works_failed += 1,
                Err(e) => {
                    warn!("Crawl task for {} failed: {}", seed, e);
                    report.works_failed += 1;
                }
            }
        }

        report.co_stars = self.graph.neighbors(seed).map(|n| n.len()).unwrap_or(0);
        info!(
            "Crawl of {} complete: {} co-stars linked",
            seed, report.co_stars
        );
        report
    }
}

/// Crawl every seed concurrently into the shared graph.
pub async fn execute_crawl(options: &CrawlOptions, graph: &ActorGraph) -> Vec<SeedReport> {
    let builder = GraphBuilder::new(graph.clone())
        .with_fetcher(Fetcher::with_timeout(options.timeout_secs))
        .with_concurrency(options.concurrency);

    join_all(options.seeds.iter().map(|seed| builder.build_graph(seed))).await
}

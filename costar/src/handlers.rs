use clap::ArgMatches;
use colored::Colorize;
use costar_core::{
    ActorGraph, CrawlOptions, ProgressCallback, ProgressReporter, SearchOutcome, TraceReport,
    execute_crawl, generate_neighborhood_report, generate_trace_report, shortest_distance,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

// Helper functions for seed handling

/// Parse a seed argument as a URL, trying to add https:// if needed
pub fn parse_seed_url(raw: &str) -> Option<String> {
    if Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }

    let with_scheme = format!("https://{}", raw);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    None
}

fn require_seed_url(raw: &str) -> String {
    match parse_seed_url(raw) {
        Some(url) => url,
        None => {
            eprintln!("✗ Invalid actor URL: {}", raw);
            std::process::exit(1);
        }
    }
}

fn crawl_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Crawling filmographies...");
    pb
}

pub async fn handle_trace(sub_matches: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let from_raw = sub_matches.get_one::<String>("from").unwrap();
    let to_raw = sub_matches.get_one::<String>("to").unwrap();
    let workers = *sub_matches.get_one::<usize>("workers").unwrap_or(&8);
    let interval = *sub_matches.get_one::<u64>("interval").unwrap_or(&5);
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let no_progress = sub_matches.get_flag("no-progress");
    let json = sub_matches.get_flag("json");

    let from = require_seed_url(from_raw);
    let to = require_seed_url(to_raw);

    if !quiet && !json {
        println!("\n🎬 Tracing connection");
        println!("From: {}", from);
        println!("To: {}", to);
        println!("Workers per seed: {}\n", workers);
    }

    let graph = ActorGraph::new();
    let started = Instant::now();

    // Periodic progress lines are printed above the spinner so the two
    // kinds of output do not fight over the terminal.
    let spinner = if no_progress || json {
        None
    } else {
        Some(crawl_spinner())
    };

    let reporter = spinner.as_ref().map(|pb| {
        let pb = pb.clone();
        let callback: ProgressCallback = Arc::new(move |msg: String| pb.println(msg));
        ProgressReporter::new(Duration::from_secs(interval)).spawn(
            graph.clone(),
            started,
            callback,
        )
    });

    let options = CrawlOptions {
        seeds: vec![from.clone(), to.clone()],
        concurrency: workers,
        timeout_secs: timeout,
    };
    let seed_reports = execute_crawl(&options, &graph).await;

    if let Some(handle) = reporter {
        handle.stop().await;
    }
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcome = shortest_distance(&graph, &from, &to);
    let trace = TraceReport::new(&from, &to, outcome, &graph, seed_reports, started.elapsed());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&trace).expect("trace report serializes")
        );
        return;
    }

    match outcome {
        SearchOutcome::Found(degrees) => println!(
            "{} Degrees of separation: {}",
            "✓".green().bold(),
            degrees.to_string().bright_white().bold()
        ),
        SearchOutcome::NoPath => println!(
            "{} No connection found within the crawled neighborhood",
            "✗".yellow().bold()
        ),
        SearchOutcome::NotFound => println!(
            "{} One or both actors are missing from the crawled graph",
            "✗".red().bold()
        ),
    }
    println!();
    print!("{}", generate_trace_report(&trace));
}

pub async fn handle_crawl(sub_matches: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url_raw = sub_matches.get_one::<String>("url").unwrap();
    let workers = *sub_matches.get_one::<usize>("workers").unwrap_or(&8);
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let json = sub_matches.get_flag("json");

    let seed = require_seed_url(url_raw);

    if !quiet && !json {
        println!("\n🎬 Crawling co-star neighborhood");
        println!("Seed: {}", seed);
        println!("Workers: {}\n", workers);
    }

    let graph = ActorGraph::new();
    let started = Instant::now();

    let spinner = if json { None } else { Some(crawl_spinner()) };

    let options = CrawlOptions {
        seeds: vec![seed.clone()],
        concurrency: workers,
        timeout_secs: timeout,
    };
    let mut reports = execute_crawl(&options, &graph).await;
    let report = reports.pop().expect("one report per seed");

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("seed report serializes")
        );
        return;
    }

    println!(
        "{} Crawl complete in {:.2}s\n",
        "✓".green().bold(),
        started.elapsed().as_secs_f64()
    );
    print!("{}", generate_neighborhood_report(&graph, &report));
}

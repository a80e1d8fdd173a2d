//! Tagalog-Scraper main entry point
//!
//! This is the command-line interface for the dictionary crawler.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tagalog_scraper::config::{load_config_with_hash, validate, Config};
use tagalog_scraper::crawler::{crawl, letter_url};
use tagalog_scraper::output::{dictionary_statistics, load_dictionary, print_statistics};
use tracing_subscriber::EnvFilter;

/// Tagalog-Scraper: a letter-by-letter dictionary crawler
///
/// Crawls every listing page of the online Tagalog dictionary, extracts each
/// word's parts of speech and definition, and writes them to one JSON file.
#[derive(Parser, Debug)]
#[command(name = "tagalog-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A letter-by-letter Tagalog dictionary crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Fetch each letter's pages in concurrent batches
    #[arg(long)]
    concurrent: bool,

    /// Maximum concurrent requests per batch
    #[arg(long, value_name = "N")]
    batch_size: Option<usize>,

    /// Sort the output by headword
    #[arg(long)]
    sort: bool,

    /// Output JSON file
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Letters to crawl, e.g. "abc"
    #[arg(long, value_name = "LETTERS")]
    letters: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration and first-page URLs without crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics for an existing output file and exit
    #[arg(long, value_name = "FILE", conflicts_with = "dry_run")]
    stats: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Some(path) = &cli.stats {
        return handle_stats(path);
    }

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tagalog_scraper=info,warn"),
            1 => EnvFilter::new("tagalog_scraper=debug,info"),
            2 => EnvFilter::new("tagalog_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if cli.concurrent {
        config.fetch.concurrent = true;
    }
    if let Some(batch_size) = cli.batch_size {
        config.fetch.batch_size = batch_size;
    }
    if cli.sort {
        config.output.sort = true;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(letters) = &cli.letters {
        config.site.letters = letters.clone();
    }

    validate(&config).context("invalid command-line overrides")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Tagalog-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Letters: {}", config.site.letters);

    println!("\nFetching:");
    if config.fetch.concurrent {
        println!("  Mode: concurrent (batch size {})", config.fetch.batch_size);
    } else {
        println!("  Mode: sequential");
    }
    println!("  Request timeout: {}s", config.fetch.request_timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nExtraction:");
    println!(
        "  Parts of speech ({}): {}",
        config.extract.parts_of_speech.len(),
        config.extract.parts_of_speech.join(" ")
    );
    println!("  Definition split: {:?}", config.extract.definition_split);

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    println!("  Sorted: {}", config.output.sort);

    println!("\nFirst pages:");
    for letter in config.letters() {
        println!("  - {}", letter_url(&config.site.base_url, letter));
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: summarizes an existing output file
fn handle_stats(path: &Path) -> anyhow::Result<()> {
    println!("Dictionary: {}\n", path.display());

    let dictionary =
        load_dictionary(path).with_context(|| format!("failed to read {}", path.display()))?;
    print_statistics(&dictionary_statistics(&dictionary));

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let output_path = config.output.path.clone();

    match crawl(config).await {
        Ok(dictionary) => {
            tracing::info!(
                "Crawl completed successfully: {} words written to {}",
                dictionary.len(),
                output_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use har_endpoints::export::{self, OutputFormat};
use har_endpoints::{archive, config, extract, queries, FilterCriteria, FilterOptions};

#[derive(Parser, Debug)]
#[command(
    name = "har-endpoints",
    about = "Parse HAR files and extract the API endpoints they exercise"
)]
struct Args {
    /// Path to the HAR file to analyze
    har_file: PathBuf,

    /// Filter endpoints by domain
    #[arg(short, long)]
    domain: Option<String>,

    /// Filter endpoints by HTTP method (GET, POST, etc.)
    #[arg(short, long)]
    method: Option<String>,

    /// Filter endpoints by HTTP status code
    #[arg(short, long)]
    status: Option<String>,

    /// Filter endpoints by URL path pattern (regex)
    #[arg(short = 'p', long)]
    pattern: Option<String>,

    /// Only show API endpoints
    #[arg(short, long)]
    api_only: bool,

    /// Show all endpoints even when the config file sets api_only
    #[arg(long, conflicts_with = "api_only")]
    no_api_only: bool,

    /// Output file path (supports .json and .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format for stdout output
    #[arg(long)]
    format: Option<OutputFormat>,

    /// List all unique domains in the HAR file
    #[arg(long)]
    list_domains: bool,

    /// Optional config TOML path (default filters, API patterns)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            domain: self.domain.clone(),
            method: self.method.clone(),
            status_code: self.status.clone(),
            path_pattern: self.pattern.clone(),
            api_only: self.api_only,
            api_patterns: None,
        }
    }

    /// Merge CLI flags over the config file filters and validate the result.
    fn filter_criteria(&self, cfg: &config::Config) -> anyhow::Result<FilterCriteria> {
        let mut opts = self.filter_options().or(cfg.filter_options()?);
        if self.no_api_only {
            opts.api_only = false;
        }
        Ok(FilterCriteria::from_options(&opts)?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    run(Args::parse()).await
}

async fn run(args: Args) -> anyhow::Result<()> {
    let cfg = match args.config {
        Some(ref p) => config::Config::load_from_path(p).await?,
        None => config::Config::default(),
    };
    // Filters are checked before the archive is opened.
    let criteria = args.filter_criteria(&cfg)?;

    let har = archive::load_archive(&args.har_file).await?;

    if args.list_domains {
        let transactions: Vec<_> = extract::extract_transactions(&har)?.collect();
        println!("Unique domains found:");
        for domain in queries::domains::unique_domains(&transactions) {
            println!("  - {}", domain);
        }
        return Ok(());
    }

    let result = har_endpoints::inspect_with(&har, &criteria)?;
    if result.skipped > 0 {
        warn!(skipped = result.skipped, "some archive entries were unreadable");
    }
    info!(
        transactions = result.transactions,
        endpoints = result.endpoints.len(),
        "inspection complete"
    );

    match args.output {
        Some(ref path) => {
            export::export_to_path(path, &result.endpoints).await?;
            println!(
                "Exported {} endpoints to {}",
                result.endpoints.len(),
                path.display()
            );
        }
        None => {
            let format = args.format.unwrap_or(cfg.general.format);
            print!("{}", with_trailing_newline(format.render(&result.endpoints)?));
        }
    }

    Ok(())
}

fn with_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

//! Coface Scraper CLI
//!
//! List the countries of the Coface risk dashboard and export country sheets
//! to CSV.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use coface_scraper::config::DEFAULT_LISTING_URL;
use coface_scraper::{
    slug, ExportPaths, ExportReport, LogProgress, OptionExtractor, ScrapeSession, ScraperConfig,
    Selection,
};
use tracing_subscriber::EnvFilter;

/// Coface country risk scraper
#[derive(Parser, Debug)]
#[command(name = "coface-scraper")]
#[command(version)]
#[command(about = "Scrape Coface country risk sheets into CSV files")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, default_value = "30000")]
    timeout_ms: u64,

    /// User agent sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Dashboard listing page; country sheets live under it
    #[arg(long, global = true, default_value = DEFAULT_LISTING_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the countries offered by the dashboard
    List {
        /// Only show labels containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the URL slug of each label
    Slug {
        /// Country labels
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Scrape the given countries and write the two CSV files
    Export {
        /// Output name; `out.xlsx` writes `out.csv` and `out_pros_cons.csv`
        #[arg(short, long)]
        output: String,

        /// Scrape the labels as given, without checking them against the listing
        #[arg(long)]
        no_verify: bool,

        /// Country labels, as listed by `list`
        #[arg(required = true)]
        countries: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Slug { labels } => {
            for label in &labels {
                println!("{}", slug::normalize(label));
            }
        }
        Command::List { filter, json } => {
            let session = build_session(&args.base_url, args.timeout_ms, args.user_agent)?;
            let countries = session
                .list_countries()
                .await
                .context("Failed to fetch options")?;
            let shown = OptionExtractor::filter(&countries, filter.as_deref().unwrap_or_default());
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                for country in shown {
                    println!("{}", country);
                }
            }
        }
        Command::Export {
            output,
            no_verify,
            countries,
        } => {
            let session = build_session(&args.base_url, args.timeout_ms, args.user_agent)?;
            let report = run_export(&session, &output, countries, no_verify).await?;
            if report.is_complete() {
                println!("CSV file created successfully");
            }
            for path in &report.written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn build_session(
    base_url: &str,
    timeout_ms: u64,
    user_agent: Option<String>,
) -> anyhow::Result<ScrapeSession> {
    let mut builder = ScraperConfig::builder()
        .listing_url(base_url)
        .timeout_ms(timeout_ms);
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    ScrapeSession::new(builder.build()).context("invalid configuration")
}

/// Check the output name, resolve the selection and export it
async fn run_export(
    session: &ScrapeSession,
    output: &str,
    countries: Vec<String>,
    no_verify: bool,
) -> anyhow::Result<ExportReport> {
    ExportPaths::from_output_name(output)?;

    let selection = if no_verify {
        countries.into_iter().collect::<Selection>()
    } else {
        let listed = session
            .list_countries()
            .await
            .context("Failed to fetch options")?;
        resolve_selection(&listed, &countries)
    };
    if selection.is_empty() {
        bail!("none of the requested countries are listed on the dashboard");
    }

    Ok(session
        .export(&selection, output, &mut LogProgress::new())
        .await?)
}

/// Map typed labels onto listed ones, dropping unknown labels with a warning
fn resolve_selection(listed: &[String], requested: &[String]) -> Selection {
    requested
        .iter()
        .filter_map(|input| {
            let found = OptionExtractor::resolve(listed, input);
            if found.is_none() {
                tracing::warn!("'{}' is not listed on the dashboard, skipping", input);
            }
            found
        })
        .collect()
}

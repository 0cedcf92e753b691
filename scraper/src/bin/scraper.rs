use anyhow::Result;
use clap::Parser;
use spotify_chart_scraper::{
    scrape_chart, scrape_chart_with, BrowserConfig, HttpFetcher, ScrapeConfig, ScrapeOutcome,
    SnapshotFile, DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use std::time::Duration;

/// Scrape the Spotify global daily chart from kworb.net into a CSV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to write
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Show the browser window instead of running headless
    #[arg(long)]
    show_browser: bool,

    /// Fetch the page with a plain HTTP request instead of a browser
    #[arg(long, conflicts_with = "from_html")]
    http: bool,

    /// Parse a saved page instead of fetching one
    #[arg(long)]
    from_html: Option<PathBuf>,

    /// Seconds to let the page settle before capturing it
    #[arg(long, default_value_t = 3)]
    settle_secs: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let browser = if cli.show_browser {
        BrowserConfig::visible()
    } else {
        BrowserConfig::default()
    };
    let config = ScrapeConfig {
        output: cli.output,
        browser: BrowserConfig {
            settle: Duration::from_secs(cli.settle_secs),
            ..browser
        },
        ..ScrapeConfig::default()
    };

    let outcome = match (&cli.from_html, cli.http) {
        (Some(path), _) => scrape_chart_with(&SnapshotFile::new(path), &config)?,
        (None, true) => scrape_chart_with(&HttpFetcher::new(), &config)?,
        (None, false) => scrape_chart(&config)?,
    };

    match outcome {
        ScrapeOutcome::Written {
            path,
            count,
            skipped,
        } => {
            println!(
                "✅ Successfully scraped {} songs and saved to '{}'",
                count,
                path.display()
            );
            if !skipped.is_empty() {
                println!("   {} rows skipped", skipped.len());
            }
        }
        // Already reported by the scraper's warnings
        ScrapeOutcome::TableNotFound | ScrapeOutcome::NoRows { .. } => {}
    }

    Ok(())
}

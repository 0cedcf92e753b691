use anyhow::{Context, Result};
use spotify_chart_scraper::snapshot::{save_snapshot, FAILURES_DIR};
use spotify_chart_scraper::{
    parse_chart_html, BrowserConfig, BrowserFetcher, PageSource, CHART_URL,
};
use std::env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get the snapshot name from command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Please provide a name for the snapshot");
        eprintln!("Usage: cargo run --bin save_page_snapshot <name>");
        std::process::exit(1);
    }

    let name = &args[1];

    println!("Rendering {}...", CHART_URL);

    let fetcher = BrowserFetcher::new(BrowserConfig::default());
    let html = fetcher
        .fetch(CHART_URL)
        .context("Failed to render chart page")?;

    let file_path = save_snapshot(&html, FAILURES_DIR, name)?;
    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    // See what the parser makes of the captured page
    println!("\nParsing the captured page:");
    match parse_chart_html(&html) {
        None => {
            println!("❌ No <table> element found - structural issue");
        }
        Some(chart) => {
            println!("  - Parsed rows: {}", chart.rows.len());
            println!("  - Skipped rows: {}", chart.skipped.len());
            for skip in chart.malformed() {
                println!("    row {}: {}", skip.position, skip.reason);
            }

            if chart.rows.is_empty() {
                println!("❌ Table found but no rows parsed - content parsing issue");
            } else {
                println!("✅ Parse succeeded. This may not be a failure case.");
            }
        }
    }

    println!("\nThis page has been saved and will be included in regression tests.");

    Ok(())
}

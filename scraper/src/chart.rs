use crate::config::ScrapeConfig;
use crate::fetch::{BrowserFetcher, PageSource};
use crate::row::{parse_row, ChartRow, SkipReason};
use crate::sink::save_chart_rows;
use crate::table::{data_rows, locate_table};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use scraper::Html;
use std::path::PathBuf;

/// A data row that did not make it into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based position below the header row
    pub position: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedChart {
    pub rows: Vec<ChartRow>,
    pub skipped: Vec<SkippedRow>,
}

impl ParsedChart {
    /// Skips other than short spacer/ad rows
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedRow> {
        self.skipped.iter().filter(|s| !s.reason.is_structural())
    }
}

/// How a run ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The page had no `<table>`; no file was written.
    TableNotFound,
    /// A table was found but no row parsed; no file was written.
    NoRows { skipped: Vec<SkippedRow> },
    Written {
        path: PathBuf,
        count: usize,
        skipped: Vec<SkippedRow>,
    },
}

/// Parse every data row of the first table in `html`. Returns `None` when the
/// page has no table at all.
pub fn parse_chart_html(html: &str) -> Option<ParsedChart> {
    let document = Html::parse_document(html);
    let table = locate_table(&document)?;

    let mut chart = ParsedChart::default();
    for (idx, cells) in data_rows(table).iter().enumerate() {
        let position = idx + 1;
        match parse_row(cells) {
            Ok(row) => chart.rows.push(row),
            Err(reason) => {
                if reason.is_structural() {
                    debug!("Skipped row {}: {}", position, reason);
                } else {
                    warn!("Skipped row {} due to error: {}", position, reason);
                }
                chart.skipped.push(SkippedRow { position, reason });
            }
        }
    }

    Some(chart)
}

/// Fetch the chart with `source`, parse it, and save the rows to
/// `config.output`. Only fetch and write failures are errors.
pub fn scrape_chart_with(source: &dyn PageSource, config: &ScrapeConfig) -> Result<ScrapeOutcome> {
    info!("Starting scraper for: {}", config.url);

    let html = source
        .fetch(&config.url)
        .with_context(|| format!("Failed to fetch {}", config.url))?;

    let Some(ParsedChart { rows, skipped }) = parse_chart_html(&html) else {
        warn!("Could not find chart table. The site layout may have changed.");
        return Ok(ScrapeOutcome::TableNotFound);
    };

    if rows.is_empty() {
        warn!("No data scraped ({} rows skipped)", skipped.len());
        return Ok(ScrapeOutcome::NoRows { skipped });
    }

    let count = save_chart_rows(&rows, &config.output)?;
    info!("Saved {} rows to {}", count, config.output.display());

    Ok(ScrapeOutcome::Written {
        path: config.output.clone(),
        count,
        skipped,
    })
}

/// Render the chart page in a browser and save it as CSV.
pub fn scrape_chart(config: &ScrapeConfig) -> Result<ScrapeOutcome> {
    let fetcher = BrowserFetcher::new(config.browser.clone());
    scrape_chart_with(&fetcher, config)
}

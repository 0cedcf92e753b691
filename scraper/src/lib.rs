pub mod chart;
pub mod config;
pub mod fetch;
pub mod node;
pub mod row;
pub mod sink;
pub mod snapshot;
pub mod table;

// Fixture-driven tests over whole chart pages
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::chart::{
    parse_chart_html, scrape_chart, scrape_chart_with, ParsedChart, ScrapeOutcome, SkippedRow,
};
pub use crate::config::{BrowserConfig, ScrapeConfig, CHART_URL, DEFAULT_OUTPUT};
pub use crate::fetch::{BrowserFetcher, FetchError, HttpFetcher, PageSource, SnapshotFile};
pub use crate::row::{parse_row, ChartRow, SkipReason};
pub use crate::sink::save_chart_rows;

use std::path::PathBuf;
use std::time::Duration;

/// kworb.net mirror of the Spotify global daily top 200.
pub const CHART_URL: &str = "https://kworb.net/spotify/country/global_daily.html";

pub const DEFAULT_OUTPUT: &str = "spotify_top200.csv";

/// Time given to client-side scripts to fill in the table after navigation.
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(3);

/// Configuration for the browser used to render the chart page
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Extra Chrome flags. These only affect the execution environment,
    /// never the captured markup.
    pub chrome_flags: Vec<String>,

    /// Wait after navigation before the page is captured
    pub settle: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_flags: vec!["--disable-gpu".to_string(), "--log-level=3".to_string()],
            settle: DEFAULT_SETTLE,
        }
    }
}

impl BrowserConfig {
    /// Same flags, but with a visible browser window
    pub fn visible() -> Self {
        Self {
            headless: false,
            ..Self::default()
        }
    }
}

/// Everything a single scrape run needs.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: PathBuf,
    pub browser: BrowserConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: CHART_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            browser: BrowserConfig::default(),
        }
    }
}

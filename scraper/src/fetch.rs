use crate::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info};
use reqwest::blocking::Client;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// Errors that end a run before any parsing happens
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Browser launch failed: {0}")]
    Launch(String),

    #[error("Tab creation failed: {0}")]
    Tab(String),

    #[error("Failed to navigate to {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("Failed to capture page content: {0}")]
    Capture(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read page snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can hand back the markup behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Renders the page in headless Chrome so client-side scripts get to run.
pub struct BrowserFetcher {
    config: BrowserConfig,
}

impl BrowserFetcher {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }
}

impl PageSource for BrowserFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Launching browser (headless: {})", self.config.headless);
        let session = BrowserSession::launch(launch_options(&self.config)?)?;

        // The session (and with it Chrome) is dropped on every return path.
        session.render(url, &self.config)
    }
}

/// Build Chrome launch options from our config
fn launch_options(config: &BrowserConfig) -> Result<LaunchOptions<'_>, FetchError> {
    let args: Vec<&OsStr> = config
        .chrome_flags
        .iter()
        .map(|flag| OsStr::new(flag.as_str()))
        .collect();

    LaunchOptions::default_builder()
        .headless(config.headless)
        .args(args)
        .build()
        .map_err(|e| FetchError::Launch(e.to_string()))
}

/// One running Chrome process, owned by the inner `Browser`. Dropping the
/// session drops the `Browser`, which terminates the process.
struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    fn launch(options: LaunchOptions) -> Result<Self, FetchError> {
        let browser = Browser::new(options).map_err(|e| FetchError::Launch(e.to_string()))?;
        debug!("Browser started");
        Ok(Self { browser })
    }

    fn render(&self, url: &str, config: &BrowserConfig) -> Result<String, FetchError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| FetchError::Tab(e.to_string()))?;

        tab.navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| FetchError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        debug!("Waiting {:?} for the page to settle", config.settle);
        thread::sleep(config.settle);

        tab.get_content()
            .map_err(|e| FetchError::Capture(e.to_string()))
    }
}

/// Plain GET, for when the table is already in the server response.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching {} over HTTP", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// A page saved earlier, e.g. by `save_page_snapshot`. The URL is ignored.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PageSource for SnapshotFile {
    fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        info!("Reading page snapshot from {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

use crate::snapshot::FAILURES_DIR;
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures")
}

/// Load a chart page fixture by name
pub fn load_chart_page(name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.html", name));
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", path.display()))
}

/// Every captured page under `failures/`, as (name, html) pairs sorted by name
pub fn captured_pages() -> Vec<(String, String)> {
    let Ok(entries) = fs::read_dir(FAILURES_DIR) else {
        return Vec::new();
    };

    let mut pages: Vec<(String, String)> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "html"))
        .filter_map(|path| {
            let name = path.file_stem()?.to_string_lossy().to_string();
            let html = fs::read_to_string(&path).ok()?;
            Some((name, html))
        })
        .collect();
    pages.sort();
    pages
}

use crate::snapshot::{save_snapshot, FAILURES_DIR};
use anyhow::Result;

pub mod fixtures;

/// Helper function to save HTML that failed to parse for future regression testing
pub fn save_failed_html(html: &str, test_name: &str) -> Result<()> {
    let file_path = save_snapshot(html, FAILURES_DIR, test_name)?;
    println!("Saved failed HTML to {}", file_path.display());
    Ok(())
}

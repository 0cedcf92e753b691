use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where captured pages go so the regression test picks them up.
pub const FAILURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/fixtures/failures");

/// Save `html` as `<dir>/<name>.html`, creating the directory if needed.
pub fn save_snapshot<P: AsRef<Path>>(html: &str, dir: P, name: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create snapshot directory: {}", dir.display()))?;

    let file_path = dir.join(format!("{}.html", sanitize_filename(name)));
    fs::write(&file_path, html)
        .with_context(|| format!("Failed to write snapshot: {}", file_path.display()))?;

    Ok(file_path)
}

pub fn sanitize_filename(input: &str) -> String {
    // Replace characters that are problematic in filenames
    let mut sanitized = input
        .replace(
            &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0', ' '][..],
            "_",
        )
        .replace("__", "_");

    sanitized = sanitized.trim_matches(|c| c == '.' || c == '_').to_string();

    if sanitized.is_empty() {
        sanitized = "snapshot".to_string();
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("global daily"), "global_daily");
        assert_eq!(sanitize_filename("../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("2024-05-01"), "2024-05-01");
        assert_eq!(sanitize_filename(" ... "), "snapshot");
    }

    #[test]
    fn test_save_snapshot_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("failures");

        let path = save_snapshot("<table></table>", &nested, "layout change").unwrap();
        assert_eq!(path, nested.join("layout_change.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<table></table>");
    }
}

//! Snapshot file loading

use std::fs;
use std::path::Path;

use crate::comparator::SizeRecord;

use super::error::SnapshotError;
use super::html::extract_chart_data_or_empty;
use super::json::parse_snapshot;

/// Load a snapshot from a file, dispatching on its extension
///
/// `.html`/`.htm` files go through embedded chart-data extraction (with the
/// empty-snapshot fallback when the block is absent); anything else is
/// parsed as a JSON array of size records.
pub fn load_snapshot(path: &Path) -> Result<Vec<SizeRecord>, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source_name = path.display().to_string();
    if is_html(path) {
        extract_chart_data_or_empty(&text, &source_name)
    } else {
        parse_snapshot(&text, &source_name)
    }
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_snapshot_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.json");
        fs::write(
            &path,
            r#"[{"label":"main.js","statSize":1000,"parsedSize":800,"gzipSize":300}]"#,
        )
        .unwrap();

        let records = load_snapshot(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "main.js");
    }

    #[test]
    fn test_load_snapshot_html_file_extracts_chart_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devReport.html");
        fs::write(
            &path,
            r#"<script>window.chartData = [{"label":"a.js","statSize":1,"parsedSize":1,"gzipSize":1}];</script>"#,
        )
        .unwrap();

        let records = load_snapshot(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "a.js");
    }

    #[test]
    fn test_load_snapshot_html_without_chart_data_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.html");
        fs::write(&path, "<html><body>nothing embedded</body></html>").unwrap();

        let records = load_snapshot(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_snapshot_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound { .. }));
    }

    #[test]
    fn test_load_snapshot_extension_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Report.HTML");
        fs::write(&path, r#"<script>window.chartData = [];</script>"#).unwrap();

        let records = load_snapshot(&path).unwrap();
        assert!(records.is_empty());
    }
}

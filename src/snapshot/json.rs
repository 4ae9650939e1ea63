//! JSON snapshot parsing

use crate::comparator::SizeRecord;

use super::error::SnapshotError;

/// Parse serialized snapshot text into size records
///
/// The text must be a JSON array of objects carrying `label` plus the three
/// camelCase size fields (`statSize`, `parsedSize`, `gzipSize`) — the shape
/// webpack-bundle-analyzer embeds in its reports. Shape errors and negative
/// sizes are rejected here so the comparator only ever sees well-formed
/// records.
///
/// # Examples
///
/// ```
/// use bundle_diff::snapshot::parse_snapshot;
///
/// let records = parse_snapshot(
///     r#"[{"label":"main.js","statSize":1000,"parsedSize":800,"gzipSize":300}]"#,
///     "inline",
/// )?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].label, "main.js");
/// # Ok::<(), bundle_diff::snapshot::SnapshotError>(())
/// ```
pub fn parse_snapshot(text: &str, source_name: &str) -> Result<Vec<SizeRecord>, SnapshotError> {
    let records: Vec<SizeRecord> =
        serde_json::from_str(text).map_err(|source| SnapshotError::InvalidJson {
            source_name: source_name.to_string(),
            source,
        })?;

    validate_records(&records)?;

    log::debug!("parsed {} records from {}", records.len(), source_name);
    Ok(records)
}

/// Reject records with negative size values
pub(super) fn validate_records(records: &[SizeRecord]) -> Result<(), SnapshotError> {
    for record in records {
        for (field, value) in [
            ("statSize", record.stat_size),
            ("parsedSize", record.parsed_size),
            ("gzipSize", record.gzip_size),
        ] {
            if value < 0.0 {
                return Err(SnapshotError::NegativeSize {
                    label: record.label.clone(),
                    field,
                });
            }
        }
    }
    Ok(())
}

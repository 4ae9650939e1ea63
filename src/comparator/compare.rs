//! Snapshot comparison logic

use std::collections::{HashMap, HashSet};

use super::types::{ComparisonReport, ComparisonRow, Delta, ReportTotals};
use super::SizeRecord;

/// Compare two bundle-analysis snapshots
///
/// Matches records by label, computes per-field deltas for matched labels,
/// classifies unmatched records as added or removed, and aggregates totals
/// over the matched set. Pure and deterministic; identical inputs always
/// produce an identical report.
///
/// Row order follows the old snapshot; `added` follows the new snapshot and
/// `removed` the old one. If a label appears more than once within a single
/// snapshot, the first occurrence wins and later duplicates are ignored.
///
/// # Examples
///
/// ```
/// use bundle_diff::comparator::{compare, SizeRecord};
///
/// let old = vec![SizeRecord {
///     label: "main.js".to_string(),
///     stat_size: 1000.0,
///     parsed_size: 800.0,
///     gzip_size: 300.0,
/// }];
/// let new = vec![SizeRecord {
///     label: "main.js".to_string(),
///     stat_size: 1200.0,
///     parsed_size: 800.0,
///     gzip_size: 300.0,
/// }];
///
/// let report = compare(&old, &new);
/// assert_eq!(report.rows.len(), 1);
/// assert_eq!(report.rows[0].stat_size.diff, 200.0);
/// assert_eq!(report.totals.stat_size.diff, 200.0);
/// ```
pub fn compare(old_data: &[SizeRecord], new_data: &[SizeRecord]) -> ComparisonReport {
    // Index the new snapshot by label; entry() keeps the first occurrence
    let mut new_by_label: HashMap<&str, &SizeRecord> = HashMap::with_capacity(new_data.len());
    for record in new_data {
        new_by_label.entry(record.label.as_str()).or_insert(record);
    }

    let old_labels: HashSet<&str> = old_data.iter().map(|r| r.label.as_str()).collect();

    let mut rows = Vec::new();
    let mut removed = Vec::new();
    let mut totals = ReportTotals::default();
    let mut seen_old: HashSet<&str> = HashSet::with_capacity(old_data.len());

    for old in old_data {
        if !seen_old.insert(old.label.as_str()) {
            continue;
        }

        match new_by_label.get(old.label.as_str()) {
            Some(new) => {
                totals.stat_size.accumulate(old.stat_size, new.stat_size);
                totals.parsed_size.accumulate(old.parsed_size, new.parsed_size);
                totals.gzip_size.accumulate(old.gzip_size, new.gzip_size);

                rows.push(ComparisonRow {
                    label: old.label.clone(),
                    stat_size: Delta::between(old.stat_size, new.stat_size),
                    parsed_size: Delta::between(old.parsed_size, new.parsed_size),
                    gzip_size: Delta::between(old.gzip_size, new.gzip_size),
                });
            }
            None => removed.push(old.clone()),
        }
    }

    let mut added = Vec::new();
    let mut seen_new: HashSet<&str> = HashSet::with_capacity(new_data.len());
    for new in new_data {
        if !seen_new.insert(new.label.as_str()) {
            continue;
        }
        if !old_labels.contains(new.label.as_str()) {
            added.push(new.clone());
        }
    }

    totals.finalize();

    ComparisonReport {
        rows,
        added,
        removed,
        totals,
    }
}

//! Compare command implementation
//!
//! Handles the `bundle-diff compare` command which diffs two snapshot files
//! and renders the result for humans or CI.

use anyhow::Result;
use std::path::Path;

use crate::comparator::{compare, ComparisonReport};
use crate::error::BundleDiffError;
use crate::report::print_comparison_report;
use crate::snapshot::load_snapshot;

/// Compare two snapshot files and print the result
///
/// Both snapshots are loaded fully before the comparison runs, so a failure
/// on either side aborts without producing a partial report. With `json`
/// the serialized [`ComparisonReport`] goes to stdout; otherwise the
/// colored console report is printed, with `limit` capping displayed rows.
///
/// # Errors
///
/// Returns an error if either file is missing, unreadable, or does not
/// contain a valid snapshot.
pub fn cmd_compare(old: &str, new: &str, json: bool, limit: Option<usize>) -> Result<()> {
    let report = run_comparison(Path::new(old), Path::new(new))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_comparison_report(&report, limit);
    }

    Ok(())
}

/// Load both snapshots and run the comparator (all-or-nothing)
fn run_comparison(old_path: &Path, new_path: &Path) -> Result<ComparisonReport> {
    let old_data = load_snapshot(old_path).map_err(BundleDiffError::from)?;
    let new_data = load_snapshot(new_path).map_err(BundleDiffError::from)?;

    log::debug!(
        "comparing {} old records against {} new records",
        old_data.len(),
        new_data.len()
    );

    Ok(compare(&old_data, &new_data))
}

//! Snapshot comparison core
//!
//! Pure diffing of two bundle-analysis snapshots: per-label deltas for the
//! three tracked size fields, added/removed classification, and aggregate
//! totals over the matched set. No I/O happens here; snapshot loading lives
//! in [`crate::snapshot`].

mod compare;
mod types;

pub use compare::compare;
pub use types::{ComparisonReport, ComparisonRow, Delta, FieldTotals, ReportTotals, SizeRecord};

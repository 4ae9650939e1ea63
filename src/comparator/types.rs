//! Data model for snapshot comparison results

use serde::{Deserialize, Serialize};

/// One entry in a bundle-analysis snapshot
///
/// The `label` acts as the join key between two snapshots. Size fields are
/// fractional byte counts; partial accounting can produce non-integer values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecord {
    /// Module identifier, unique within one snapshot
    pub label: String,
    /// Raw byte size
    pub stat_size: f64,
    /// Size after parsing
    pub parsed_size: f64,
    /// Size after gzip compression
    pub gzip_size: f64,
}

/// Difference of one numeric field between a matched old and new record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    /// Value in the old snapshot
    pub old_value: f64,
    /// Value in the new snapshot
    pub new_value: f64,
    /// Signed difference (negative = reduction)
    pub diff: f64,
    /// Magnitude of change relative to the old value, in percent,
    /// rounded to 2 decimal places. Sign information lives in `diff`.
    pub percentage: f64,
}

impl Delta {
    /// Compute the delta between an old and a new value
    ///
    /// When the old value is zero the percentage divisor clamps to 1 to
    /// avoid division by zero, so 0 → 50 reports 5000.00%.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_diff::comparator::Delta;
    ///
    /// let delta = Delta::between(1000.0, 1200.0);
    /// assert_eq!(delta.diff, 200.0);
    /// assert_eq!(delta.percentage, 20.0);
    /// ```
    pub fn between(old_value: f64, new_value: f64) -> Self {
        let diff = new_value - old_value;
        let base = if old_value != 0.0 { old_value } else { 1.0 };
        let percentage = round2(diff.abs() / base * 100.0);

        Self {
            old_value,
            new_value,
            diff,
            percentage,
        }
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Comparison result for one label present in both snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// The shared label
    pub label: String,
    /// Raw size delta
    pub stat_size: Delta,
    /// Parsed size delta
    pub parsed_size: Delta,
    /// Gzip size delta
    pub gzip_size: Delta,
}

/// Aggregate totals for one tracked field, summed over MATCHED records only
///
/// Records that were added or removed between the snapshots do not
/// contribute to either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTotals {
    /// Sum of the field over matched old records
    pub old_total: f64,
    /// Sum of the field over matched new records
    pub new_total: f64,
    /// `new_total - old_total`
    pub diff: f64,
}

impl FieldTotals {
    pub(super) fn accumulate(&mut self, old_value: f64, new_value: f64) {
        self.old_total += old_value;
        self.new_total += new_value;
    }

    pub(super) fn finalize(&mut self) {
        self.diff = self.new_total - self.old_total;
    }
}

/// One [`FieldTotals`] per tracked size field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    /// Raw size totals
    pub stat_size: FieldTotals,
    /// Parsed size totals
    pub parsed_size: FieldTotals,
    /// Gzip size totals
    pub gzip_size: FieldTotals,
}

impl ReportTotals {
    pub(super) fn finalize(&mut self) {
        self.stat_size.finalize();
        self.parsed_size.finalize();
        self.gzip_size.finalize();
    }
}

/// Full output of a snapshot comparison
///
/// Immutable value owned by the caller; every invocation of
/// [`compare`](super::compare) builds a fresh report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// One row per label present in both snapshots, in old-snapshot order
    pub rows: Vec<ComparisonRow>,
    /// Records present only in the new snapshot, in new-snapshot order
    pub added: Vec<SizeRecord>,
    /// Records present only in the old snapshot, in old-snapshot order
    pub removed: Vec<SizeRecord>,
    /// Aggregate totals over matched records
    pub totals: ReportTotals,
}

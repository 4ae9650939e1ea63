//! Treemap export adapter
//!
//! Proportional-area chart widgets (FoamTree and friends) consume a flat
//! list of weighted, color-grouped cells. This adapter projects a
//! [`ComparisonReport`](crate::comparator::ComparisonReport) into that shape;
//! rendering itself is someone else's job.

use serde::{Deserialize, Serialize};

use crate::comparator::ComparisonReport;

/// Sign-derived color category for one treemap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeGroup {
    /// The module grew
    Increase,
    /// The module shrank
    Decrease,
    /// No size change
    Unchanged,
}

impl ChangeGroup {
    fn from_diff(diff: f64) -> Self {
        if diff > 0.0 {
            ChangeGroup::Increase
        } else if diff < 0.0 {
            ChangeGroup::Decrease
        } else {
            ChangeGroup::Unchanged
        }
    }
}

/// One cell of the exported treemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapNode {
    /// Module label
    pub label: String,
    /// Cell weight: magnitude of the parsed-size change
    pub weight: f64,
    /// Color category derived from the sign of the change
    pub group: ChangeGroup,
}

/// Project a comparison report into treemap cells
///
/// One cell per matched row, weighted by the absolute parsed-size diff and
/// grouped by its sign. Added and removed modules are not part of the diff
/// view; row order is preserved.
///
/// # Examples
///
/// ```
/// use bundle_diff::comparator::{compare, SizeRecord};
/// use bundle_diff::treemap::{treemap_nodes, ChangeGroup};
///
/// let old = vec![SizeRecord {
///     label: "main.js".to_string(),
///     stat_size: 1000.0,
///     parsed_size: 800.0,
///     gzip_size: 300.0,
/// }];
/// let new = vec![SizeRecord {
///     label: "main.js".to_string(),
///     stat_size: 1000.0,
///     parsed_size: 700.0,
///     gzip_size: 300.0,
/// }];
///
/// let nodes = treemap_nodes(&compare(&old, &new));
/// assert_eq!(nodes[0].weight, 100.0);
/// assert_eq!(nodes[0].group, ChangeGroup::Decrease);
/// ```
pub fn treemap_nodes(report: &ComparisonReport) -> Vec<TreemapNode> {
    report
        .rows
        .iter()
        .map(|row| TreemapNode {
            label: row.label.clone(),
            weight: row.parsed_size.diff.abs(),
            group: ChangeGroup::from_diff(row.parsed_size.diff),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{compare, SizeRecord};

    fn record(label: &str, parsed: f64) -> SizeRecord {
        SizeRecord {
            label: label.to_string(),
            stat_size: parsed,
            parsed_size: parsed,
            gzip_size: parsed,
        }
    }

    #[test]
    fn test_treemap_nodes_group_by_diff_sign() {
        let old = vec![
            record("grew.js", 100.0),
            record("shrank.js", 100.0),
            record("same.js", 100.0),
        ];
        let new = vec![
            record("grew.js", 150.0),
            record("shrank.js", 40.0),
            record("same.js", 100.0),
        ];

        let nodes = treemap_nodes(&compare(&old, &new));

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].group, ChangeGroup::Increase);
        assert_eq!(nodes[0].weight, 50.0);
        assert_eq!(nodes[1].group, ChangeGroup::Decrease);
        assert_eq!(nodes[1].weight, 60.0);
        assert_eq!(nodes[2].group, ChangeGroup::Unchanged);
        assert_eq!(nodes[2].weight, 0.0);
    }

    #[test]
    fn test_treemap_nodes_exclude_added_and_removed() {
        let old = vec![record("kept.js", 10.0), record("gone.js", 20.0)];
        let new = vec![record("kept.js", 10.0), record("fresh.js", 30.0)];

        let nodes = treemap_nodes(&compare(&old, &new));

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "kept.js");
    }

    #[test]
    fn test_treemap_nodes_serialize_with_lowercase_groups() {
        let nodes = vec![TreemapNode {
            label: "main.js".to_string(),
            weight: 5.0,
            group: ChangeGroup::Increase,
        }];

        let json = serde_json::to_string(&nodes).unwrap();
        assert!(json.contains("\"group\":\"increase\""));
    }
}

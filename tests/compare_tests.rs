//! End-to-end comparison tests over the library API
//!
//! Exercises the snapshot adapters together with the comparator, pinning
//! the documented comparison semantics.

use bundle_diff::comparator::{compare, SizeRecord};
use bundle_diff::snapshot::{extract_chart_data_or_empty, parse_snapshot};
use bundle_diff::treemap::{treemap_nodes, ChangeGroup};

fn record(label: &str, stat: f64, parsed: f64, gzip: f64) -> SizeRecord {
    SizeRecord {
        label: label.to_string(),
        stat_size: stat,
        parsed_size: parsed,
        gzip_size: gzip,
    }
}

#[test]
fn test_single_matched_module_growth_scenario() {
    let old = vec![record("main.js", 1000.0, 800.0, 300.0)];
    let new = vec![record("main.js", 1200.0, 800.0, 300.0)];

    let report = compare(&old, &new);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].stat_size.diff, 200.0);
    assert_eq!(report.rows[0].stat_size.percentage, 20.0);
    assert_eq!(report.rows[0].parsed_size.diff, 0.0);
    assert!(report.added.is_empty());
    assert!(report.removed.is_empty());
}

#[test]
fn test_module_only_in_new_snapshot_is_added_and_excluded_from_totals() {
    let new = vec![record("x.js", 500.0, 400.0, 100.0)];

    let report = compare(&[], &new);

    assert!(report.rows.is_empty());
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].label, "x.js");
    assert!(report.removed.is_empty());
    assert_eq!(report.totals.stat_size.old_total, 0.0);
    assert_eq!(report.totals.stat_size.new_total, 0.0);
}

#[test]
fn test_module_only_in_old_snapshot_is_removed() {
    let old = vec![record("a.js", 100.0, 100.0, 100.0)];

    let report = compare(&old, &[]);

    assert!(report.rows.is_empty());
    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].label, "a.js");
}

#[test]
fn test_zero_old_value_percentage_guard() {
    let old = vec![record("n.js", 0.0, 0.0, 0.0)];
    let new = vec![record("n.js", 50.0, 50.0, 50.0)];

    let report = compare(&old, &new);

    for delta in [
        report.rows[0].stat_size,
        report.rows[0].parsed_size,
        report.rows[0].gzip_size,
    ] {
        assert_eq!(delta.diff, 50.0);
        assert_eq!(delta.percentage, 5000.0);
    }
}

#[test]
fn test_json_snapshot_to_report_pipeline() {
    let old_text = r#"[
        {"label":"main.js","statSize":1000,"parsedSize":800,"gzipSize":300},
        {"label":"vendor.js","statSize":5000,"parsedSize":4000,"gzipSize":1200}
    ]"#;
    let new_text = r#"[
        {"label":"vendor.js","statSize":4500,"parsedSize":3600,"gzipSize":1100},
        {"label":"styles.css","statSize":200,"parsedSize":180,"gzipSize":40}
    ]"#;

    let old = parse_snapshot(old_text, "old").unwrap();
    let new = parse_snapshot(new_text, "new").unwrap();
    let report = compare(&old, &new);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].label, "vendor.js");
    assert_eq!(report.rows[0].stat_size.diff, -500.0);
    assert_eq!(report.rows[0].stat_size.percentage, 10.0);
    assert_eq!(report.removed[0].label, "main.js");
    assert_eq!(report.added[0].label, "styles.css");
    assert_eq!(report.totals.gzip_size.diff, -100.0);
}

#[test]
fn test_html_report_to_comparison_pipeline() {
    let old_html = r#"<html><script>window.chartData = [
        {"label":"app.js","statSize":2000,"parsedSize":1800,"gzipSize":600}
    ];</script></html>"#;

    let old = extract_chart_data_or_empty(old_html, "old.html").unwrap();
    // Degraded side: document without an embedded block becomes empty
    let new = extract_chart_data_or_empty("<html></html>", "new.html").unwrap();

    let report = compare(&old, &new);

    assert!(report.rows.is_empty());
    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].label, "app.js");
}

#[test]
fn test_report_round_trips_through_json() {
    let old = vec![record("main.js", 1000.0, 800.0, 300.0)];
    let new = vec![record("main.js", 1100.0, 820.0, 310.0)];
    let report = compare(&old, &new);

    let json = serde_json::to_string(&report).unwrap();
    let restored: bundle_diff::comparator::ComparisonReport =
        serde_json::from_str(&json).unwrap();

    assert_eq!(report, restored);
}

#[test]
fn test_treemap_export_shape_for_widget() {
    let old = vec![record("up.js", 10.0, 100.0, 5.0), record("down.js", 10.0, 100.0, 5.0)];
    let new = vec![record("up.js", 10.0, 130.0, 5.0), record("down.js", 10.0, 80.0, 5.0)];

    let nodes = treemap_nodes(&compare(&old, &new));

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].group, ChangeGroup::Increase);
    assert_eq!(nodes[0].weight, 30.0);
    assert_eq!(nodes[1].group, ChangeGroup::Decrease);
    assert_eq!(nodes[1].weight, 20.0);
}

#[test]
fn test_totals_consistency_across_many_modules() {
    let old: Vec<SizeRecord> = (0..50)
        .map(|i| record(&format!("mod{i}.js"), i as f64, i as f64 * 2.0, i as f64 / 2.0))
        .collect();
    let mut new = old.clone();
    for r in &mut new {
        r.stat_size += 10.0;
    }
    // Drop one module from the new side
    new.remove(7);

    let report = compare(&old, &new);

    let expected_old: f64 = report.rows.iter().map(|r| r.stat_size.old_value).sum();
    let expected_new: f64 = report.rows.iter().map(|r| r.stat_size.new_value).sum();
    assert_eq!(report.totals.stat_size.old_total, expected_old);
    assert_eq!(report.totals.stat_size.new_total, expected_new);
    assert_eq!(
        report.totals.stat_size.diff,
        expected_new - expected_old
    );
    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].label, "mod7.js");
}

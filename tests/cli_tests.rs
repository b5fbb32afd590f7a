//! Integration tests for the wayfind CLI
//!
//! These tests run the wayfind binary against small edge and heuristic files.

mod support;

use predicates::prelude::*;
use support::{wayfind, write, write_fixtures};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    wayfind(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wayfind"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("cost"))
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_no_subcommand_prints_version() {
    let dir = tempdir().unwrap();
    wayfind(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfind "))
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_prefers_cheaper_two_hop_route() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "--edges", "edges.csv", "--heuristics", "heuristics.csv"])
        .assert()
        .success()
        .stdout("A* minimum cost path\n[2.0]1 - 2 - 3\n");
}

#[test]
fn test_path_appends_csv_extension() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2.0]1 - 2 - 3"));
}

#[test]
fn test_path_quiet_prints_only_route() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["--quiet", "path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout("[2.0]1 - 2 - 3\n");
}

#[test]
fn test_path_start_equals_goal() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "2", "2", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0.0]2\n"));
}

#[test]
fn test_path_unreachable_goal_is_negative_result() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "4", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout("Failed to find path\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_path_unreachable_goal_json() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = wayfind(dir.path())
        .args(["--format", "json", "path", "1", "4", "-e", "edges", "-H", "heuristics"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["start"], 1);
    assert_eq!(json["goal"], 4);
    assert!(json.get("path").is_none());
}

#[test]
fn test_path_unreachable_goal_records() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["--format", "records", "path", "1", "4", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout("H wayfind=1 records=1 mode=path edges=edges.csv start=1 goal=4 found=false\n");
}

#[test]
fn test_path_without_heuristic() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "--no-heuristic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2.0]1 - 2 - 3"));
}

#[test]
fn test_path_requires_heuristics_file() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--heuristics is required"));
}

#[test]
fn test_path_heuristics_conflicts_with_no_heuristic() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "-H", "heuristics", "--no-heuristic"])
        .assert()
        .code(2);
}

#[test]
fn test_path_node_out_of_range() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "201", "-e", "edges", "-H", "heuristics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "goal node 201 not an integer from 1-200",
        ));
}

#[test]
fn test_path_rejects_non_numeric_node() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "one", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node id 'one'"));
}

#[test]
fn test_path_missing_input_file() {
    let dir = tempdir().unwrap();

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "nowhere", "--no-heuristic"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn test_path_malformed_edge_row() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,1.0\n2,3\n");

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "--no-heuristic"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("expected 3 fields, found 2"));
}

#[test]
fn test_path_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,-1.0\n");

    wayfind(dir.path())
        .args(["path", "1", "2", "-e", "edges", "--no-heuristic"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_path_missing_heuristic_entry() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,1.0\n2,3,1.0\n");
    write(dir.path(), "heuristics.csv", "1,0,0,0\n");

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("heuristic not found for pair (2, 3)"));
}

#[test]
fn test_path_max_steps_aborts() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "-H", "heuristics", "--max-steps", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("search aborted after 1 steps (limit 1)"));
}

#[test]
fn test_path_parallel_edges_use_first_weight() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,3.0\n1,2,1.0\n");

    wayfind(dir.path())
        .args(["path", "1", "2", "-e", "edges", "--no-heuristic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[3.0]1 - 2"))
        .stderr(predicate::str::contains("search cost 1.0 differs"));
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = wayfind(dir.path())
        .args(["--format", "json", "path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["cost"], 2.0);
    assert_eq!(json["search_cost"], 2.0);
    assert_eq!(json["hops"], 2);
    assert!(json["stats"]["expanded"].as_u64().unwrap() >= 2);
}

#[test]
fn test_path_json_error_envelope() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = wayfind(dir.path())
        .args([
            "--format", "json", "path", "1", "3", "-e", "edges", "-H", "heuristics",
            "--max-steps", "1",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 1);
    assert_eq!(json["error"]["type"], "aborted");
}

#[test]
fn test_path_cost_overflow_is_data_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,1e308\n2,3,1e308\n");

    wayfind(dir.path())
        .args(["path", "1", "3", "-e", "edges", "--no-heuristic"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cost overflow relaxing 2 -> 3"));
}

#[test]
fn test_json_usage_error_from_clap() {
    let dir = tempdir().unwrap();

    let output = wayfind(dir.path())
        .args(["--format", "json", "path", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_path_records_output() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["--format", "records", "path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wayfind=1 records=1 mode=path edges=edges.csv start=1 goal=3 found=true cost=2.0 hops=2",
        ))
        .stdout(predicate::str::contains("N 1\nN 2\nN 3\n"))
        .stdout(predicate::str::contains("E 1 2 weight=1.0\nE 2 3 weight=1.0\n"));
}

#[test]
fn test_unknown_format_rejected() {
    let dir = tempdir().unwrap();

    wayfind(dir.path())
        .args(["--format", "yaml", "stats", "-e", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

// ============================================================================
// cost
// ============================================================================

#[test]
fn test_cost_of_direct_edge() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["cost", "1", "3", "-e", "edges"])
        .assert()
        .success()
        .stdout("[5.0]1 - 3\n");
}

#[test]
fn test_cost_missing_edge() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["cost", "3", "1", "-e", "edges"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge not found: 3 -> 1"));
}

#[test]
fn test_cost_json_lists_edges() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = wayfind(dir.path())
        .args(["--format", "json", "cost", "1", "2", "3", "-e", "edges"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cost"], 2.0);
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    assert_eq!(json["edges"][1]["from"], 2);
    assert_eq!(json["edges"][1]["to"], 3);
}

// ============================================================================
// estimate
// ============================================================================

#[test]
fn test_estimate_is_symmetric() {
    let dir = tempdir().unwrap();
    write(dir.path(), "h.csv", "1,0,4.0,7.0\n2,0,0,3.0\n");

    for (a, b) in [("1", "3"), ("3", "1")] {
        wayfind(dir.path())
            .args(["estimate", a, b, "-H", "h"])
            .assert()
            .success()
            .stdout(predicate::str::contains("= 7.0"))
            .stdout(predicate::str::contains("row 1 column 3"));
    }
}

#[test]
fn test_estimate_json_uses_same_column_as_human() {
    let dir = tempdir().unwrap();
    write(dir.path(), "h.csv", "1,0,4.0,7.0\n");

    let output = wayfind(dir.path())
        .args(["--format", "json", "estimate", "3", "1", "-H", "h"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["estimate"], 7.0);
    assert_eq!(json["row"], 1);
    assert_eq!(json["column"], 3);
}

#[test]
fn test_estimate_self_pair_is_zero() {
    let dir = tempdir().unwrap();
    write(dir.path(), "h.csv", "1,0,4.0\n");

    wayfind(dir.path())
        .args(["estimate", "9", "9", "-H", "h"])
        .assert()
        .success()
        .stdout("h(9, 9) = 0.0\n");
}

#[test]
fn test_estimate_missing_pair() {
    let dir = tempdir().unwrap();
    write(dir.path(), "h.csv", "1,0,4.0\n");

    wayfind(dir.path())
        .args(["estimate", "1", "5", "-H", "h"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("heuristic not found for pair (1, 5)"));
}

#[test]
fn test_estimate_duplicate_row_keeps_first() {
    let dir = tempdir().unwrap();
    write(dir.path(), "h.csv", "1,0,4.0\n1,0,9.0\n");

    wayfind(dir.path())
        .args(["--format", "records", "estimate", "2", "1", "-H", "h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("estimate=4.0 row=1 column=2"));
}

// ============================================================================
// stats
// ============================================================================

#[test]
fn test_stats_human() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["stats", "-e", "edges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 4"))
        .stdout(predicate::str::contains("Edges: 4"))
        .stdout(predicate::str::contains("Dead ends: 3"));
}

#[test]
fn test_stats_json_counts_parallel_pairs() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "1,2,3.0\n1,2,1.0\n2,1,1.0\n");

    let output = wayfind(dir.path())
        .args(["--format", "json", "stats", "-e", "edges"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 2);
    assert_eq!(json["edges"], 3);
    assert_eq!(json["parallel_pairs"], 1);
    assert_eq!(json["dead_ends"], serde_json::json!([]));
}

#[test]
fn test_stats_skips_blank_and_quoted_fields() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edges.csv", "\"1\", \"2\", 1.5\n\n2,3,1\n");

    wayfind(dir.path())
        .args(["--format", "records", "stats", "-e", "edges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes=3 edges=2"))
        .stdout(predicate::str::contains("D 3"));
}

#[test]
fn test_stats_records_quotes_path_with_spaces() {
    let dir = tempdir().unwrap();
    write(dir.path(), "my edges.csv", "1,2,1.0\n");

    wayfind(dir.path())
        .args(["--format", "records", "stats", "-e", "my edges"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wayfind=1 records=1 mode=stats edges_file=\"my edges.csv\" nodes=2",
        ));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    wayfind(dir.path())
        .args(["--verbose", "--quiet", "path", "1", "3", "-e", "edges", "-H", "heuristics"])
        .assert()
        .success()
        .stdout("[2.0]1 - 2 - 3\n")
        .stderr(predicate::str::contains("search_finished"));
}

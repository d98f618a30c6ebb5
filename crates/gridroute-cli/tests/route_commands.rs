use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_grid.txt")
        .canonicalize()
        .expect("fixture present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("gridroute-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("LANG", "C.UTF-8")
        .env_remove("LC_ALL")
        .arg("--graph")
        .arg(fixture_path());
    cmd
}

#[test]
fn route_prints_tree_and_total_cost() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Plant", "--to", "Campus Gate"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Main Plant to Campus Gate (4 hops):",
        ))
        .stdout(predicate::str::contains("┌ Main Plant"))
        .stdout(predicate::str::contains("├ West Junction"))
        .stdout(predicate::str::contains("└ Campus Gate"))
        .stdout(predicate::str::contains("Total cost: 7.50"));
}

#[test]
fn ascii_tree_without_unicode_locale() {
    let mut cmd = prepare_command();
    cmd.env("LANG", "C")
        .args(["route", "--from", "Main Plant", "--to", "Campus Gate"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("+ Main Plant"))
        .stdout(predicate::str::contains("` Campus Gate"));
}

#[test]
fn broken_vertex_reroutes() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Plant",
        "--to",
        "Campus Gate",
        "--broken",
        "West Junction",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("├ North Junction"))
        .stdout(predicate::str::contains("West Junction").not())
        .stdout(predicate::str::contains("Total cost: 7.90"));
}

#[test]
fn blocked_route_is_explained() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Plant",
        "--to",
        "Campus Gate",
        "--broken",
        "Hospital Feeder",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "No route from Main Plant to Campus Gate: blocked by outage",
        ))
        .stdout(predicate::str::contains("Hospital Feeder (+0.80, 6.00) [out of service]"))
        .stdout(predicate::str::contains("Out of service on route: Hospital Feeder"));
}

#[test]
fn diagnostic_flag_ignores_outages() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Plant",
        "--to",
        "Campus Gate",
        "--broken",
        "Hospital Feeder",
        "--diagnostic",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(4 hops; diagnostic mode)"))
        .stdout(predicate::str::contains("Total cost: 7.50"));
}

#[test]
fn unreachable_route_is_reported() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Plant", "--to", "Depot Yard"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "No route from Main Plant to Depot Yard: unreachable",
    ));
}

#[test]
fn same_endpoints_fail() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Plant", "--to", "Main Plant"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "start and end are the same vertex: Main Plant",
        ));
}

#[test]
fn strict_mode_suggests_close_names() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Plant",
        "--to",
        "Campus Gte",
        "--strict",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown vertex: Campus Gte"))
        .stderr(predicate::str::contains("'Campus Gate'"));
}

#[test]
fn json_output_is_a_route_summary() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format",
        "json",
        "route",
        "--from",
        "Main Plant",
        "--to",
        "Hospital Feeder",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(summary["status"], "routed");
    assert_eq!(summary["mode"], "normal");
    assert_eq!(summary["hops"], 3);
    let names: Vec<&str> = summary["steps"]
        .as_array()
        .expect("steps array")
        .iter()
        .filter_map(|step| step["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Main Plant",
            "West Junction",
            "Market Substation",
            "Hospital Feeder"
        ]
    );
    let cost = summary["total_cost"].as_f64().expect("cost");
    assert!((cost - 6.0).abs() < 1e-9);
}

#[test]
fn missing_graph_file_fails_with_context() {
    let mut cmd = cargo_bin_cmd!("gridroute-cli");
    cmd.env("RUST_LOG", "error")
        .args(["--graph", "/definitely/not/here.txt", "vertices"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network"));
}

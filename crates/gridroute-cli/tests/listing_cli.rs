use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_grid.txt")
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("gridroute-cli");
    cmd.env("RUST_LOG", "error").env_remove("GRIDROUTE_GRAPH");
    cmd
}

#[test]
fn vertices_are_listed_in_order() {
    let mut cmd = cli();
    cmd.arg("--graph").arg(fixture_path()).arg("vertices");

    cmd.assert().success().stdout(
        "Campus Gate\nDepot Feeder\nDepot Yard\nHospital Feeder\nMain Plant\n\
         Market Substation\nNorth Junction\nRiver Substation\nWest Junction\n",
    );
}

#[test]
fn vertices_json_is_an_array() {
    let mut cmd = cli();
    cmd.arg("--graph")
        .arg(fixture_path())
        .args(["vertices", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let names: Vec<String> = serde_json::from_slice(&output).expect("json array");
    assert_eq!(names.len(), 9);
    assert_eq!(names.first().map(String::as_str), Some("Campus Gate"));
}

#[test]
fn graph_path_falls_back_to_environment() {
    let mut cmd = cli();
    cmd.env("GRIDROUTE_GRAPH", fixture_path()).arg("vertices");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hospital Feeder"));
}

#[test]
fn default_graph_is_data_txt_in_working_directory() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("data.txt"), "Plant,Feeder,1.5\n").expect("write data.txt");

    let mut cmd = cli();
    cmd.current_dir(dir.path()).arg("vertices");

    cmd.assert().success().stdout("Feeder\nPlant\n");
}

#[test]
fn edges_for_one_source() {
    let mut cmd = cli();
    cmd.arg("--graph")
        .arg(fixture_path())
        .args(["edges", "--from", "Main Plant"]);

    cmd.assert()
        .success()
        .stdout("Main Plant -> North Junction (2.5)\nMain Plant -> West Junction (4)\n");
}

#[test]
fn edges_for_unknown_source_fail() {
    let mut cmd = cli();
    cmd.arg("--graph")
        .arg(fixture_path())
        .args(["edges", "--from", "Main Plnt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean").and(predicate::str::contains("'Main Plant'")));
}

#[test]
fn edges_list_whole_graph() {
    let mut cmd = cli();
    cmd.arg("--graph").arg(fixture_path()).arg("edges");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text.lines().count(), 9);
    assert!(text.starts_with("Depot Feeder -> Depot Yard (0.4)\n"));
}

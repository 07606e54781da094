use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn table_and_exports_without_plot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("track.csv");
    let json_path = dir.path().join("track.json");

    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args([
            "--angular-velocity",
            "0.5",
            "--axis-lat",
            "60",
            "--axis-lon",
            "-90",
            "--total-time",
            "120",
            "--time-steps",
            "3",
            "--continent-lat",
            "30",
            "--continent-lon",
            "-20",
            "--no-plot",
            "--csv",
            csv_path.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time (Myr)"))
        .stdout(predicate::str::contains("     60.0 |"))
        .stdout(predicate::str::contains("Saved simulation figure").not());

    let csv = fs::read_to_string(&csv_path).expect("csv output");
    assert_eq!(csv.lines().count(), 4);
    assert!(json_path.exists());
}

#[test]
fn scenario_from_catalog() {
    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args([
            "--scenario",
            "fast-rotation",
            "--catalog",
            "data/scenarios",
            "--no-plot",
            "--max-rows",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("    200.0 |"))
        .stdout(predicate::str::contains("... (table truncated) ..."));
}

#[test]
fn unknown_scenario_fails() {
    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args(["--scenario", "pangaea", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn zero_time_steps_fails() {
    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args(["--time-steps", "0", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid simulation parameters"));
}

#[test]
fn negative_total_time_fails() {
    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args(["--total-time", "-5", "--no-plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn figure_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("figures").join("apw.png");

    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args([
            "--time-steps",
            "50",
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "800",
            "--height",
            "400",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved simulation figure to"));

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn apw_plot_renders_from_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("track.csv");
    let png_path = dir.path().join("replot.png");

    Command::cargo_bin("polar_wander")
        .expect("polar_wander bin")
        .args([
            "--time-steps",
            "20",
            "--no-plot",
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    Command::cargo_bin("apw_plot")
        .expect("apw_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "600",
            "--height",
            "300",
            "--title",
            "Replotted track",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

use std::fs;

use polar_wander::drift::{PlateMotionParameters, simulate};
use polar_wander::export::table::{DEFAULT_MAX_ROWS, downsample_indices, format_summary_table};
use polar_wander::export::{sidecar, track};
use polar_wander::sphere::GeoPoint;
use polar_wander::track::{TrackError, read_track};

fn run(steps: usize) -> (PlateMotionParameters, GeoPoint, polar_wander::drift::SimulationResult) {
    let params = PlateMotionParameters {
        angular_velocity_deg_per_myr: 0.5,
        rotation_axis_lat: 60.0,
        rotation_axis_lon: -90.0,
        total_time_myr: 120.0,
        time_steps: steps,
    };
    let reference = GeoPoint::new(30.0, -20.0);
    let result = simulate(&params, &reference).expect("simulate");
    (params, reference, result)
}

#[test]
fn downsampling_spans_first_to_last() {
    assert_eq!(downsample_indices(10, 4), vec![0, 3, 6, 9]);
    assert_eq!(downsample_indices(3, 15), vec![0, 1, 2]);
    assert!(downsample_indices(0, 15).is_empty());

    let indices = downsample_indices(200, DEFAULT_MAX_ROWS);
    assert_eq!(indices.len(), 15);
    assert_eq!(indices.first(), Some(&0));
    assert_eq!(indices.last(), Some(&199));
    assert!(indices.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn long_runs_are_truncated_in_the_table() {
    let (_, _, result) = run(200);
    let table = format_summary_table(&result, DEFAULT_MAX_ROWS);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 2 + 15 + 1);
    assert!(lines[0].starts_with("Time (Myr)  | Continent Lat"));
    assert_eq!(lines[1].len(), lines[0].len());
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].starts_with("      0.0 |"));
    assert!(lines[16].starts_with("    120.0 |"));
    assert_eq!(lines[17], "... (table truncated) ...");
}

#[test]
fn short_runs_show_every_row() {
    let (_, _, result) = run(3);
    let table = format_summary_table(&result, DEFAULT_MAX_ROWS);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[2],
        "      0.0 |          30.00 |         -20.00 |             90.00 |              0.00"
    );
    assert!(lines[3].starts_with("     60.0 |"));
    assert!(!table.contains("truncated"));
}

#[test]
fn csv_track_reads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("track.csv");
    let (_, _, result) = run(11);

    track::write_track(&path, &result).expect("write csv");
    let contents = fs::read_to_string(&path).expect("read csv");
    assert_eq!(contents.lines().next(), Some(track::HEADER));
    assert_eq!(contents.lines().count(), 12);

    let back = read_track(&path).expect("read track");
    assert_eq!(back.time_myr, result.time_myr);
    for (a, b) in back.continent.iter().zip(&result.continent) {
        assert!((a.lat_deg - b.lat_deg).abs() < 1e-8);
        assert!((a.lon_deg - b.lon_deg).abs() < 1e-8);
    }
    for (a, b) in back.apparent_pole.iter().zip(&result.apparent_pole) {
        assert!((a.lat_deg - b.lat_deg).abs() < 1e-8);
        assert!((a.lon_deg - b.lon_deg).abs() < 1e-8);
    }
}

#[test]
fn read_track_reports_missing_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, "time_myr,continent_lat_deg\n0.0,30.0\n").expect("write");
    assert!(matches!(
        read_track(&path),
        Err(TrackError::MissingColumn("continent_lon_deg"))
    ));
}

#[test]
fn read_track_rejects_empty_and_garbage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let empty = dir.path().join("empty.csv");
    fs::write(&empty, format!("{}\n", track::HEADER)).expect("write");
    assert!(matches!(read_track(&empty), Err(TrackError::Empty)));

    let garbage = dir.path().join("garbage.csv");
    fs::write(&garbage, format!("{}\n0.0,abc,1,2,3\n", track::HEADER)).expect("write");
    assert!(matches!(
        read_track(&garbage),
        Err(TrackError::InvalidValue {
            column: "continent_lat_deg",
            row: 1
        })
    ));
}

#[test]
fn json_sidecar_contains_parameters_and_samples() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.json");
    let (params, reference, result) = run(4);

    sidecar::write_sidecar(&path, "default", &params, &reference, &result).expect("sidecar");
    let contents = fs::read_to_string(&path).expect("read json");
    assert!(contents.contains("\"scenario\": \"default\""));
    assert!(contents.contains("\"angular_velocity_deg_per_myr\": 0.5"));
    assert!(contents.contains("\"time_steps\": 4"));
    assert_eq!(contents.matches("\"apparent_pole\"").count(), 4);
}

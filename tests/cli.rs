//! End-to-end tests for the bsr binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;


const HEADER: &str = "dteday,season,workingday,holiday,yr,cnt,registered,casual";


fn bsr() -> Command {
    Command::cargo_bin("bsr").unwrap()
}


/// Four days spanning 2011-2012: spring and fall in 2011, spring and
/// winter in 2012.
fn write_dataset() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "2011-01-01,1,0,1,0,985,654,331").unwrap();
    writeln!(file, "2011-07-04,3,0,1,0,1500,900,600").unwrap();
    writeln!(file, "2012-01-02,1,1,0,1,1600,1400,200").unwrap();
    writeln!(file, "2012-12-31,4,1,0,1,2000,1800,200").unwrap();
    file
}


#[test]
fn stats_reports_full_range_by_default() {
    let data = write_dataset();
    let path = data.path().to_str().unwrap();

    bsr()
        .args(["stats", "--data", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("2011-01-01 to 2012-12-31"))
        .stdout(predicate::str::contains("6,085"))
        .stdout(predicate::str::contains("4,754"))
        .stdout(predicate::str::contains("RENTALS BY SEASON"))
        .stdout(predicate::str::contains("RENTALS BY YEAR"));
}


#[test]
fn stats_filters_by_date_range() {
    let data = write_dataset();
    let path = data.path().to_str().unwrap();

    bsr()
        .args(["stats", "--data", path, "--from", "2012-01-01", "--to", "2012-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2012-01-01 to 2012-12-31"))
        .stdout(predicate::str::contains("3,600"))
        // Fall has no 2012 rides, so it must not appear as a zero row.
        .stdout(predicate::str::contains("fall").not());
}


#[test]
fn inverted_range_is_rejected() {
    let data = write_dataset();
    let path = data.path().to_str().unwrap();

    bsr()
        .args(["stats", "--data", path, "--from", "2012-06-01", "--to", "2011-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "start date 2012-06-01 is after end date 2011-06-01",
        ));
}


#[test]
fn missing_dataset_is_reported() {
    bsr()
        .args(["stats", "--data", "/nonexistent/all_data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}


#[test]
fn malformed_row_is_fatal_with_line_context() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "not-a-date,1,0,0,0,985,654,331").unwrap();
    let path = file.path().to_str().unwrap();

    bsr()
        .args(["stats", "--data", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}


#[test]
fn dashboard_renders_empty_panels_outside_data_range() {
    let data = write_dataset();
    let path = data.path().to_str().unwrap();

    bsr()
        .args(["dashboard", "--data", path, "--from", "2015-01-01", "--to", "2015-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rentals by Season"))
        .stdout(predicate::str::contains("no rides in selected range"));
}


#[test]
fn export_writes_svg_with_all_panels() {
    let data = write_dataset();
    let path = data.path().to_str().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.svg");
    let output_str = output.to_str().unwrap();

    bsr()
        .args(["export", "--svg", "--data", path, "--output", output_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Bike Sharing Rental Report"));
    assert!(svg.contains("Rentals by Season"));
    assert!(svg.contains("Working Days vs Non-working Days"));
    assert!(svg.contains("Holidays vs Regular Days"));
    assert!(svg.contains("Rentals by Year"));
}

use std::fs;

use predicates::str::contains;

mod common;
use common::{sd, temp_out};

#[test]
fn export_csv_writes_summary_rows() {
    let out = temp_out("summaries_csv", "csv");

    sd()
        .args(["--test", "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "project_id,name,address,status,price,labor_cost,material_cost,total_cost,profit"
    );
    assert!(content.contains("Miller Kitchen Renovation"));
    assert!(content.contains("1742.5"));
    assert!(content.contains("23257.5"));
    assert!(content.contains("Downtown Office Painting"));
}

#[test]
fn export_json_includes_portfolio_rollup() {
    let out = temp_out("summaries_json", "json");

    sd()
        .args(["--test", "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["summaries"].as_array().unwrap().len(), 2);
    assert_eq!(doc["summaries"][0]["project_id"], "p1");
    assert_eq!(doc["portfolio"]["active_projects"], 1);
    assert_eq!(doc["portfolio"]["working_workers"], 2);
    assert!(doc["generated"].is_string());
}

#[test]
fn export_requires_absolute_path() {
    sd()
        .args(["--test", "export", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_refuses_overwrite_without_confirmation() {
    let out = temp_out("overwrite_guard", "csv");
    fs::write(&out, "existing").expect("seed file");

    sd()
        .args(["--test", "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    // Original content untouched
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");
}

#[test]
fn export_force_overwrites() {
    let out = temp_out("force_overwrite", "csv");
    fs::write(&out, "existing").expect("seed file");

    sd()
        .args(["--test", "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("project_id,"));
}

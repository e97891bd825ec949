use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{sd, write_dataset};

#[test]
fn dashboard_shows_portfolio_stats() {
    sd()
        .args(["--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Dashboard"))
        .stdout(contains("1 active"))
        .stdout(contains("2 working"))
        .stdout(contains("$33,500.00"))
        .stdout(contains("$31,357.50"))
        .stdout(contains("$12,000.00"))
        .stdout(contains("$21,500.00"));
}

#[test]
fn dashboard_lists_worker_hours_and_material_spend() {
    sd()
        .args(["--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Mike Ross"))
        .stdout(contains("7.5 hrs"))
        .stdout(contains("$262.50"))
        .stdout(contains("Lumber 2x4"))
        .stdout(contains("$450.00"));
}

#[test]
fn projects_table_has_summary_rows() {
    sd()
        .args(["--test", "projects"])
        .assert()
        .success()
        .stdout(contains("Miller Kitchen Renovation"))
        .stdout(contains("Downtown Office Painting"))
        .stdout(contains("In Progress"))
        .stdout(contains("Pending"))
        .stdout(contains("$23,257.50"))
        .stdout(contains("$8,100.00"));
}

#[test]
fn project_detail_shows_breakdown_and_outstanding() {
    sd()
        .args(["--test", "project", "p1"])
        .assert()
        .success()
        .stdout(contains("Cathy Miller"))
        .stdout(contains("$622.50"))
        .stdout(contains("$1,742.50"))
        .stdout(contains("$23,257.50"))
        .stdout(contains("$10,000.00"))
        .stdout(contains("$15,000.00"));
}

#[test]
fn project_detail_optional_sections() {
    sd()
        .args(["--test", "project", "p1", "--payments", "--tasks"])
        .assert()
        .success()
        .stdout(contains("Payments:"))
        .stdout(contains("partial"))
        .stdout(contains("Tasks:"))
        .stdout(contains("Install cabinets"));
}

#[test]
fn unknown_project_fails_distinctly() {
    sd()
        .args(["--test", "project", "p999"])
        .assert()
        .failure()
        .stderr(contains("Project not found: p999"));
}

#[test]
fn workers_and_materials_listings() {
    sd()
        .args(["--test", "workers"])
        .assert()
        .success()
        .stdout(contains("Mike Ross"))
        .stdout(contains("$45.00"));

    sd()
        .args(["--test", "materials"])
        .assert()
        .success()
        .stdout(contains("Paint - Interior White"))
        .stdout(contains("$70.00"));
}

#[test]
fn log_time_recomputes_labor_cost() {
    // 622.50 + 4h x 45 = 802.50
    sd()
        .args([
            "--test", "log-time", "--project", "p1", "--worker", "w1", "--hours", "4",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 4 hrs"))
        .stdout(contains("$802.50"))
        .stdout(contains("$1,922.50"));
}

#[test]
fn log_time_rejects_non_positive_hours() {
    sd()
        .args([
            "--test", "log-time", "--project", "p1", "--worker", "w1", "--hours", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("must be positive"));
}

#[test]
fn log_time_rejects_unknown_worker() {
    sd()
        .args([
            "--test", "log-time", "--project", "p1", "--worker", "w999", "--hours", "2",
        ])
        .assert()
        .failure()
        .stderr(contains("Worker not found: w999"));
}

#[test]
fn add_payment_recomputes_outstanding() {
    // 25_000 - (10_000 + 5_000) = 10_000
    sd()
        .args([
            "--test",
            "add-payment",
            "--project",
            "p1",
            "--amount",
            "5000",
            "--status",
            "partial",
        ])
        .assert()
        .success()
        .stdout(contains("$15,000.00"))
        .stdout(contains("$10,000.00"));
}

#[test]
fn add_payment_rejects_bad_status() {
    sd()
        .args([
            "--test",
            "add-payment",
            "--project",
            "p1",
            "--amount",
            "5000",
            "--status",
            "refunded",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid status value: refunded"));
}

#[test]
fn add_expense_changes_profit() {
    // p2 profit 8_100 - 100 = 8_000
    sd()
        .args([
            "--test",
            "add-expense",
            "--project",
            "p2",
            "--desc",
            "Scaffolding rental",
            "--amount",
            "100",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded expense"))
        .stdout(contains("$8,000.00"));
}

#[test]
fn add_task_lands_on_project() {
    sd()
        .args([
            "--test",
            "add-task",
            "--project",
            "p1",
            "--title",
            "Install countertop",
            "--assignee",
            "w1",
            "--due",
            "2025-12-20",
        ])
        .assert()
        .success()
        .stdout(contains("Created task 'Install countertop'"));
}

#[test]
fn portal_check_in_and_out() {
    sd()
        .args(["--test", "portal", "--worker", "w1", "--check", "in"])
        .assert()
        .success()
        .stdout(contains("Mike Ross"))
        .stdout(contains("Checked In"))
        .stdout(contains("check-in"));

    sd()
        .args(["--test", "portal", "--worker", "w1", "--check", "out"])
        .assert()
        .success()
        .stdout(contains("Checked Out"));
}

#[test]
fn portal_rejects_unknown_worker() {
    sd()
        .args(["--test", "portal", "--worker", "w999", "--check", "in"])
        .assert()
        .failure()
        .stderr(contains("Worker not found: w999"));
}

#[test]
fn custom_dataset_overrides_demo_data() {
    let data = write_dataset(
        "custom_projects",
        r#"{
            "projects": [
                {
                    "id": "x1",
                    "name": "Garage Build",
                    "address": "9 Elm Street",
                    "client_name": "Bob Diaz",
                    "status": "active",
                    "price": 5000
                }
            ]
        }"#,
    );

    sd()
        .args(["--test", "--data", &data, "projects"])
        .assert()
        .success()
        .stdout(contains("Garage Build"))
        .stdout(contains("$5,000.00"))
        .stdout(contains("Miller Kitchen Renovation").not());
}

#[test]
fn unrecognized_project_status_falls_back_to_pending() {
    let data = write_dataset(
        "weird_status",
        r#"{
            "projects": [
                {
                    "id": "x1",
                    "name": "Mystery Job",
                    "address": "1 Fog Lane",
                    "client_name": "Nobody",
                    "status": "on_hold_forever",
                    "price": 1000
                }
            ]
        }"#,
    );

    sd()
        .args(["--test", "--data", &data, "projects"])
        .assert()
        .success()
        .stdout(contains("Pending"));
}

#[test]
fn missing_dataset_file_is_an_error() {
    sd()
        .args(["--test", "--data", "/no/such/file.json", "projects"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

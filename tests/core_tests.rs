//! Library-level tests for the derivation core: cost aggregation, summary
//! building and portfolio rollups over the in-memory store.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sitedash::core::{costs, rollup, summary};
use sitedash::errors::AppError;
use sitedash::models::{Project, ProjectStatus, TaskStatus, TimeEntry};
use sitedash::store::{Store, load::Dataset, seed};

fn bare_project(id: &str, price: Decimal, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        address: "1 Test Lane".to_string(),
        client_name: "Client".to_string(),
        client_contact: None,
        status,
        price,
        stage: None,
        progress: None,
    }
}

#[test]
fn zero_record_baseline() {
    let dataset = Dataset {
        projects: vec![bare_project("p1", dec!(25000), ProjectStatus::Active)],
        ..Dataset::default()
    };
    let store = Store::new(dataset);

    let row = summary::project_summary(&store, "p1").expect("project exists");
    assert_eq!(row.total_cost, Decimal::ZERO);
    assert_eq!(row.profit, dec!(25000));
    assert!(row.is_positive);

    let paid = costs::paid_total("p1", &store.payments);
    assert_eq!(paid, Decimal::ZERO);
    assert_eq!(costs::outstanding(dec!(25000), paid), dec!(25000));
}

#[test]
fn concrete_scenario_breakdown() {
    // Demo data is exactly the scenario: worker A 45/h for 8h, worker B
    // 35/h for 7.5h, 30 units at 15, one 220 expense, one 450 receipt.
    let store = Store::demo();

    let labor = costs::labor_cost("p1", &store.time_entries, &store.workers);
    let material = costs::material_cost("p1", &store.material_usage, &store.materials);
    let expenses = costs::manual_expense_cost("p1", &store.manual_expenses);
    let receipts = costs::receipt_cost("p1", &store.receipts);

    assert_eq!(labor, dec!(622.5));
    assert_eq!(material, dec!(450));
    assert_eq!(expenses, dec!(220));
    assert_eq!(receipts, dec!(450));

    let row = summary::project_summary(&store, "p1").expect("p1 exists");
    assert_eq!(row.total_cost, dec!(1742.5));
    assert_eq!(row.profit, dec!(23257.5));
    assert!(row.is_positive);
    assert_eq!(row.status_label, "In Progress");
}

#[test]
fn total_cost_is_additive() {
    let store = Store::demo();

    for row in summary::all_summaries(&store) {
        let labor = costs::labor_cost(&row.project_id, &store.time_entries, &store.workers);
        let material = costs::material_cost(&row.project_id, &store.material_usage, &store.materials);
        let expenses = costs::manual_expense_cost(&row.project_id, &store.manual_expenses);
        let receipts = costs::receipt_cost(&row.project_id, &store.receipts);

        assert_eq!(row.total_cost, labor + material + expenses + receipts);
        assert_eq!(row.profit, row.price - row.total_cost);
    }
}

#[test]
fn orphaned_time_entry_contributes_zero() {
    let mut dataset = seed::demo();
    let before = {
        let store = Store::new(dataset.clone());
        costs::labor_cost("p1", &store.time_entries, &store.workers)
    };

    dataset.time_entries.push(TimeEntry {
        id: "ghost-entry".to_string(),
        project_id: "p1".to_string(),
        worker_id: "no-such-worker".to_string(),
        hours: dec!(40),
        date: chrono::NaiveDate::from_ymd_opt(2025, 12, 13).unwrap(),
    });
    let store = Store::new(dataset);

    let after = costs::labor_cost("p1", &store.time_entries, &store.workers);
    assert_eq!(before, after);
}

#[test]
fn aggregates_are_order_independent() {
    let forward = Store::new(seed::demo());

    let mut shuffled = seed::demo();
    shuffled.time_entries.reverse();
    shuffled.material_usage.reverse();
    shuffled.manual_expenses.reverse();
    shuffled.receipts.reverse();
    shuffled.payments.reverse();
    let backward = Store::new(shuffled);

    for id in ["p1", "p2"] {
        let a = summary::project_summary(&forward, id).unwrap();
        let b = summary::project_summary(&backward, id).unwrap();
        assert_eq!(a.total_cost, b.total_cost);
        assert_eq!(a.profit, b.profit);
        assert_eq!(
            costs::paid_total(id, &forward.payments),
            costs::paid_total(id, &backward.payments)
        );
    }
}

#[test]
fn status_label_is_total_over_arbitrary_input() {
    let labels = ["In Progress", "Completed", "Pending"];
    for input in [
        "active",
        "completed",
        "pending",
        "ACTIVE",
        "Completed",
        "on_hold",
        "garbage",
        "",
        "123",
    ] {
        let label = ProjectStatus::from_str_lossy(input).label();
        assert!(labels.contains(&label), "unexpected label {:?}", label);
    }
}

#[test]
fn unknown_project_is_not_a_zero_summary() {
    let store = Store::demo();
    let err = summary::project_summary(&store, "p999").unwrap_err();
    assert!(matches!(err, AppError::ProjectNotFound(id) if id == "p999"));
}

#[test]
fn payment_scenario() {
    let store = Store::demo();

    let paid = costs::paid_total("p1", &store.payments);
    assert_eq!(paid, dec!(10000));
    assert_eq!(costs::outstanding(dec!(25000), paid), dec!(15000));
}

#[test]
fn portfolio_scenario() {
    let store = Store::demo();
    let stats = rollup::portfolio_stats(&store);

    assert_eq!(stats.active_projects, 1);
    assert_eq!(stats.working_workers, 2);
    assert_eq!(stats.total_revenue, dec!(33500));
    // p1 profit 23_257.50 + p2 profit 8_100 (8500 - 280 paint - 120 permit)
    assert_eq!(stats.total_profit, dec!(31357.5));
    assert_eq!(stats.total_expenses, dec!(2142.5));
    assert_eq!(stats.payments_received, dec!(12000));
    assert_eq!(stats.outstanding, dec!(21500));
}

#[test]
fn dashboard_listings_join_names_and_fall_back_on_orphans() {
    let mut dataset = seed::demo();
    dataset.time_entries.push(TimeEntry {
        id: "ghost-entry".to_string(),
        project_id: "p1".to_string(),
        worker_id: "no-such-worker".to_string(),
        hours: dec!(3),
        date: chrono::NaiveDate::from_ymd_opt(2025, 12, 13).unwrap(),
    });
    let store = Store::new(dataset);

    let hours = rollup::worker_hours(&store);
    assert_eq!(hours.len(), 3);
    assert_eq!(hours[0].worker, "Mike Ross");
    assert_eq!(hours[0].earnings, dec!(360));

    let orphan = &hours[2];
    assert_eq!(orphan.worker, "Unknown Worker");
    assert_eq!(orphan.initials, "NA");
    assert_eq!(orphan.earnings, Decimal::ZERO);

    let spend = rollup::material_spend(&store);
    assert_eq!(spend.len(), 2);
    assert_eq!(spend[0].material, "Lumber 2x4");
    assert_eq!(spend[0].cost, dec!(450));
}

#[test]
fn append_recomputes_and_bumps_revision() {
    let mut store = Store::demo();
    let rev = store.revision();

    store
        .log_time("p1", "w1", dec!(4), None)
        .expect("valid entry");
    assert_eq!(store.revision(), rev + 1);

    let labor = costs::labor_cost("p1", &store.time_entries, &store.workers);
    assert_eq!(labor, dec!(802.5));

    store.record_mutation_applied();
    assert_eq!(store.revision(), rev + 2);
}

#[test]
fn mutation_boundary_rejects_invalid_input() {
    let mut store = Store::demo();

    let err = store.log_time("p1", "w1", dec!(0), None).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));

    let err = store.log_time("p999", "w1", dec!(1), None).unwrap_err();
    assert!(matches!(err, AppError::ProjectNotFound(_)));

    let err = store.log_time("p1", "w999", dec!(1), None).unwrap_err();
    assert!(matches!(err, AppError::WorkerNotFound(_)));

    let err = store.add_expense("p1", "   ", dec!(10), None).unwrap_err();
    assert!(matches!(err, AppError::MissingField("description")));

    let err = store.log_usage("p1", "m999", dec!(2), None).unwrap_err();
    assert!(matches!(err, AppError::MaterialNotFound(_)));
}

#[test]
fn task_status_is_settable_directly() {
    let mut store = Store::demo();

    let id = store
        .add_task("p1", "Hang drywall", vec!["w1".to_string()], None)
        .expect("valid task");
    assert_eq!(store.task(&id).unwrap().status, TaskStatus::NotStarted);

    // No transition order: jump straight to completed.
    store
        .set_task_status(&id, TaskStatus::Completed)
        .expect("status set");
    assert_eq!(store.task(&id).unwrap().status, TaskStatus::Completed);

    let err = store
        .set_task_status("task999", TaskStatus::InProgress)
        .unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(_)));
}

#[test]
fn rate_change_reprices_logged_hours() {
    let mut dataset = seed::demo();
    dataset.workers[0].hourly_rate = dec!(90);
    let store = Store::new(dataset);

    // w1's 8 hours now cost 720 instead of 360.
    let labor = costs::labor_cost("p1", &store.time_entries, &store.workers);
    assert_eq!(labor, dec!(982.5));
}

#[test]
fn new_ids_do_not_collide_with_dataset_ids() {
    let mut store = Store::demo();
    let id = store
        .add_task("p1", "Check ids", vec![], None)
        .expect("valid task");

    assert_eq!(store.tasks.iter().filter(|t| t.id == id).count(), 1);
    assert!(!["task1", "task2", "task3"].contains(&id.as_str()));
}

//! Built-in demo dataset: two projects mid-flight with a handful of
//! transactional records, used when no dataset file is configured.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{
    ManualExpense, Material, MaterialUsage, Payment, PaymentStatus, Project, ProjectStatus,
    Receipt, Task, TaskStatus, TimeEntry, Worker,
};
use crate::store::load::Dataset;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

pub fn demo() -> Dataset {
    Dataset {
        workers: vec![
            Worker {
                id: "w1".into(),
                name: "Mike Ross".into(),
                initials: "MR".into(),
                hourly_rate: dec!(45),
                phone: Some("555-0101".into()),
                email: None,
                project_ids: vec!["p1".into()],
            },
            Worker {
                id: "w2".into(),
                name: "John Smith".into(),
                initials: "JS".into(),
                hourly_rate: dec!(35),
                phone: Some("555-0102".into()),
                email: None,
                project_ids: vec!["p1".into()],
            },
        ],
        materials: vec![
            Material {
                id: "m1".into(),
                name: "Lumber 2x4".into(),
                unit_price: dec!(15),
                stock_qty: Some(dec!(120)),
                low_stock_threshold: None,
                supplier: None,
            },
            Material {
                id: "m2".into(),
                name: "Paint - Interior White".into(),
                unit_price: dec!(70),
                stock_qty: Some(dec!(28)),
                low_stock_threshold: None,
                supplier: None,
            },
        ],
        projects: vec![
            Project {
                id: "p1".into(),
                name: "Miller Kitchen Renovation".into(),
                address: "123 Oak Street, Springfield".into(),
                client_name: "Cathy Miller".into(),
                client_contact: None,
                status: ProjectStatus::Active,
                price: dec!(25000),
                stage: Some("Installation".into()),
                progress: Some(62),
            },
            Project {
                id: "p2".into(),
                name: "Downtown Office Painting".into(),
                address: "456 Main Ave, Downtown".into(),
                client_name: "Downtown Holdings".into(),
                client_contact: None,
                status: ProjectStatus::Pending,
                price: dec!(8500),
                stage: Some("Planning".into()),
                progress: Some(20),
            },
        ],
        material_usage: vec![
            MaterialUsage {
                id: "u1".into(),
                project_id: "p1".into(),
                material_id: "m1".into(),
                quantity: dec!(30),
                date: day(2025, 12, 12),
            },
            MaterialUsage {
                id: "u2".into(),
                project_id: "p2".into(),
                material_id: "m2".into(),
                quantity: dec!(4),
                date: day(2025, 12, 12),
            },
        ],
        time_entries: vec![
            TimeEntry {
                id: "t1".into(),
                project_id: "p1".into(),
                worker_id: "w1".into(),
                hours: dec!(8),
                date: day(2025, 12, 12),
            },
            TimeEntry {
                id: "t2".into(),
                project_id: "p1".into(),
                worker_id: "w2".into(),
                hours: dec!(7.5),
                date: day(2025, 12, 12),
            },
        ],
        manual_expenses: vec![
            ManualExpense {
                id: "e1".into(),
                project_id: "p1".into(),
                description: "Dumpster rental".into(),
                amount: dec!(220),
                date: day(2025, 12, 11),
            },
            ManualExpense {
                id: "e2".into(),
                project_id: "p2".into(),
                description: "Permit filing fee".into(),
                amount: dec!(120),
                date: day(2025, 12, 10),
            },
        ],
        receipts: vec![Receipt {
            id: "r1".into(),
            project_id: "p1".into(),
            file_name: "lumber-receipt.pdf".into(),
            amount: dec!(450),
            date: day(2025, 12, 10),
        }],
        tasks: vec![
            Task {
                id: "task1".into(),
                project_id: "p1".into(),
                title: "Install cabinets".into(),
                assignee_ids: vec!["w1".into()],
                status: TaskStatus::InProgress,
                due_date: Some(day(2025, 12, 14)),
                notes: None,
            },
            Task {
                id: "task2".into(),
                project_id: "p1".into(),
                title: "Paint walls".into(),
                assignee_ids: vec!["w2".into()],
                status: TaskStatus::NotStarted,
                due_date: Some(day(2025, 12, 15)),
                notes: None,
            },
            Task {
                id: "task3".into(),
                project_id: "p2".into(),
                title: "Color matching".into(),
                assignee_ids: vec!["w2".into()],
                status: TaskStatus::InProgress,
                due_date: Some(day(2025, 12, 16)),
                notes: None,
            },
        ],
        payments: vec![
            Payment {
                id: "pay1".into(),
                project_id: "p1".into(),
                amount: dec!(10000),
                status: PaymentStatus::Partial,
                date: day(2025, 12, 9),
            },
            Payment {
                id: "pay2".into(),
                project_id: "p2".into(),
                amount: dec!(2000),
                status: PaymentStatus::Partial,
                date: day(2025, 12, 8),
            },
        ],
    }
}

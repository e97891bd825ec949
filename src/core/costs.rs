//! Cost aggregation primitives.
//!
//! All functions here are pure and total: they never fail, an absence of
//! matching records yields zero, and the result does not depend on record
//! order. A record whose worker or material reference does not resolve is
//! skipped silently (orphaned reference policy).

use rust_decimal::Decimal;

use crate::models::{ManualExpense, Material, MaterialUsage, Payment, Receipt, TimeEntry, Worker};

/// Labor cost of a project: Σ hours × hourly rate over its time entries.
/// Rates are looked up at call time, so a rate change re-prices history.
pub fn labor_cost(project_id: &str, entries: &[TimeEntry], workers: &[Worker]) -> Decimal {
    entries
        .iter()
        .filter(|e| e.project_id == project_id)
        .filter_map(|e| {
            workers
                .iter()
                .find(|w| w.id == e.worker_id)
                .map(|w| e.hours * w.hourly_rate)
        })
        .sum()
}

/// Material cost of a project: Σ quantity × unit price over its usage rows.
pub fn material_cost(project_id: &str, usage: &[MaterialUsage], materials: &[Material]) -> Decimal {
    usage
        .iter()
        .filter(|u| u.project_id == project_id)
        .filter_map(|u| {
            materials
                .iter()
                .find(|m| m.id == u.material_id)
                .map(|m| u.quantity * m.unit_price)
        })
        .sum()
}

/// Sum of ad-hoc expense amounts recorded against a project.
pub fn manual_expense_cost(project_id: &str, expenses: &[ManualExpense]) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.project_id == project_id)
        .map(|e| e.amount)
        .sum()
}

/// Sum of receipt amounts filed against a project.
pub fn receipt_cost(project_id: &str, receipts: &[Receipt]) -> Decimal {
    receipts
        .iter()
        .filter(|r| r.project_id == project_id)
        .map(|r| r.amount)
        .sum()
}

/// Total client payments received for a project.
pub fn paid_total(project_id: &str, payments: &[Payment]) -> Decimal {
    payments
        .iter()
        .filter(|p| p.project_id == project_id)
        .map(|p| p.amount)
        .sum()
}

/// Contract price minus payments received. Negative means overpayment.
pub fn outstanding(price: Decimal, paid: Decimal) -> Decimal {
    price - paid
}

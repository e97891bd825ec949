//! Portfolio-wide rollups: the dashboard stat figures and the per-record
//! report listings. All derived, recomputed per query.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::summary::all_summaries;
use crate::store::Store;

/// Aggregate figures across all projects.
#[derive(Debug, Clone)]
pub struct PortfolioStats {
    pub active_projects: usize,
    /// Workers who have ever logged time, not workers currently checked in.
    pub working_workers: usize,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub total_expenses: Decimal,
    pub payments_received: Decimal,
    pub outstanding: Decimal,
}

pub fn portfolio_stats(store: &Store) -> PortfolioStats {
    let summaries = all_summaries(store);

    let active_projects = store.projects.iter().filter(|p| p.status.is_active()).count();
    let working_workers = store
        .time_entries
        .iter()
        .map(|e| e.worker_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let total_revenue: Decimal = store.projects.iter().map(|p| p.price).sum();
    let total_profit: Decimal = summaries.iter().map(|s| s.profit).sum();
    let total_expenses: Decimal = summaries.iter().map(|s| s.total_cost).sum();
    let payments_received: Decimal = store.payments.iter().map(|p| p.amount).sum();

    PortfolioStats {
        active_projects,
        working_workers,
        total_revenue,
        total_profit,
        total_expenses,
        payments_received,
        outstanding: total_revenue - payments_received,
    }
}

/// One attendance line: a time entry joined against its worker and project.
#[derive(Debug, Clone)]
pub struct WorkerHoursRow {
    pub initials: String,
    pub worker: String,
    pub project: String,
    pub hours: Decimal,
    pub earnings: Decimal,
}

/// Attendance listing for the dashboard, one row per time entry in log
/// order. Orphaned references fall back to placeholder names with zero
/// earnings rather than dropping the row.
pub fn worker_hours(store: &Store) -> Vec<WorkerHoursRow> {
    store
        .time_entries
        .iter()
        .map(|entry| {
            let worker = store.worker(&entry.worker_id);
            let project = store.project(&entry.project_id);

            WorkerHoursRow {
                initials: worker.map_or("NA".to_string(), |w| w.initials.clone()),
                worker: worker.map_or("Unknown Worker".to_string(), |w| w.name.clone()),
                project: project.map_or("Unknown Project".to_string(), |p| p.name.clone()),
                hours: entry.hours,
                earnings: worker.map_or(Decimal::ZERO, |w| w.hourly_rate * entry.hours),
            }
        })
        .collect()
}

/// One material spend line: a usage row joined against material and project.
#[derive(Debug, Clone)]
pub struct MaterialSpendRow {
    pub material: String,
    pub project: String,
    pub cost: Decimal,
}

pub fn material_spend(store: &Store) -> Vec<MaterialSpendRow> {
    store
        .material_usage
        .iter()
        .map(|usage| {
            let material = store.material(&usage.material_id);
            let project = store.project(&usage.project_id);

            MaterialSpendRow {
                material: material.map_or("Unknown Material".to_string(), |m| m.name.clone()),
                project: project.map_or("Unknown Project".to_string(), |p| p.name.clone()),
                cost: material.map_or(Decimal::ZERO, |m| m.unit_price * usage.quantity),
            }
        })
        .collect()
}

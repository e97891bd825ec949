//! Per-project summary building. Summaries are derived views over the
//! current record sets and are never stored as a source of truth.

use rust_decimal::Decimal;

use crate::core::costs;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::store::Store;

/// Full cost decomposition of one project.
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    pub labor: Decimal,
    pub material: Decimal,
    pub manual_expense: Decimal,
    pub receipt: Decimal,
    pub total: Decimal,
    pub profit: Decimal,
}

/// The point-in-time financial view of one project, ready for display.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub project_id: String,
    pub name: String,
    pub address: String,
    pub status_label: &'static str,
    pub price: Decimal,
    pub labor_cost: Decimal,
    pub material_cost: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    /// Break-even counts as positive.
    pub is_positive: bool,
}

/// Compute the cost breakdown of a project from the full record sets.
pub fn cost_breakdown(project: &Project, store: &Store) -> CostBreakdown {
    let labor = costs::labor_cost(&project.id, &store.time_entries, &store.workers);
    let material = costs::material_cost(&project.id, &store.material_usage, &store.materials);
    let manual_expense = costs::manual_expense_cost(&project.id, &store.manual_expenses);
    let receipt = costs::receipt_cost(&project.id, &store.receipts);

    let total = labor + material + manual_expense + receipt;

    CostBreakdown {
        labor,
        material,
        manual_expense,
        receipt,
        total,
        profit: project.price - total,
    }
}

/// Build the summary row for a single project.
pub fn build_summary(project: &Project, store: &Store) -> SummaryRow {
    let breakdown = cost_breakdown(project, store);

    SummaryRow {
        project_id: project.id.clone(),
        name: project.name.clone(),
        address: project.address.clone(),
        status_label: project.status.label(),
        price: project.price,
        labor_cost: breakdown.labor,
        material_cost: breakdown.material,
        total_cost: breakdown.total,
        profit: breakdown.profit,
        is_positive: breakdown.profit >= Decimal::ZERO,
    }
}

/// Summary for a known project id. An unknown id is an error, distinct
/// from a project that merely has no costs yet.
pub fn project_summary(store: &Store, project_id: &str) -> AppResult<SummaryRow> {
    let project = store
        .project(project_id)
        .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;
    Ok(build_summary(project, store))
}

/// Summaries for every project, in project insertion order.
pub fn all_summaries(store: &Store) -> Vec<SummaryRow> {
    store.projects.iter().map(|p| build_summary(p, store)).collect()
}

//! Flat export shapes for the summary rows and portfolio figures.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{PortfolioStats, SummaryRow};

#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub project_id: String,
    pub name: String,
    pub address: String,
    pub status: String,
    pub price: Decimal,
    pub labor_cost: Decimal,
    pub material_cost: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
}

impl From<&SummaryRow> for SummaryExport {
    fn from(row: &SummaryRow) -> Self {
        Self {
            project_id: row.project_id.clone(),
            name: row.name.clone(),
            address: row.address.clone(),
            status: row.status_label.to_string(),
            price: row.price,
            labor_cost: row.labor_cost,
            material_cost: row.material_cost,
            total_cost: row.total_cost,
            profit: row.profit,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PortfolioExport {
    pub active_projects: usize,
    pub working_workers: usize,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub total_expenses: Decimal,
    pub payments_received: Decimal,
    pub outstanding: Decimal,
}

impl From<&PortfolioStats> for PortfolioExport {
    fn from(stats: &PortfolioStats) -> Self {
        Self {
            active_projects: stats.active_projects,
            working_workers: stats.working_workers,
            total_revenue: stats.total_revenue,
            total_profit: stats.total_profit,
            total_expenses: stats.total_expenses,
            payments_received: stats.payments_received,
            outstanding: stats.outstanding,
        }
    }
}

/// JSON export carries the summaries plus the portfolio rollup; CSV gets
/// the summary rows only.
#[derive(Serialize, Clone, Debug)]
pub struct ExportDocument {
    pub generated: String,
    pub summaries: Vec<SummaryExport>,
    pub portfolio: PortfolioExport,
}

pub(crate) fn headers() -> Vec<&'static str> {
    vec![
        "project_id",
        "name",
        "address",
        "status",
        "price",
        "labor_cost",
        "material_cost",
        "total_cost",
        "profit",
    ]
}

pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.project_id.clone(),
        s.name.clone(),
        s.address.clone(),
        s.status.clone(),
        s.price.to_string(),
        s.labor_cost.to_string(),
        s.material_cost.to_string(),
        s.total_cost.to_string(),
        s.profit.to_string(),
    ]
}

//! Transactional records. Every record references exactly one project by id
//! (and a worker or material where applicable). References carry no
//! ownership: a record whose referent has disappeared is "orphaned" and
//! simply contributes zero cost.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One worker-project-day record of hours worked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub project_id: String,
    pub worker_id: String,
    pub hours: Decimal,
    pub date: NaiveDate,
}

/// Quantity of a material consumed by a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub id: String,
    pub project_id: String,
    pub material_id: String,
    pub quantity: Decimal,
    pub date: NaiveDate,
}

/// Ad-hoc cost not tied to labor or materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualExpense {
    pub id: String,
    pub project_id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A filed receipt. Costed identically to a manual expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub project_id: String,
    pub file_name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "partial" => Some(Self::Partial),
            "unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Unpaid => "unpaid",
        }
    }
}

/// A client payment. Independent of cost accounting: payments affect the
/// outstanding balance, never the cost side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub project_id: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub date: NaiveDate,
}

//! The derivation engine: pure cost aggregation, per-project summaries and
//! portfolio-wide rollups. Everything here is recomputed on demand from the
//! current record sets; nothing is cached.

pub mod costs;
pub mod rollup;
pub mod summary;

pub use rollup::{MaterialSpendRow, PortfolioStats, WorkerHoursRow};
pub use summary::{CostBreakdown, SummaryRow};

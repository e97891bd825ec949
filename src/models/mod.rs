pub mod material;
pub mod project;
pub mod records;
pub mod task;
pub mod worker;

pub use material::Material;
pub use project::{Project, ProjectStatus};
pub use records::{ManualExpense, MaterialUsage, Payment, PaymentStatus, Receipt, TimeEntry};
pub use task::{Task, TaskStatus};
pub use worker::Worker;

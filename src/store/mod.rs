//! The record store: one explicitly owned object holding every collection,
//! with an append-only mutation API. Input validation happens here, at the
//! mutation boundary; the derivation core assumes records it sees are valid.

pub mod ids;
pub mod load;
pub mod seed;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{AppError, AppResult};
use crate::models::{
    ManualExpense, Material, MaterialUsage, Payment, PaymentStatus, Project, Receipt, Task,
    TaskStatus, TimeEntry, Worker,
};
use crate::utils::date;
use ids::IdAllocator;
use load::Dataset;

#[derive(Debug)]
pub struct Store {
    pub projects: Vec<Project>,
    pub workers: Vec<Worker>,
    pub materials: Vec<Material>,
    pub time_entries: Vec<TimeEntry>,
    pub material_usage: Vec<MaterialUsage>,
    pub manual_expenses: Vec<ManualExpense>,
    pub receipts: Vec<Receipt>,
    pub payments: Vec<Payment>,
    pub tasks: Vec<Task>,

    ids: IdAllocator,
    revision: u64,
}

impl Store {
    pub fn new(dataset: Dataset) -> Self {
        let ids = IdAllocator::starting_at(dataset.record_count() as u64);
        Self {
            projects: dataset.projects,
            workers: dataset.workers,
            materials: dataset.materials,
            time_entries: dataset.time_entries,
            material_usage: dataset.material_usage,
            manual_expenses: dataset.manual_expenses,
            receipts: dataset.receipts,
            payments: dataset.payments,
            tasks: dataset.tasks,
            ids,
            revision: 0,
        }
    }

    pub fn demo() -> Self {
        Self::new(seed::demo())
    }

    // ---------------------------
    // Lookups
    // ---------------------------

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn require_project(&self, id: &str) -> AppResult<()> {
        if self.project(id).is_none() {
            return Err(AppError::ProjectNotFound(id.to_string()));
        }
        Ok(())
    }

    // ---------------------------
    // Mutation gateway (append-only)
    // ---------------------------

    /// Log hours a worker spent on a project. Returns the new entry id.
    pub fn log_time(
        &mut self,
        project_id: &str,
        worker_id: &str,
        hours: Decimal,
        entry_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        if self.worker(worker_id).is_none() {
            return Err(AppError::WorkerNotFound(worker_id.to_string()));
        }
        require_positive(hours, "hours")?;

        let id = self.ids.next_id("time");
        self.time_entries.push(TimeEntry {
            id: id.clone(),
            project_id: project_id.to_string(),
            worker_id: worker_id.to_string(),
            hours,
            date: entry_date.unwrap_or_else(date::today),
        });
        self.record_mutation_applied();
        Ok(id)
    }

    /// Record material consumption on a project.
    pub fn log_usage(
        &mut self,
        project_id: &str,
        material_id: &str,
        quantity: Decimal,
        usage_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        if self.material(material_id).is_none() {
            return Err(AppError::MaterialNotFound(material_id.to_string()));
        }
        require_positive(quantity, "quantity")?;

        let id = self.ids.next_id("use");
        self.material_usage.push(MaterialUsage {
            id: id.clone(),
            project_id: project_id.to_string(),
            material_id: material_id.to_string(),
            quantity,
            date: usage_date.unwrap_or_else(date::today),
        });
        self.record_mutation_applied();
        Ok(id)
    }

    pub fn add_expense(
        &mut self,
        project_id: &str,
        description: &str,
        amount: Decimal,
        expense_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        let description = require_text(description, "description")?;
        require_positive(amount, "amount")?;

        let id = self.ids.next_id("exp");
        self.manual_expenses.push(ManualExpense {
            id: id.clone(),
            project_id: project_id.to_string(),
            description,
            amount,
            date: expense_date.unwrap_or_else(date::today),
        });
        self.record_mutation_applied();
        Ok(id)
    }

    pub fn add_receipt(
        &mut self,
        project_id: &str,
        file_name: &str,
        amount: Decimal,
        receipt_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        let file_name = require_text(file_name, "file name")?;
        require_positive(amount, "amount")?;

        let id = self.ids.next_id("rec");
        self.receipts.push(Receipt {
            id: id.clone(),
            project_id: project_id.to_string(),
            file_name,
            amount,
            date: receipt_date.unwrap_or_else(date::today),
        });
        self.record_mutation_applied();
        Ok(id)
    }

    pub fn add_payment(
        &mut self,
        project_id: &str,
        amount: Decimal,
        status: PaymentStatus,
        payment_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        require_positive(amount, "amount")?;

        let id = self.ids.next_id("pay");
        self.payments.push(Payment {
            id: id.clone(),
            project_id: project_id.to_string(),
            amount,
            status,
            date: payment_date.unwrap_or_else(date::today),
        });
        self.record_mutation_applied();
        Ok(id)
    }

    /// New tasks start as not started. Assignees must be known workers.
    pub fn add_task(
        &mut self,
        project_id: &str,
        title: &str,
        assignee_ids: Vec<String>,
        due_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        self.require_project(project_id)?;
        let title = require_text(title, "title")?;
        for worker_id in &assignee_ids {
            if self.worker(worker_id).is_none() {
                return Err(AppError::WorkerNotFound(worker_id.clone()));
            }
        }

        let id = self.ids.next_id("task");
        self.tasks.push(Task {
            id: id.clone(),
            project_id: project_id.to_string(),
            title,
            assignee_ids,
            status: TaskStatus::NotStarted,
            due_date,
            notes: None,
        });
        self.record_mutation_applied();
        Ok(id)
    }

    /// Set a task to any status directly; transitions are not ordered.
    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> AppResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))?;
        task.status = status;
        self.record_mutation_applied();
        Ok(())
    }

    // ---------------------------
    // Staleness
    // ---------------------------

    /// Mark derived views stale. There is no cache to invalidate (summaries
    /// are recomputed per query); the revision lets hosts detect that a
    /// recompute is due after a mutation.
    pub fn record_mutation_applied(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

fn require_positive(value: Decimal, field: &str) -> AppResult<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::InvalidAmount(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}

fn require_text(value: &str, field: &'static str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Lookup failures (mutation boundary only; the
    // aggregator itself never fails on a missing reference)
    // ---------------------------
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    // ---------------------------
    // Config / dataset errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (store, core, cli, report) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Catalog
    // ---------------------------
    #[error("Product catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Column '{0}' not found in product catalog")]
    MissingColumn(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid status: {0} (use 접수, 검토중, 승인, 반려)")]
    InvalidStatus(String),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    // ---------------------------
    // Workflow errors
    // ---------------------------
    #[error("Invalid row index: {index} (log has {len} rows)")]
    InvalidRowIndex { index: usize, len: usize },

    #[error("Unauthorized: wrong {0} password")]
    Unauthorized(&'static str),

    #[error("Attachment not found: {0}")]
    AttachmentNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

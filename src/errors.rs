//! Unified application error type.
//! All modules (store, render, core, cli, db) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),

    // ---------------------------
    // Rendering
    // ---------------------------
    #[error("Floor plan not found: {0}")]
    FloorPlanMissing(String),

    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / sessions
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Session file error: {0}")]
    Session(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

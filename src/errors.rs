//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid incident type: {0}")]
    InvalidIncidentType(String),

    #[error("Invalid people count: {0}")]
    InvalidPeopleCount(String),

    #[error("Invalid coordinate value: {0}")]
    InvalidCoordinate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Draft is not ready for submission: {0}")]
    DraftNotReady(String),

    #[error("No entry with index {0}")]
    InvalidEntryIndex(usize),

    #[error("Photo file not found: {0}")]
    PhotoNotFound(String),

    #[error("Reverse geocoding failed: {0}")]
    Geocode(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

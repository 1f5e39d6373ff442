//! Unified error types and result handling.

use rust_decimal::Decimal;
use thiserror::Error;

/// Crate-wide error type covering configuration, validation, persistence,
/// upload, and document rendering failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Quotation not found: {id}")]
    QuotationNotFound { id: String },

    #[error("Upload error: {message}")]
    Upload { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

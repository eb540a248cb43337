//! # App Error Type
//!
//! Errors the shell reports to the user.
//!
//! Only startup failures (reading stdin, building the runtime) end the
//! program. Everything else is printed and the prompt comes back.

use shopvibe_catalog::CatalogError;
use shopvibe_core::{ProductId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog config or fetch failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Terminal or runtime I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input did not parse as a known command.
    #[error("Unknown command: {0} (type 'help')")]
    InvalidCommand(String),

    /// State snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A command argument was malformed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// `add` named an id that is not in the loaded catalog.
    #[error("No product with id {0} in the catalog")]
    UnknownProduct(ProductId),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

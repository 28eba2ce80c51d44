//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown category key: {0}")]
    UnknownCategory(String),
}

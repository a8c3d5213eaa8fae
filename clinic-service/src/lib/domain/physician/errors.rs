use thiserror::Error;

use crate::domain::errors::BlankFieldError;

/// Error for PhysicianId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhysicianIdError {
    #[error("Invalid physician id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("must not be blank")]
    Blank,

    #[error("must be a well-formed email address ({0})")]
    InvalidFormat(String),
}

/// Error for DocumentNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("must not be blank")]
    Blank,

    #[error("must be {min} to {max} digits")]
    InvalidFormat { min: usize, max: usize },
}

/// Error for Specialty parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecialtyError {
    #[error("unknown specialty '{0}' (expected one of ORTHOPEDICS, CARDIOLOGY, GYNECOLOGY, DERMATOLOGY)")]
    Unknown(String),
}

/// Error for paging parameters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("page size must be at least 1")]
    ZeroSize,
}

/// Top-level error for all physician-related operations
#[derive(Debug, Clone, Error)]
pub enum PhysicianError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid physician id: {0}")]
    InvalidId(#[from] PhysicianIdError),

    #[error("Invalid field: {0}")]
    BlankField(#[from] BlankFieldError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),

    #[error("Invalid specialty: {0}")]
    InvalidSpecialty(#[from] SpecialtyError),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(#[from] PageRequestError),

    // Domain-level errors
    #[error("Physician not found: {0}")]
    NotFound(String),

    #[error("Physician document already exists: {0}")]
    DocumentAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

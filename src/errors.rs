// errors.rs
use astra::Response;
use thiserror::Error;

/// Failures reported by a listing store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is already taken in the backing store.
    #[error("identifier already exists: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A stored payload could not be read back as a listing.
    #[error("malformed listing data: {0}")]
    Malformed(String),
}

/// Coarse outcomes surfaced to the view layer. Store errors are wrapped,
/// never shown verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error("Property not found.")]
    NotFound,
    #[error("Save failed: {0}")]
    SaveFailed(StoreError),
    #[error("Failed to load property.")]
    LoadFailed(StoreError),
}

/// Request-level failures that end in an HTML error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

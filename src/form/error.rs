/// Error types for form parsing and validation.
use thiserror::Error;

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// A malformed form. These are caller defects and are reported before any
/// section is assembled.
#[derive(Error, Debug)]
pub enum FormError {
    /// Payload could not be decoded, including a missing or unknown variant tag
    #[error("Malformed form payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required text field is empty
    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    /// An entity field has no name
    #[error("Entity field #{index} has no name")]
    UnnamedEntityField { index: usize },

    /// An entity field declares a zero length
    #[error("Entity field '{field}' declares a non-positive length")]
    InvalidFieldLength { field: String },

    /// Test steps must be numbered 1, 2, 3, ...
    #[error("Test step numbering is not sequential: expected {expected}, found {found}")]
    NonSequentialStep { expected: u32, found: u32 },
}

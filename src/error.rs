/// Crate-level error type.
///
/// Each layer keeps its own error enum; this type is what the end-to-end
/// entry points return.
use crate::collab::CollaboratorError;
use crate::config::ConfigError;
use crate::form::FormError;
use crate::ooxml::OoxmlError;
use thiserror::Error;

/// Result type for document generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The form is malformed; nothing was assembled
    #[error(transparent)]
    Form(#[from] FormError),

    /// The package could not be written; no partial buffer exists
    #[error(transparent)]
    Ooxml(#[from] OoxmlError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

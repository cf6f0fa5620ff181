//! Office Open XML (OOXML) output.
//!
//! 1. **OPC Layer** (`opc`): parts, relationships, content types and the ZIP container
//! 2. **WordprocessingML** (`docx`): serialization of document blocks and read-back
//!    of generated packages
pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result};

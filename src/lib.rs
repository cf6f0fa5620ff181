//! Use-case document synthesis.
//!
//! Turns a structured use-case form into a styled Word (`.docx`)
//! specification. Synthesis runs in three stages:
//!
//! 1. **Assembly** (`assembler`): the form's variant decides the section
//!    sequence; every section is emitted as library-agnostic [`ir`] blocks
//!    built with the `builder` helpers.
//! 2. **Decoration** (`header_footer`): the running header table and the
//!    page-numbered footer.
//! 3. **Serialization** (`ooxml`): the blocks become a complete OPC package.
//!
//! # Example
//!
//! ```no_run
//! use usecase_docgen::{DocumentConfig, UseCaseForm, generate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("form.json")?;
//! let form = UseCaseForm::from_json(&json)?;
//! let config = DocumentConfig::from_yaml_file("docgen.yaml")?;
//!
//! let bytes = generate(&form, &config)?;
//! std::fs::write(format!("{}.docx", form.file_name), bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a generated document
//!
//! ```no_run
//! use usecase_docgen::ooxml::docx::DocumentSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = DocumentSummary::from_path("AB123GestionarUsuarios.docx")?;
//! for heading in summary.headings(2) {
//!     println!("{heading}");
//! }
//! println!("{:?}", summary.counts());
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod builder;
pub mod collab;
pub mod common;
pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod header_footer;
pub mod ir;
pub mod ooxml;

pub use config::DocumentConfig;
pub use error::{Error, Result};
pub use form::{UseCaseForm, UseCaseVariant};
pub use generator::{GeneratedDocument, generate, generate_batch, generate_document};

//! Use-case form data model.
//!
//! [`UseCaseForm`] is the immutable input of one synthesis call. Variant
//! specific data lives in [`VariantDetails`], an internally tagged enum keyed
//! by `useCaseType`, so a form can only ever carry the fields of its variant.

mod error;
#[cfg(test)]
pub(crate) mod fixtures;
mod types;
mod validate;

pub use error::{FormError, Result};
pub use types::{
    ApiDetails, EntityDetails, EntityField, FieldType, ImageSource, ServiceDetails,
    TestCase, TestStep, UseCaseForm, UseCaseVariant, VariantDetails, Wireframes,
};

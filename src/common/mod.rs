//! Common types and utilities shared by the builders and the serializer.

pub mod color;
pub mod image_format;
pub mod unit;
pub mod xml;

pub use color::RGBColor;
pub use image_format::ImageFormat;
pub use xml::escape_xml;

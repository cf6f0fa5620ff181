//! Block builders.
//!
//! Small, independent constructors for the document IR: styled runs,
//! paragraphs, tables and images, plus the numbering registry and the ordered
//! asset resolver. None of them know which section they are building for.

pub mod image;
pub mod marker;
pub mod numbering;
pub mod paragraph;
pub mod resolver;
pub mod run;
pub mod table;

pub use image::{ImageBlockBuilder, ImageError, ImageRole};
pub use numbering::{NumberingError, NumberingRegistry};
pub use paragraph::ParagraphBuilder;
pub use resolver::{AssetSource, OrderedResolver, Resolved};
pub use run::StyledRunBuilder;
pub use table::{CellContent, TableBuilder};

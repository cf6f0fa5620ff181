/// Open Packaging Conventions (OPC) support.
///
/// The parts of a generated document are held in memory, referenced from
/// each other through relationship collections and written into a ZIP
/// container together with `[Content_Types].xml`.
pub mod constants;
pub mod pkgwriter;
pub mod rel;

pub use pkgwriter::{PackageWriter, rels_partname};
pub use rel::{Relationship, Relationships};

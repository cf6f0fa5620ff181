//! WordprocessingML writer.
//!
//! Consumes document blocks and produces the XML parts of a `.docx`
//! package. Each block type implements [`ToXml`]; the part being written
//! supplies a [`RelationshipMapper`] that hands out relationship ids for
//! embedded images and `w:numId` values for list instances.

mod doc;
mod image;
mod numbering;
mod package;
mod paragraph;
mod properties;
mod relmap;
mod run;
mod section;
mod style;
mod table;

pub use package::{DocumentParts, DocxPackage};
pub use properties::DocumentProperties;

use crate::ir::DocumentBlock;
use crate::ooxml::error::Result;
use relmap::RelationshipMapper;

/// Serialization of a block into the part currently being written.
pub(crate) trait ToXml {
    fn to_xml(&self, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()>;
}

impl ToXml for DocumentBlock {
    fn to_xml(&self, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()> {
        match self {
            Self::Paragraph(paragraph) => paragraph.to_xml(xml, rels),
            Self::Table(table) => table.to_xml(xml, rels),
            Self::Image(image) => image.to_xml(xml, rels),
        }
    }
}

/// Main document, header and footer parts.
use super::ToXml;
use super::relmap::RelationshipMapper;
use super::section::SectionProperties;
use crate::ir::DocumentBlock;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace as ns;
use std::fmt::Write as _;

/// Root element of one story part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Story {
    Document,
    Header,
    Footer,
}

impl Story {
    fn root(&self) -> &'static str {
        match self {
            Self::Document => "w:document",
            Self::Header => "w:hdr",
            Self::Footer => "w:ftr",
        }
    }
}

fn open_root(story: Story, xml: &mut String) -> Result<()> {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<{} xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}" xmlns:pic="{}">"#,
        story.root(),
        ns::WML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::DML_WORDPROCESSING_DRAWING,
        ns::DML_MAIN,
        ns::DML_PICTURE
    )?;
    Ok(())
}

fn write_blocks(
    blocks: &[DocumentBlock],
    xml: &mut String,
    rels: &mut RelationshipMapper<'_>,
) -> Result<()> {
    for block in blocks {
        block.to_xml(xml, rels)?;
    }
    Ok(())
}

/// `word/document.xml`: the body blocks followed by the section properties.
pub(crate) fn document_xml(
    blocks: &[DocumentBlock],
    section: &SectionProperties<'_>,
    rels: &mut RelationshipMapper<'_>,
) -> Result<String> {
    let mut xml = String::with_capacity(blocks.len() * 512 + 1024);
    open_root(Story::Document, &mut xml)?;
    xml.push_str("<w:body>");
    write_blocks(blocks, &mut xml, rels)?;
    section.to_xml(&mut xml)?;
    xml.push_str("</w:body></w:document>");
    Ok(xml)
}

/// `word/header1.xml` or `word/footer1.xml`.
pub(crate) fn story_xml(
    story: Story,
    blocks: &[DocumentBlock],
    rels: &mut RelationshipMapper<'_>,
) -> Result<String> {
    let mut xml = String::with_capacity(blocks.len() * 512 + 512);
    open_root(story, &mut xml)?;
    write_blocks(blocks, &mut xml, rels)?;
    // header and footer stories must hold at least one paragraph
    if !matches!(
        blocks.last(),
        Some(DocumentBlock::Paragraph(_) | DocumentBlock::Image(_))
    ) {
        xml.push_str("<w:p/>");
    }
    write!(xml, "</{}>", story.root())?;
    Ok(xml)
}

/// Table serialization.
use super::ToXml;
use super::relmap::RelationshipMapper;
use crate::ir::{Border, DocumentBlock, Table, TableCell};
use crate::ooxml::docx::format::AsWmlValue;
use crate::ooxml::error::Result;
use std::fmt::Write as _;

const BORDER_EDGES: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

fn write_borders(border: &Border, xml: &mut String) -> Result<()> {
    xml.push_str("<w:tblBorders>");
    for edge in BORDER_EDGES {
        write!(
            xml,
            "<w:{edge} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            border.style.as_wml(),
            border.size,
            border.color.to_hex()
        )?;
    }
    xml.push_str("</w:tblBorders>");
    Ok(())
}

fn write_cell(cell: &TableCell, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()> {
    xml.push_str("<w:tc><w:tcPr>");
    write!(xml, "<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", cell.width)?;
    if let Some(merge) = cell.vertical_merge {
        write!(xml, "<w:vMerge w:val=\"{}\"/>", merge.as_wml())?;
    }
    if let Some(shading) = cell.shading {
        write!(
            xml,
            "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
            shading.to_hex()
        )?;
    }
    xml.push_str("</w:tcPr>");

    for block in &cell.blocks {
        block.to_xml(xml, rels)?;
    }
    // a cell must end with a paragraph
    if !matches!(
        cell.blocks.last(),
        Some(DocumentBlock::Paragraph(_) | DocumentBlock::Image(_))
    ) {
        xml.push_str("<w:p/>");
    }

    xml.push_str("</w:tc>");
    Ok(())
}

impl ToXml for Table {
    fn to_xml(&self, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()> {
        xml.push_str("<w:tbl><w:tblPr>");
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>", self.total_width)?;
        write_borders(&self.border, xml)?;
        xml.push_str("<w:tblLayout w:type=\"fixed\"/>");
        xml.push_str("<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>");
        xml.push_str("</w:tblPr>");

        xml.push_str("<w:tblGrid>");
        for width in &self.column_widths {
            write!(xml, "<w:gridCol w:w=\"{width}\"/>")?;
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            xml.push_str("<w:tr>");
            if row.is_header {
                xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
            }
            for cell in &row.cells {
                write_cell(cell, xml, rels)?;
            }
            xml.push_str("</w:tr>");
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

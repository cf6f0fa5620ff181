/// Inline picture serialization.
use super::ToXml;
use super::relmap::RelationshipMapper;
use crate::common::escape_xml;
use crate::ir::ImageBlock;
use crate::ooxml::docx::format::AsWmlValue;
use crate::ooxml::error::Result;
use std::fmt::Write as _;

impl ToXml for ImageBlock {
    /// An image is written as its own paragraph holding one inline drawing.
    fn to_xml(&self, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()> {
        let (r_id, drawing_id) = rels.add_image(self);
        let width = self.width_emu;
        let height = self.height_emu;
        let desc = escape_xml(&self.description);
        let name = format!("Picture {drawing_id}");

        write!(
            xml,
            r#"<w:p><w:pPr><w:spacing w:before="0" w:after="0"/><w:jc w:val="{}"/></w:pPr><w:r>"#,
            self.alignment.as_wml()
        )?;
        write!(
            xml,
            r#"<w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{width}" cy="{height}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{drawing_id}" name="{name}" descr="{desc}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="{drawing_id}" name="{name}" descr="{desc}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{r_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{width}" cy="{height}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>"#
        )?;
        xml.push_str("</w:r></w:p>");
        Ok(())
    }
}

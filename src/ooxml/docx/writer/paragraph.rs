/// Paragraph serialization.
use super::ToXml;
use super::relmap::RelationshipMapper;
use super::run::write_run;
use crate::ir::Paragraph;
use crate::ooxml::docx::format::AsWmlValue;
use crate::ooxml::error::Result;
use std::fmt::Write as _;

impl ToXml for Paragraph {
    fn to_xml(&self, xml: &mut String, rels: &mut RelationshipMapper<'_>) -> Result<()> {
        xml.push_str("<w:p><w:pPr>");

        // child order follows the CT_PPr sequence
        if let Some(heading) = self.heading {
            write!(xml, "<w:pStyle w:val=\"{}\"/>", heading.style_id())?;
        }
        if self.keep_next {
            xml.push_str("<w:keepNext/>");
        }
        if let Some(numbering) = &self.numbering {
            let num_id = rels.num_id(numbering)?;
            write!(
                xml,
                "<w:numPr><w:ilvl w:val=\"{}\"/><w:numId w:val=\"{}\"/></w:numPr>",
                numbering.level, num_id
            )?;
        }
        if !self.tab_stops.is_empty() {
            xml.push_str("<w:tabs>");
            for stop in &self.tab_stops {
                write!(
                    xml,
                    "<w:tab w:val=\"{}\" w:pos=\"{}\"/>",
                    stop.alignment.as_wml(),
                    stop.position
                )?;
            }
            xml.push_str("</w:tabs>");
        }
        write!(
            xml,
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>",
            self.spacing.before, self.spacing.after
        )?;
        if let Some(indent) = self.indent {
            write!(
                xml,
                "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>",
                indent.left, indent.hanging
            )?;
        }
        if let Some(alignment) = self.alignment {
            write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_wml())?;
        }
        xml.push_str("</w:pPr>");

        for run in &self.runs {
            write_run(run, xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

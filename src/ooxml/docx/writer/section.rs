/// Section properties: page size, margins and header/footer references.
use crate::config::PageGeometry;
use crate::ooxml::error::Result;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub(crate) struct SectionProperties<'a> {
    pub page: &'a PageGeometry,
    pub header_id: Option<String>,
    pub footer_id: Option<String>,
}

impl SectionProperties<'_> {
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        if let Some(id) = &self.header_id {
            write!(xml, r#"<w:headerReference w:type="default" r:id="{id}"/>"#)?;
        }
        if let Some(id) = &self.footer_id {
            write!(xml, r#"<w:footerReference w:type="default" r:id="{id}"/>"#)?;
        }
        let page = self.page;
        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            page.page_width, page.page_height
        )?;
        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            page.margin_top,
            page.margin_right,
            page.margin_bottom,
            page.margin_left,
            page.header_distance,
            page.footer_distance
        )?;
        xml.push_str(r#"<w:cols w:space="720"/>"#);
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_references_and_geometry() {
        let page = PageGeometry::default();
        let section = SectionProperties {
            page: &page,
            header_id: Some("rId4".to_string()),
            footer_id: None,
        };
        let mut xml = String::new();
        section.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:headerReference w:type="default" r:id="rId4"/>"#));
        assert!(!xml.contains("footerReference"));
        assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));
        assert!(xml.contains(r#"w:left="1440""#));
    }
}

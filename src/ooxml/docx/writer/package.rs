/// Assembly of a complete `.docx` package from document blocks.
use super::doc::{Story, document_xml, story_xml};
use super::numbering::{NumberingInstances, numbering_xml};
use super::properties::{DocumentProperties, app_xml};
use super::relmap::{MediaStore, RelationshipMapper};
use super::section::SectionProperties;
use super::style::{settings_xml, styles_xml};
use crate::builder::numbering::NumberingRegistry;
use crate::config::{PageGeometry, Typography};
use crate::ir::DocumentBlock;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{PackageWriter, Relationships};

const DOCUMENT_PART: &str = "/word/document.xml";
const HEADER_PART: &str = "/word/header1.xml";
const FOOTER_PART: &str = "/word/footer1.xml";

/// Block lists of the three stories of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParts<'a> {
    pub body: &'a [DocumentBlock],
    /// Empty when the document has no running header
    pub header: &'a [DocumentBlock],
    /// Empty when the document has no running footer
    pub footer: &'a [DocumentBlock],
}

/// Serializes document blocks into `.docx` bytes.
///
/// # Examples
///
/// ```
/// use usecase_docgen::builder::{ParagraphBuilder, StyledRunBuilder};
/// use usecase_docgen::config::DocumentConfig;
/// use usecase_docgen::ir::DocumentBlock;
/// use usecase_docgen::ooxml::docx::{DocumentParts, DocxPackage};
///
/// let config = DocumentConfig::default();
/// let runs = StyledRunBuilder::new(config.typography.clone());
/// let body: Vec<DocumentBlock> = vec![ParagraphBuilder::new().run(runs.body("Hello")).build().into()];
///
/// let bytes = DocxPackage::new(&config.typography, &config.page)
///     .to_bytes(DocumentParts { body: &body, ..Default::default() })?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), usecase_docgen::ooxml::OoxmlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocxPackage<'a> {
    typography: &'a Typography,
    page: &'a PageGeometry,
    registry: NumberingRegistry,
    properties: DocumentProperties,
}

impl<'a> DocxPackage<'a> {
    pub fn new(typography: &'a Typography, page: &'a PageGeometry) -> Self {
        Self {
            typography,
            page,
            registry: NumberingRegistry::standard(),
            properties: DocumentProperties::default(),
        }
    }

    #[inline]
    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn to_bytes(&self, parts: DocumentParts<'_>) -> Result<Vec<u8>> {
        let mut media = MediaStore::default();
        let mut numbering = NumberingInstances::default();
        let mut writer = PackageWriter::new();

        let header = if parts.header.is_empty() {
            None
        } else {
            let mut rels = RelationshipMapper::new(&self.registry, &mut media, &mut numbering);
            let xml = story_xml(Story::Header, parts.header, &mut rels)?;
            Some((xml, rels.into_rels()))
        };
        let footer = if parts.footer.is_empty() {
            None
        } else {
            let mut rels = RelationshipMapper::new(&self.registry, &mut media, &mut numbering);
            let xml = story_xml(Story::Footer, parts.footer, &mut rels)?;
            Some((xml, rels.into_rels()))
        };

        let mut rels = RelationshipMapper::new(&self.registry, &mut media, &mut numbering);
        rels.add(rt::STYLES, "styles.xml");
        rels.add(rt::SETTINGS, "settings.xml");
        rels.add(rt::NUMBERING, "numbering.xml");
        let section = SectionProperties {
            page: self.page,
            header_id: header.as_ref().map(|_| rels.add(rt::HEADER, "header1.xml")),
            footer_id: footer.as_ref().map(|_| rels.add(rt::FOOTER, "footer1.xml")),
        };
        let document = document_xml(parts.body, &section, &mut rels)?;
        let document_rels = rels.into_rels();

        writer.add_part(DOCUMENT_PART, ct::WML_DOCUMENT_MAIN, document.into_bytes())?;
        writer.add_rels(DOCUMENT_PART, &document_rels)?;
        writer.add_part(
            "/word/styles.xml",
            ct::WML_STYLES,
            styles_xml(self.typography)?.into_bytes(),
        )?;
        writer.add_part("/word/settings.xml", ct::WML_SETTINGS, settings_xml().into_bytes())?;
        writer.add_part(
            "/word/numbering.xml",
            ct::WML_NUMBERING,
            numbering_xml(&self.registry, &numbering)?.into_bytes(),
        )?;

        for (partname, content_type, story) in [
            (HEADER_PART, ct::WML_HEADER, header),
            (FOOTER_PART, ct::WML_FOOTER, footer),
        ] {
            if let Some((xml, story_rels)) = story {
                writer.add_part(partname, content_type, xml.into_bytes())?;
                writer.add_rels(partname, &story_rels)?;
            }
        }

        for item in media.items() {
            writer.add_part(&item.partname, item.format.mime_type(), item.data.clone())?;
        }

        writer.add_part(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml().into_bytes(),
        )?;
        writer.add_part(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            app_xml().into_bytes(),
        )?;

        let mut package_rels = Relationships::new();
        package_rels.add(rt::OFFICE_DOCUMENT, "word/document.xml");
        package_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        package_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
        writer.add_rels("/", &package_rels)?;

        tracing::debug!(
            parts = writer.part_count(),
            media = media.items().len(),
            lists = numbering.len(),
            "docx package assembled"
        );
        writer.finish()
    }
}

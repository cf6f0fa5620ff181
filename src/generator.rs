//! End-to-end synthesis: form, blocks, `.docx` bytes.

use crate::assembler::assemble;
use crate::config::DocumentConfig;
use crate::error::Result;
use crate::form::UseCaseForm;
use crate::header_footer::{self, PageDecorations};
use crate::ir::{BlockCounts, DocumentBlock};
use crate::ooxml::docx::{DocumentParts, DocumentProperties, DocxPackage};
use rayon::prelude::*;

/// A generated document.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// `fileName` of the form with a `.docx` extension
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Body-level block counts of the assembled document
    pub counts: BlockCounts,
}

/// Core properties recorded in `docProps/core.xml`.
fn properties(form: &UseCaseForm, config: &DocumentConfig) -> DocumentProperties {
    DocumentProperties::new()
        .title(&format!("{} - {}", form.code.trim(), form.name.trim()))
        .subject(form.project_name.trim())
        .creator(&config.revision.responsible)
        .keywords(&format!("{}, {}", form.client_name.trim(), form.variant().label()))
}

/// Serialize already assembled blocks.
pub fn serialize(
    body: &[DocumentBlock],
    decorations: &PageDecorations,
    config: &DocumentConfig,
    properties: DocumentProperties,
) -> Result<Vec<u8>> {
    let bytes = DocxPackage::new(&config.typography, &config.page)
        .with_properties(properties)
        .to_bytes(DocumentParts {
            body,
            header: &decorations.header,
            footer: &decorations.footer,
        })?;
    Ok(bytes)
}

/// Validate `form`, assemble its sections and serialize the document.
pub fn generate_document(form: &UseCaseForm, config: &DocumentConfig) -> Result<GeneratedDocument> {
    let span = tracing::info_span!(
        "generate",
        code = %form.code,
        variant = ?form.variant()
    );
    let _enter = span.enter();

    form.validate()?;
    let body = assemble(form, config);
    let decorations = header_footer::compose(form, config);
    let bytes = serialize(&body, &decorations, config, properties(form, config))?;

    tracing::info!(bytes = bytes.len(), "document generated");
    Ok(GeneratedDocument {
        file_name: format!("{}.docx", form.file_name.trim()),
        counts: BlockCounts::of(&body),
        bytes,
    })
}

/// Generate the `.docx` bytes of one form.
pub fn generate(form: &UseCaseForm, config: &DocumentConfig) -> Result<Vec<u8>> {
    generate_document(form, config).map(|doc| doc.bytes)
}

/// Generate many forms in parallel. Results keep the order of `forms`, and a
/// failing form does not affect the others.
pub fn generate_batch(
    forms: &[UseCaseForm],
    config: &DocumentConfig,
) -> Vec<Result<GeneratedDocument>> {
    forms
        .par_iter()
        .map(|form| generate_document(form, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::titles;
    use crate::builder::image::png_bytes;
    use crate::error::Error;
    use crate::form::fixtures::{api_form, entity_form, service_form};
    use crate::form::{FormError, ImageSource};
    use crate::ooxml::docx::{DocumentSummary, InspectedBlock};

    fn config() -> DocumentConfig {
        DocumentConfig::default().with_logo_candidates(Vec::new())
    }

    #[test]
    fn test_round_trip_recovers_block_counts() {
        for form in [entity_form(), api_form(), service_form()] {
            let doc = generate_document(&form, &config()).unwrap();
            let summary = DocumentSummary::from_bytes(&doc.bytes).unwrap();
            assert_eq!(summary.counts(), doc.counts, "{}", form.code);
        }
    }

    #[test]
    fn test_round_trip_with_wireframes_and_test_cases() {
        let mut form = entity_form();
        form.generate_test_case = true;
        form.wireframes.search = Some(ImageSource::Inline(png_bytes(400, 300)));
        form.wireframes.form = Some(ImageSource::Inline(png_bytes(300, 600)));

        let doc = generate_document(&form, &config()).unwrap();
        assert_eq!(doc.counts.images, 2);

        let summary = DocumentSummary::from_bytes(&doc.bytes).unwrap();
        assert_eq!(summary.counts(), doc.counts);
        assert_eq!(
            summary.media,
            vec!["word/media/image1.png", "word/media/image2.png"]
        );
        assert!(summary.headings(2).contains(&titles::TEST_CASES));
    }

    #[test]
    fn test_package_structure() {
        let bytes = generate(&entity_form(), &config()).unwrap();
        let summary = DocumentSummary::from_bytes(&bytes).unwrap();

        assert_eq!(summary.title.as_deref(), Some("AB123 - Gestionar Usuarios"));
        assert_eq!(summary.headings(1), vec!["AB123 - GESTIONAR USUARIOS"]);
        assert_eq!(summary.headings(2).last(), Some(&titles::REVISION_HISTORY));

        // revision table is the last block and appears once
        let tables: Vec<_> = summary.tables().collect();
        assert_eq!(tables.len(), 1);
        assert!(matches!(summary.blocks.last(), Some(InspectedBlock::Table(_))));
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].columns, 4);

        let InspectedBlock::Table(header) = &summary.header[0] else {
            panic!("header should be a table");
        };
        assert_eq!(header.rows.len(), 2);
        assert_eq!(header.cell_text(0, 0), Some("LOGO"));
        assert_eq!(header.cell_text(1, 1), Some("Back Office"));
        assert!(summary.list_instances > 0);
    }

    fn document_xml(bytes: &[u8]) -> String {
        use std::io::Read;
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn test_multiline_description_uses_line_breaks() {
        let mut form = entity_form();
        form.description = "First paragraph of the description.\nSecond paragraph.".to_string();
        let doc = generate_document(&form, &config()).unwrap();

        let xml = document_xml(&doc.bytes);
        assert!(xml.contains(
            "First paragraph of the description.</w:t></w:r><w:r>"
        ));
        assert!(xml.contains("<w:br/>"));
        assert!(!xml.contains("description.\nSecond"));

        let summary = DocumentSummary::from_bytes(&doc.bytes).unwrap();
        assert!(
            summary
                .paragraphs()
                .any(|p| p.text == "Description: First paragraph of the description.\nSecond paragraph.")
        );
    }

    #[test]
    fn test_numbered_items_keep_their_levels() {
        let bytes = generate(&entity_form(), &config()).unwrap();
        let summary = DocumentSummary::from_bytes(&bytes).unwrap();
        let levels: Vec<u8> = summary.paragraphs().filter_map(|p| p.level).collect();
        assert!(levels.contains(&2));
        assert!(levels.iter().all(|l| *l <= 2));
    }

    #[test]
    fn test_invalid_form_fails_before_assembly() {
        let mut form = entity_form();
        form.code = "  ".to_string();
        assert!(matches!(
            generate(&form, &config()),
            Err(Error::Form(FormError::MissingField("code")))
        ));
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let mut broken = api_form();
        broken.name.clear();
        let forms = vec![entity_form(), broken, service_form()];

        let results = generate_batch(&forms, &config());
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().file_name,
            "AB123GestionarUsuarios.docx"
        );
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}

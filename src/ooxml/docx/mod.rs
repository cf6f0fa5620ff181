/// Word (.docx) document writing and inspection.
///
/// [`DocxPackage`] serializes document blocks into a complete package:
/// main document, header and footer stories, styles, list numbering,
/// settings, embedded media and core properties. [`DocumentSummary`] reads
/// a package back into its block structure.
///
/// # Example
///
/// ```rust
/// use usecase_docgen::builder::{ParagraphBuilder, StyledRunBuilder};
/// use usecase_docgen::config::DocumentConfig;
/// use usecase_docgen::ir::DocumentBlock;
/// use usecase_docgen::ir::HeadingRank;
/// use usecase_docgen::ooxml::docx::{DocumentParts, DocumentSummary, DocxPackage};
///
/// let config = DocumentConfig::default();
/// let runs = StyledRunBuilder::new(config.typography.clone());
/// let body: Vec<DocumentBlock> = vec![
///     ParagraphBuilder::new()
///         .run(runs.heading("Main flow", HeadingRank::Two))
///         .heading(HeadingRank::Two)
///         .build()
///         .into(),
/// ];
///
/// let bytes = DocxPackage::new(&config.typography, &config.page)
///     .to_bytes(DocumentParts { body: &body, ..Default::default() })?;
/// let summary = DocumentSummary::from_bytes(&bytes)?;
/// assert_eq!(summary.headings(2), vec!["Main flow"]);
/// # Ok::<(), usecase_docgen::ooxml::OoxmlError>(())
/// ```
pub(crate) mod format;
pub mod inspect;
pub mod writer;

pub use inspect::{DocumentSummary, InspectedBlock, InspectedParagraph, InspectedTable};
pub use writer::{DocumentParts, DocumentProperties, DocxPackage};

//! Section assembler.
//!
//! Turns a [`UseCaseForm`] into the ordered body blocks of the document. The
//! dispatcher [`assemble`] picks one function per variant; each of them
//! composes the shared sections in `common` with its own main and alternative
//! flows. Section order is fixed:
//!
//! 1. title, project information, description
//! 2. main flow, alternative flows
//! 3. business rules and special requirements, when present
//! 4. preconditions, postconditions
//! 5. wireframes (entity forms carrying images)
//! 6. test cases, when requested and at least one step exists
//! 7. revision history, exactly once and always last
//!
//! Assembly never fails. Missing optional data is omitted or replaced by a
//! canned sentence, and unreadable images become placeholders.

mod api;
mod common;
mod entity;
mod service;
mod test_cases;

pub use api::{DEFAULT_ERROR_CODES, assemble_api_sections, error_description};
pub use entity::assemble_entity_sections;
pub use service::assemble_service_sections;
pub use test_cases::infer_indent_level;

use crate::builder::numbering::NumberingRegistry;
use crate::builder::{ParagraphBuilder, StyledRunBuilder};
use crate::config::DocumentConfig;
use crate::form::{UseCaseForm, VariantDetails};
use crate::ir::{BlockCounts, DocumentBlock, HeadingRank, ListScheme, NumberingRef, Run};

/// Section headings, in document order.
pub mod titles {
    pub const PROJECT_INFORMATION: &str = "Project Information";
    pub const USE_CASE_DESCRIPTION: &str = "Use Case Description";
    pub const MAIN_FLOW: &str = "Main Flow";
    pub const ALTERNATIVE_FLOWS: &str = "Alternative Flows";
    pub const BUSINESS_RULES: &str = "Business Rules";
    pub const SPECIAL_REQUIREMENTS: &str = "Special Requirements";
    pub const PRECONDITIONS: &str = "Preconditions";
    pub const POSTCONDITIONS: &str = "Postconditions";
    pub const WIREFRAMES: &str = "Wireframes";
    pub const TEST_CASES: &str = "Test Cases";
    pub const REVISION_HISTORY: &str = "Revision History";
}

/// Assemble the body blocks of a form.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::assembler::assemble;
/// use usecase_docgen::config::DocumentConfig;
/// use usecase_docgen::form::UseCaseForm;
///
/// let form = UseCaseForm::from_json(r#"{
///     "useCaseType": "service",
///     "clientName": "Acme",
///     "projectName": "Payroll",
///     "code": "SRV01",
///     "name": "Import timesheets",
///     "fileName": "SRV01ImportTimesheets",
///     "description": "Imports the daily timesheet export",
///     "frequency": "Daily"
/// }"#)?;
/// let blocks = assemble(&form, &DocumentConfig::default());
/// assert!(blocks.last().unwrap().as_table().is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn assemble(form: &UseCaseForm, config: &DocumentConfig) -> Vec<DocumentBlock> {
    let blocks = match &form.details {
        VariantDetails::Entity(details) => assemble_entity_sections(form, details, config),
        VariantDetails::Api(details) => assemble_api_sections(form, details, config),
        VariantDetails::Service(details) => assemble_service_sections(form, details, config),
    };

    let counts = BlockCounts::of(&blocks);
    tracing::debug!(
        variant = %form.variant(),
        paragraphs = counts.paragraphs,
        tables = counts.tables,
        images = counts.images,
        "sections assembled"
    );
    blocks
}

/// One list in the document. Every list gets its own numbering instance so
/// its counter starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListId {
    scheme: ListScheme,
    instance: u32,
}

/// Accumulates the blocks of one document.
pub(crate) struct SectionWriter<'a> {
    config: &'a DocumentConfig,
    runs: StyledRunBuilder,
    registry: NumberingRegistry,
    blocks: Vec<DocumentBlock>,
    next_instance: u32,
}

impl<'a> SectionWriter<'a> {
    /// Indent step of literal sub-items, in twips.
    const LITERAL_STEP: u32 = 360;

    pub(crate) fn new(config: &'a DocumentConfig) -> Self {
        Self {
            config,
            runs: StyledRunBuilder::new(config.typography.clone()),
            registry: NumberingRegistry::standard(),
            blocks: Vec::new(),
            next_instance: 1,
        }
    }

    pub(crate) fn config(&self) -> &'a DocumentConfig {
        self.config
    }

    pub(crate) fn runs(&self) -> &StyledRunBuilder {
        &self.runs
    }

    pub(crate) fn push(&mut self, block: impl Into<DocumentBlock>) {
        self.blocks.push(block.into());
    }

    pub(crate) fn heading(&mut self, text: impl Into<String>, rank: HeadingRank) {
        let paragraph = ParagraphBuilder::new()
            .run(self.runs.heading(text, rank))
            .heading(rank)
            .build();
        self.push(paragraph);
    }

    /// Section heading, rank 2.
    pub(crate) fn section(&mut self, title: &str) {
        self.heading(title, HeadingRank::Two);
    }

    pub(crate) fn paragraph(&mut self, text: &str) {
        let runs = self.runs.body_lines(text);
        self.paragraph_runs(runs);
    }

    pub(crate) fn paragraph_runs(&mut self, runs: impl IntoIterator<Item = Run>) {
        let paragraph = ParagraphBuilder::new().runs(runs).build();
        self.push(paragraph);
    }

    /// `label: value` with a bold label. Lines of `value` are kept apart by
    /// line breaks.
    pub(crate) fn labeled(&self, label: &str, value: &str) -> Vec<Run> {
        let mut runs = vec![self.runs.bold(format!("{label}: "))];
        runs.extend(self.runs.body_lines(value));
        runs
    }

    /// Open a new list of `scheme`.
    pub(crate) fn list(&mut self, scheme: ListScheme) -> ListId {
        let id = ListId {
            scheme,
            instance: self.next_instance,
        };
        self.next_instance += 1;
        id
    }

    fn numbering(&self, list: ListId, level: u8) -> NumberingRef {
        debug_assert!(
            self.registry.level(list.scheme, level).is_ok(),
            "level {level} is not declared by {:?}",
            list.scheme
        );
        NumberingRef {
            scheme: list.scheme,
            level,
            instance: list.instance,
        }
    }

    pub(crate) fn item(&mut self, list: ListId, level: u8, text: impl Into<String>) {
        let run = self.runs.body(text);
        self.item_runs(list, level, [run]);
    }

    pub(crate) fn item_runs(&mut self, list: ListId, level: u8, runs: impl IntoIterator<Item = Run>) {
        let paragraph = ParagraphBuilder::new()
            .runs(runs)
            .numbering(self.numbering(list, level))
            .build();
        self.push(paragraph);
    }

    /// List item carrying form data, written exactly as entered.
    pub(crate) fn data_item(&mut self, list: ListId, level: u8, text: impl Into<String>) {
        let paragraph = ParagraphBuilder::new()
            .run(self.runs.body(text))
            .numbering(self.numbering(list, level))
            .keep_marker()
            .build();
        self.push(paragraph);
    }

    /// List item with a manual indent overriding the level metrics.
    pub(crate) fn item_indented(
        &mut self,
        list: ListId,
        level: u8,
        runs: impl IntoIterator<Item = Run>,
        left: u32,
        hanging: u32,
    ) {
        let paragraph = ParagraphBuilder::new()
            .runs(runs)
            .numbering(self.numbering(list, level))
            .indent(left, hanging)
            .build();
        self.push(paragraph);
    }

    /// Unnumbered sub-item whose marker is part of the text, indented
    /// `depth` steps below the list it belongs to.
    pub(crate) fn literal(&mut self, text: impl Into<String>, depth: u32) {
        let paragraph = ParagraphBuilder::new()
            .run(self.runs.body(text))
            .indent(Self::LITERAL_STEP * (depth + 1), 0)
            .spacing(0, 60)
            .build();
        self.push(paragraph);
    }

    /// Monospace example text, one paragraph per line.
    pub(crate) fn code_block(&mut self, text: &str, depth: u32) {
        for line in text.lines() {
            let paragraph = ParagraphBuilder::new()
                .run(self.runs.mono(line.to_string()))
                .indent(Self::LITERAL_STEP * (depth + 1), 0)
                .spacing(0, 0)
                .build();
            self.push(paragraph);
        }
    }

    /// Append the revision history and return the finished body.
    pub(crate) fn finish(mut self) -> Vec<DocumentBlock> {
        common::revision_history(&mut self);
        self.blocks
    }
}

/// Non-blank lines of free text, trimmed.
pub(crate) fn lines(text: Option<&str>) -> impl Iterator<Item = &str> {
    text.unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::ir::{DocumentBlock, HeadingRank, Paragraph};

    /// Texts of the rank 2 section headings, in order.
    pub(crate) fn section_titles(blocks: &[DocumentBlock]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(DocumentBlock::as_paragraph)
            .filter(|p| p.heading == Some(HeadingRank::Two))
            .map(Paragraph::text)
            .collect()
    }

    /// Blocks strictly between heading `title` and the next rank 2 heading.
    pub(crate) fn section<'a>(blocks: &'a [DocumentBlock], title: &str) -> &'a [DocumentBlock] {
        let is_heading = |b: &DocumentBlock| {
            b.as_paragraph()
                .is_some_and(|p| p.heading == Some(HeadingRank::Two))
        };
        let start = blocks
            .iter()
            .position(|b| is_heading(b) && b.as_paragraph().is_some_and(|p| p.text() == title))
            .unwrap_or_else(|| panic!("section {title:?} not found"))
            + 1;
        let end = blocks[start..]
            .iter()
            .position(is_heading)
            .map_or(blocks.len(), |offset| start + offset);
        &blocks[start..end]
    }

    pub(crate) fn paragraphs(blocks: &[DocumentBlock]) -> impl Iterator<Item = &Paragraph> {
        blocks.iter().filter_map(DocumentBlock::as_paragraph)
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::titles::*;
    use super::*;
    use crate::builder::image::png_bytes;
    use crate::form::fixtures::{api_form, entity_form, service_form};
    use crate::form::ImageSource;
    use proptest::prelude::*;

    const CORE_ORDER: [&str; 6] = [
        PROJECT_INFORMATION,
        USE_CASE_DESCRIPTION,
        MAIN_FLOW,
        ALTERNATIVE_FLOWS,
        PRECONDITIONS,
        POSTCONDITIONS,
    ];

    #[test]
    fn test_minimal_forms_follow_fixed_order() {
        let config = DocumentConfig::default();
        for form in [entity_form(), api_form()] {
            let blocks = assemble(&form, &config);
            let mut expected: Vec<&str> = CORE_ORDER.to_vec();
            expected.push(REVISION_HISTORY);
            assert_eq!(section_titles(&blocks), expected, "{}", form.variant());
        }
    }

    #[test]
    fn test_service_form_adds_synthesized_requirements_section() {
        let blocks = assemble(&service_form(), &DocumentConfig::default());
        let mut expected: Vec<&str> = CORE_ORDER.to_vec();
        let preconditions = expected.iter().position(|t| *t == PRECONDITIONS).unwrap();
        expected.insert(preconditions, SPECIAL_REQUIREMENTS);
        expected.push(REVISION_HISTORY);
        assert_eq!(section_titles(&blocks), expected);
    }

    #[test]
    fn test_full_entity_form_order() {
        let mut form = entity_form();
        form.business_rules = Some("Usernames are unique".to_string());
        form.special_requirements = Some("Response under 2 seconds".to_string());
        form.generate_test_case = true;
        form.wireframes.search = Some(ImageSource::Inline(png_bytes(64, 48)));

        let blocks = assemble(&form, &DocumentConfig::default());
        assert_eq!(
            section_titles(&blocks),
            vec![
                PROJECT_INFORMATION,
                USE_CASE_DESCRIPTION,
                MAIN_FLOW,
                ALTERNATIVE_FLOWS,
                BUSINESS_RULES,
                SPECIAL_REQUIREMENTS,
                PRECONDITIONS,
                POSTCONDITIONS,
                WIREFRAMES,
                TEST_CASES,
                REVISION_HISTORY,
            ]
        );
    }

    #[test]
    fn test_title_is_first_and_uppercase() {
        let blocks = assemble(&entity_form(), &DocumentConfig::default());
        let title = blocks[0].as_paragraph().unwrap();
        assert_eq!(title.heading, Some(HeadingRank::One));
        assert_eq!(title.text(), "AB123 - GESTIONAR USUARIOS");
    }

    #[test]
    fn test_list_instances_are_unique_per_list() {
        let blocks = assemble(&entity_form(), &DocumentConfig::default());
        let mut instances: Vec<(u32, ListScheme)> = paragraphs(&blocks)
            .filter_map(|p| p.numbering)
            .map(|n| (n.instance, n.scheme))
            .collect();
        instances.dedup();
        let mut ids: Vec<u32> = instances.iter().map(|(id, _)| *id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        // each list is contiguous and never reuses another list's instance
        assert_eq!(ids.len(), before);
    }

    fn revision_tables(blocks: &[DocumentBlock]) -> usize {
        blocks
            .iter()
            .filter_map(DocumentBlock::as_table)
            .filter(|t| t.cell_text(0, 0).as_deref() == Some("Date"))
            .count()
    }

    #[test]
    fn test_revision_history_last_for_every_variant() {
        let config = DocumentConfig::default();
        for form in [entity_form(), api_form(), service_form()] {
            let blocks = assemble(&form, &config);
            let table = blocks.last().and_then(DocumentBlock::as_table).unwrap();
            assert_eq!(table.row_count(), 2);
            assert_eq!(table.column_count(), 4);
            assert_eq!(revision_tables(&blocks), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_revision_history_once_and_last(
            filters in proptest::collection::vec("[A-Za-z ]{1,12}", 0..6),
            rules in proptest::option::of("[a-z\n ]{0,40}"),
            requirements in proptest::option::of("[a-z\n ]{0,40}"),
            generate in any::<bool>(),
        ) {
            let mut form = entity_form();
            if let VariantDetails::Entity(details) = &mut form.details {
                details.search_filters = filters;
            }
            form.business_rules = rules;
            form.special_requirements = requirements;
            form.generate_test_case = generate;

            let blocks = assemble(&form, &DocumentConfig::default());
            prop_assert_eq!(revision_tables(&blocks), 1);
            prop_assert!(blocks.last().and_then(DocumentBlock::as_table).is_some());
            let titles = section_titles(&blocks);
            prop_assert_eq!(titles.last().map(String::as_str), Some(REVISION_HISTORY));
            prop_assert_eq!(titles.iter().filter(|t| *t == REVISION_HISTORY).count(), 1);
        }
    }
}

/// Test case section.
use super::SectionWriter;
use super::titles::TEST_CASES;
use crate::builder::ParagraphBuilder;
use crate::builder::marker::{MarkerKind, detect};
use crate::form::{TestStep, UseCaseForm};
use crate::ir::ListScheme;

/// Indent per inferred precondition level, in twips.
const PRECONDITION_STEP: u32 = 360;
/// Status of every generated step; steps are written before execution.
const PENDING_STATUS: &str = "Pending";
/// Left indent of the labelled sub-bullets of a step.
const DETAIL_INDENT: u32 = 1080;
const DETAIL_HANGING: u32 = 360;

/// Nesting level of a precondition line, from 0 to 2.
///
/// Numeric leaders (`1.`) are level 0, letters (`a.`) level 1 and roman
/// numerals (`ii.`) level 2. Other lines nest by leading whitespace, two
/// columns per level, tabs counting four.
pub fn infer_indent_level(line: &str) -> u8 {
    match detect(line) {
        Some((MarkerKind::Numeric, _)) => 0,
        Some((MarkerKind::Letter, _)) => 1,
        Some((MarkerKind::Roman, _)) => 2,
        _ => {
            let columns: usize = line
                .chars()
                .take_while(|c| c.is_whitespace())
                .map(|c| if c == '\t' { 4 } else { 1 })
                .sum();
            (columns / 2).min(2) as u8
        }
    }
}

pub(crate) fn test_cases(w: &mut SectionWriter<'_>, form: &UseCaseForm) {
    if !form.generate_test_case {
        return;
    }
    let Some(test_case) = &form.test_case else {
        return;
    };
    if test_case.steps.is_empty() {
        return;
    }

    w.section(TEST_CASES);

    if let Some(objective) = test_case.objective.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let runs = w.labeled("Objective", objective);
        w.paragraph_runs(runs);
    }

    if let Some(preconditions) = test_case
        .preconditions
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        let label = [w.runs().bold("Preconditions:")];
        w.paragraph_runs(label);
        for line in preconditions.lines().filter(|l| !l.trim().is_empty()) {
            let level = infer_indent_level(line) as u32;
            let paragraph = ParagraphBuilder::new()
                .run(w.runs().body(line.trim()))
                .indent(PRECONDITION_STEP * level, 0)
                .spacing(0, 60)
                .build();
            w.push(paragraph);
        }
    }

    let list = w.list(ListScheme::Bullet);
    for step in &test_case.steps {
        let heading = [w.runs().bold(format!("Step {}", step.number))];
        w.item_runs(list, 0, heading);
        for (label, value) in step_details(step) {
            let runs = w.labeled(label, value);
            w.item_indented(list, 0, runs, DETAIL_INDENT, DETAIL_HANGING);
        }
    }
}

fn or_dash(value: &str) -> &str {
    match value.trim() {
        "" => "-",
        trimmed => trimmed,
    }
}

fn step_details(step: &TestStep) -> [(&'static str, &str); 5] {
    [
        ("Action", or_dash(&step.action)),
        ("Input data", or_dash(&step.input_data)),
        ("Expected result", or_dash(&step.expected_result)),
        ("Observations", or_dash(&step.observations)),
        ("Status", PENDING_STATUS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::testutil::*;
    use crate::assembler::{assemble, titles};
    use crate::config::DocumentConfig;
    use crate::form::fixtures::entity_form;
    use crate::ir::{Indent, Paragraph};

    #[test]
    fn test_infer_indent_level() {
        assert_eq!(infer_indent_level("1. Logged in"), 0);
        assert_eq!(infer_indent_level("a. As administrator"), 1);
        assert_eq!(infer_indent_level("ii. With the users permission"), 2);
        assert_eq!(infer_indent_level("i. Roman before letter"), 2);
        assert_eq!(infer_indent_level("plain"), 0);
        assert_eq!(infer_indent_level("  two spaces"), 1);
        assert_eq!(infer_indent_level("\tone tab"), 2);
        assert_eq!(infer_indent_level("          deep"), 2);
    }

    #[test]
    fn test_zero_steps_suppress_section() {
        let mut form = entity_form();
        form.generate_test_case = true;
        form.test_case.as_mut().unwrap().steps.clear();
        let blocks = assemble(&form, &DocumentConfig::default());
        assert!(!section_titles(&blocks).iter().any(|t| t == titles::TEST_CASES));
    }

    #[test]
    fn test_not_requested_suppresses_section() {
        let blocks = assemble(&entity_form(), &DocumentConfig::default());
        assert!(!section_titles(&blocks).iter().any(|t| t == titles::TEST_CASES));
    }

    #[test]
    fn test_steps_and_preconditions() {
        let mut form = entity_form();
        form.generate_test_case = true;
        let blocks = assemble(&form, &DocumentConfig::default());
        let body: Vec<&Paragraph> = paragraphs(section(&blocks, titles::TEST_CASES)).collect();

        assert_eq!(body[0].text(), "Objective: Verify user maintenance");
        assert_eq!(body[1].text(), "Preconditions:");
        assert_eq!(body[2].text(), "1. Logged in");
        assert_eq!(body[2].indent, Some(Indent { left: 0, hanging: 0 }));
        assert_eq!(body[3].text(), "a. As administrator");
        assert_eq!(body[3].indent, Some(Indent { left: 360, hanging: 0 }));

        let steps = &body[4..];
        // a heading and five details per step
        assert_eq!(steps.len(), 2 * 6);
        assert_eq!(steps[0].text(), "Step 1");
        assert_eq!(steps[1].text(), "Action: Open the users screen");
        assert_eq!(steps[2].text(), "Input data: -");
        assert_eq!(steps[3].text(), "Expected result: The search view is displayed");
        assert_eq!(steps[5].text(), "Status: Pending");
        assert_eq!(steps[1].indent, Some(Indent { left: 1080, hanging: 360 }));
        assert!(steps.iter().all(|p| p.numbering.unwrap().scheme == ListScheme::Bullet));
        assert_eq!(steps[6].text(), "Step 2");
    }

    #[test]
    fn test_multiline_step_fields_keep_line_breaks() {
        let mut form = entity_form();
        form.generate_test_case = true;
        let test_case = form.test_case.as_mut().unwrap();
        test_case.objective = Some("Create a user\nthen delete it".to_string());
        test_case.steps[0].expected_result = "Row added\nCounter updated".to_string();
        let blocks = assemble(&form, &DocumentConfig::default());
        let body: Vec<&Paragraph> = paragraphs(section(&blocks, titles::TEST_CASES)).collect();

        assert_eq!(body[0].text(), "Objective: Create a user\nthen delete it");
        assert!(
            body[0]
                .runs
                .iter()
                .any(|r| r.content == crate::ir::RunContent::LineBreak)
        );
        let expected = body
            .iter()
            .find(|p| p.text().starts_with("Expected result:"))
            .unwrap();
        assert_eq!(expected.text(), "Expected result: Row added\nCounter updated");
        assert_eq!(expected.runs.len(), 4);
    }
}

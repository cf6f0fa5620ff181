/// Scheduled service use cases.
use super::common::{self, Closing, ConditionDefaults};
use super::titles::{ALTERNATIVE_FLOWS, MAIN_FLOW};
use super::{SectionWriter, lines};
use crate::builder::marker::letter_label;
use crate::config::DocumentConfig;
use crate::form::{ServiceDetails, UseCaseForm};
use crate::ir::{DocumentBlock, ListScheme};

const DEFAULTS: ConditionDefaults = ConditionDefaults {
    preconditions: "The service is configured and its scheduled trigger is enabled.",
    postconditions: "The processed data is stored and the execution result is notified.",
};

pub(crate) const PATHS_REQUIREMENT: &str = "The file paths used by the service must be configurable.";
pub(crate) const CREDENTIALS_REQUIREMENT: &str =
    "The credentials of external systems must be configurable.";
pub(crate) const SCHEDULE_REQUIREMENT: &str =
    "The execution frequency and time of the service must be configurable.";

const ALTERNATIVES: [(&str, [&str; 2]); 3] = [
    (
        "File capture error",
        [
            "The service cannot read the configured input files.",
            "The error is logged and the execution is marked as failed.",
        ],
    ),
    (
        "External connection error",
        [
            "The service cannot connect to an external system.",
            "The connection is retried and the administrator is notified if it keeps failing.",
        ],
    ),
    (
        "Processing error",
        [
            "A record cannot be processed because of invalid data.",
            "The record is skipped, logged and reported in the execution summary.",
        ],
    ),
];

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Requirement lines implied by the configuration the form declares.
pub(crate) fn derived_requirements(details: &ServiceDetails) -> Vec<String> {
    let mut derived = Vec::new();
    if non_blank(&details.frequency).is_some() || non_blank(&details.execution_time).is_some() {
        derived.push(SCHEDULE_REQUIREMENT.to_string());
    }
    if non_blank(&details.configuration_paths).is_some() {
        derived.push(PATHS_REQUIREMENT.to_string());
    }
    if non_blank(&details.external_credentials).is_some() {
        derived.push(CREDENTIALS_REQUIREMENT.to_string());
    }
    derived
}

/// Body blocks of a service form.
pub fn assemble_service_sections(
    form: &UseCaseForm,
    details: &ServiceDetails,
    config: &DocumentConfig,
) -> Vec<DocumentBlock> {
    let mut w = SectionWriter::new(config);
    common::preamble(&mut w, form);
    main_flow(&mut w, details);
    alternative_flows(&mut w);
    common::closing(
        &mut w,
        form,
        Closing {
            derived_requirements: derived_requirements(details),
            defaults: &DEFAULTS,
            wireframes: false,
        },
    );
    w.finish()
}

fn main_flow(w: &mut SectionWriter<'_>, details: &ServiceDetails) {
    w.section(MAIN_FLOW);
    let list = w.list(ListScheme::Multilevel);

    let trigger = match (
        non_blank(&details.frequency),
        non_blank(&details.execution_time),
    ) {
        (Some(frequency), Some(time)) => format!(
            "Scheduled trigger: the service starts automatically ({frequency}) at {time}."
        ),
        (Some(frequency), None) => {
            format!("Scheduled trigger: the service starts automatically ({frequency}).")
        }
        (None, Some(time)) => format!("Scheduled trigger: the service starts automatically at {time}."),
        (None, None) => {
            "Scheduled trigger: the service starts automatically on its configured schedule."
                .to_string()
        }
    };
    w.item(list, 0, trigger);

    w.item(
        list,
        0,
        "Initialization: the service loads its configuration and prepares its resources.",
    );
    let paths: Vec<&str> = lines(details.configuration_paths.as_deref()).collect();
    if !paths.is_empty() {
        w.item(list, 1, format!("Configured paths: {}", paths.join(", ")));
    }
    if let Some(credentials) = non_blank(&details.external_credentials) {
        w.item(list, 1, format!("External credentials: {credentials}"));
    }

    w.item(
        list,
        0,
        "Data processing: the service reads, validates and transforms the input data.",
    );
    w.item(
        list,
        0,
        "Result notification: the service stores the results and notifies the execution outcome.",
    );
}

fn alternative_flows(w: &mut SectionWriter<'_>) {
    w.section(ALTERNATIVE_FLOWS);
    let list = w.list(ListScheme::Simple);
    for (title, explanation) in ALTERNATIVES {
        w.item(list, 0, title);
        for (index, line) in explanation.into_iter().enumerate() {
            w.literal(format!("{}. {line}", letter_label(index as u32 + 1)), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::testutil::*;
    use crate::assembler::{assemble, titles};
    use crate::form::VariantDetails;
    use crate::form::fixtures::service_form;
    use crate::ir::Paragraph;

    fn requirements(form: &UseCaseForm) -> Vec<String> {
        let blocks = assemble(form, &DocumentConfig::default());
        paragraphs(section(&blocks, titles::SPECIAL_REQUIREMENTS))
            .map(Paragraph::text)
            .collect()
    }

    fn details_mut(form: &mut UseCaseForm) -> &mut ServiceDetails {
        match &mut form.details {
            VariantDetails::Service(details) => details,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_frequency_only_synthesizes_one_line() {
        assert_eq!(requirements(&service_form()), vec![SCHEDULE_REQUIREMENT]);
    }

    #[test]
    fn test_user_lines_precede_derived_lines() {
        let mut form = service_form();
        form.special_requirements = Some("Runs under 10 minutes".to_string());
        let details = details_mut(&mut form);
        details.configuration_paths = Some("/data/in\n/data/out".to_string());
        details.external_credentials = Some("SFTP user and key".to_string());
        assert_eq!(
            requirements(&form),
            vec![
                "Runs under 10 minutes",
                SCHEDULE_REQUIREMENT,
                PATHS_REQUIREMENT,
                CREDENTIALS_REQUIREMENT,
            ]
        );
    }

    #[test]
    fn test_no_configuration_no_requirements_section() {
        let mut form = service_form();
        details_mut(&mut form).frequency = None;
        let blocks = assemble(&form, &DocumentConfig::default());
        assert!(
            !section_titles(&blocks)
                .iter()
                .any(|t| t == titles::SPECIAL_REQUIREMENTS)
        );
    }

    #[test]
    fn test_initialization_lists_paths_and_credentials() {
        let mut form = service_form();
        let details = details_mut(&mut form);
        details.execution_time = Some("02:00".to_string());
        details.configuration_paths = Some("/data/in".to_string());
        let blocks = assemble(&form, &DocumentConfig::default());
        let flow: Vec<&Paragraph> = paragraphs(section(&blocks, titles::MAIN_FLOW)).collect();
        assert_eq!(
            flow[0].text(),
            "Scheduled trigger: the service starts automatically (Daily) at 02:00."
        );
        assert_eq!(flow[2].text(), "Configured paths: /data/in");
        assert_eq!(flow[2].numbering.unwrap().level, 1);
        assert_eq!(
            flow.iter()
                .filter(|p| p.numbering.map(|n| n.level) == Some(0))
                .count(),
            4
        );
    }

    #[test]
    fn test_three_alternative_flows_with_two_lines() {
        let blocks = assemble(&service_form(), &DocumentConfig::default());
        let flows: Vec<&Paragraph> = paragraphs(section(&blocks, titles::ALTERNATIVE_FLOWS)).collect();
        assert_eq!(flows.len(), 9);
        let items: Vec<String> = flows
            .iter()
            .filter(|p| p.numbering.is_some())
            .map(|p| p.text())
            .collect();
        assert_eq!(
            items,
            vec!["File capture error", "External connection error", "Processing error"]
        );
    }
}

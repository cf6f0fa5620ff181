/// Entity maintenance use cases: search, add, modify and delete records.
use super::common::{self, Closing, ConditionDefaults};
use super::titles::{ALTERNATIVE_FLOWS, MAIN_FLOW};
use super::SectionWriter;
use crate::builder::marker::{letter_label, roman_label};
use crate::config::DocumentConfig;
use crate::form::{EntityDetails, EntityField, UseCaseForm};
use crate::ir::{DocumentBlock, ListScheme};

const DEFAULTS: ConditionDefaults = ConditionDefaults {
    preconditions: "The user is authenticated and has permission to manage the records.",
    postconditions: "The changes to the records are stored and registered in the audit trail.",
};

const SEARCH_ITEM: &str = "Search existing records";
const FILTERS_HEADER: &str = "The user can filter the search by:";
const COLUMNS_HEADER: &str = "The results grid shows the columns:";
const ADD_ITEM: &str = "Add a new record with the fields:";
const CREATION_AUDIT: &str =
    "The system records the creation date and the user who created the record.";

/// Body blocks of an entity form.
pub fn assemble_entity_sections(
    form: &UseCaseForm,
    details: &EntityDetails,
    config: &DocumentConfig,
) -> Vec<DocumentBlock> {
    let mut w = SectionWriter::new(config);
    common::preamble(&mut w, form);
    main_flow(&mut w, details);
    alternative_flows(&mut w, details);
    common::closing(
        &mut w,
        form,
        Closing {
            derived_requirements: Vec::new(),
            defaults: &DEFAULTS,
            wireframes: true,
        },
    );
    w.finish()
}

/// `Username (Text, length 50) - Mandatory`. Boolean fields never show a length.
pub(crate) fn describe_field(field: &EntityField) -> String {
    let presence = if field.mandatory {
        "Mandatory"
    } else {
        "Optional"
    };
    match field.effective_length() {
        Some(length) => format!(
            "{} ({}, length {}) - {}",
            field.name,
            field.field_type.label(),
            length,
            presence
        ),
        None => format!("{} ({}) - {}", field.name, field.field_type.label(), presence),
    }
}

fn main_flow(w: &mut SectionWriter<'_>, details: &EntityDetails) {
    w.section(MAIN_FLOW);
    let list = w.list(ListScheme::Multilevel);

    w.item(list, 0, SEARCH_ITEM);
    for (header, entries) in [
        (FILTERS_HEADER, &details.search_filters),
        (COLUMNS_HEADER, &details.result_columns),
    ] {
        if entries.is_empty() {
            continue;
        }
        w.item(list, 1, header);
        for entry in entries {
            w.data_item(list, 2, entry.as_str());
        }
    }

    w.item(list, 0, ADD_ITEM);
    for field in &details.entity_fields {
        w.data_item(list, 1, describe_field(field));
    }
    w.item(list, 1, CREATION_AUDIT);
}

fn alternative_flows(w: &mut SectionWriter<'_>, details: &EntityDetails) {
    w.section(ALTERNATIVE_FLOWS);
    let list = w.list(ListScheme::Simple);

    // sub-items are literal text, the Simple scheme has a single level
    w.item(list, 0, "Modify an existing record");
    let modify = [
        "The system shows the record identifier as read-only.",
        "The user can modify the following fields:",
        "The system shows the creation and last modification timestamps.",
        "The system records the modification date and the user who performed it.",
    ];
    for (index, line) in modify.into_iter().enumerate() {
        w.literal(format!("{}. {line}", letter_label(index as u32 + 1)), 1);
        if index == 1 {
            for (n, field) in details.entity_fields.iter().enumerate() {
                w.literal(
                    format!("{}. {}", roman_label(n as u32 + 1), describe_field(field)),
                    2,
                );
            }
        }
    }

    w.item(list, 0, "Delete a record");
    let delete = [
        "The system verifies that the record has no relations with other entities.",
        "If relations exist, the system warns the user and cancels the deletion.",
        "Otherwise the system asks for confirmation and deletes the record.",
    ];
    for (index, line) in delete.into_iter().enumerate() {
        w.literal(format!("{}. {line}", letter_label(index as u32 + 1)), 1);
    }
}

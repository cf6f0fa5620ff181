/// Sections shared by every variant.
use super::titles::*;
use super::{SectionWriter, lines, test_cases};
use crate::builder::image::{ImageBlockBuilder, ImageRole};
use crate::builder::resolver::{OrderedResolver, Resolved};
use crate::builder::TableBuilder;
use crate::form::{UseCaseForm, Wireframes};
use crate::ir::{HeadingRank, ListScheme};

/// Width of the revision history table in twips.
pub(crate) const REVISION_TABLE_WIDTH: u32 = 3125;
/// Column widths of the revision history table in twips.
pub(crate) const REVISION_COLUMNS: [u32; 4] = [700, 750, 750, 925];
const REVISION_HEADER: [&str; 4] = ["Date", "Action", "Responsible", "Comment"];

/// Sentences used when the form has no preconditions or postconditions.
pub(crate) struct ConditionDefaults {
    pub(crate) preconditions: &'static str,
    pub(crate) postconditions: &'static str,
}

/// Variant input to the sections that follow the flows.
pub(crate) struct Closing<'f> {
    /// Special requirement lines derived from the form, after the user's own
    pub(crate) derived_requirements: Vec<String>,
    pub(crate) defaults: &'f ConditionDefaults,
    /// Emit the wireframes section when images are present
    pub(crate) wireframes: bool,
}

/// Title, project information and description.
pub(crate) fn preamble(w: &mut SectionWriter<'_>, form: &UseCaseForm) {
    w.heading(
        format!("{} - {}", form.code.trim(), form.name.trim()).to_uppercase(),
        HeadingRank::One,
    );

    w.section(PROJECT_INFORMATION);
    let list = w.list(ListScheme::Bullet);
    for (label, value) in [
        ("Client", &form.client_name),
        ("Project", &form.project_name),
        ("Code", &form.code),
        ("File", &form.file_name),
    ] {
        w.item_runs(list, 0, w.labeled(label, value));
    }

    w.section(USE_CASE_DESCRIPTION);
    let list = w.list(ListScheme::Bullet);
    w.item_runs(list, 0, w.labeled("Name", &form.name));
    w.item_runs(list, 0, w.labeled("Type", form.variant().label()));
    w.item_runs(list, 0, w.labeled("Description", &form.description));
}

/// Everything after the alternative flows, except the revision history.
pub(crate) fn closing(w: &mut SectionWriter<'_>, form: &UseCaseForm, closing: Closing<'_>) {
    business_rules(w, form);
    special_requirements(w, form, &closing.derived_requirements);
    conditions(w, form, closing.defaults);
    if closing.wireframes {
        wireframes(w, &form.wireframes);
    }
    test_cases::test_cases(w, form);
}

fn business_rules(w: &mut SectionWriter<'_>, form: &UseCaseForm) {
    let rules: Vec<&str> = lines(form.business_rules.as_deref()).collect();
    if rules.is_empty() {
        return;
    }
    w.section(BUSINESS_RULES);
    let list = w.list(ListScheme::Simple);
    for rule in rules {
        w.item(list, 0, rule);
    }
}

fn special_requirements(w: &mut SectionWriter<'_>, form: &UseCaseForm, derived: &[String]) {
    let requirements: Vec<&str> = lines(form.special_requirements.as_deref())
        .chain(derived.iter().map(String::as_str))
        .collect();
    if requirements.is_empty() {
        return;
    }
    w.section(SPECIAL_REQUIREMENTS);
    let list = w.list(ListScheme::Simple);
    for requirement in requirements {
        w.item(list, 0, requirement);
    }
}

fn conditions(w: &mut SectionWriter<'_>, form: &UseCaseForm, defaults: &ConditionDefaults) {
    for (title, text, fallback) in [
        (PRECONDITIONS, form.preconditions.as_deref(), defaults.preconditions),
        (POSTCONDITIONS, form.postconditions.as_deref(), defaults.postconditions),
    ] {
        w.section(title);
        let mut written = false;
        for line in lines(text) {
            w.paragraph(line);
            written = true;
        }
        if !written {
            w.paragraph(fallback);
        }
    }
}

fn wireframes(w: &mut SectionWriter<'_>, wireframes: &Wireframes) {
    if wireframes.is_empty() {
        return;
    }
    w.section(WIREFRAMES);

    for (label, source) in [
        ("Search view", &wireframes.search),
        ("Form view", &wireframes.form),
    ] {
        let Some(source) = source else {
            continue;
        };
        let label_runs = [w.runs().bold(label)];
        w.paragraph_runs(label_runs);

        let builder = ImageBlockBuilder::new(ImageRole::Wireframe).description(label);
        match OrderedResolver::new(std::slice::from_ref(source)).resolve(|data| builder.build(data)) {
            Resolved::Found { value, .. } => w.push(value),
            Resolved::Fallback { errors } => {
                for error in &errors {
                    tracing::warn!(wireframe = label, %error, "wireframe replaced by placeholder");
                }
                let placeholder = builder.placeholder(w.runs());
                w.push(placeholder);
            }
        }
    }
}

/// The closing 2x4 revision table.
pub(crate) fn revision_history(w: &mut SectionWriter<'_>) {
    w.section(REVISION_HISTORY);
    let revision = &w.config().revision;
    let table = TableBuilder::new(w.runs(), REVISION_TABLE_WIDTH, REVISION_COLUMNS.len())
        .column_weights(&REVISION_COLUMNS)
        .header_row()
        .row(REVISION_HEADER)
        .row([
            revision.resolved_date().format("%d/%m/%Y").to_string(),
            revision.action.clone(),
            revision.responsible.clone(),
            revision.comment.clone(),
        ])
        .build();
    w.push(table);
}

//! Sample forms shared by unit tests across the crate.

use super::types::*;

fn base(details: VariantDetails) -> UseCaseForm {
    UseCaseForm {
        client_name: "Acme Corp".to_string(),
        project_name: "Back Office".to_string(),
        code: "AB123".to_string(),
        name: "Gestionar Usuarios".to_string(),
        file_name: "AB123GestionarUsuarios".to_string(),
        description: "Allows administrators to maintain system users.".to_string(),
        business_rules: None,
        special_requirements: None,
        preconditions: None,
        postconditions: None,
        details,
        generate_test_case: false,
        test_case: None,
        wireframes: Wireframes::default(),
    }
}

/// Entity form with 2 filters, 3 columns and 4 fields, one of them boolean
/// with a stray length.
pub(crate) fn entity_form() -> UseCaseForm {
    let mut form = base(VariantDetails::Entity(EntityDetails {
        search_filters: vec!["Username".to_string(), "Status".to_string()],
        result_columns: vec![
            "Username".to_string(),
            "Full name".to_string(),
            "Created at".to_string(),
        ],
        entity_fields: vec![
            EntityField::new("Username", FieldType::Text)
                .with_length(50)
                .mandatory(true),
            EntityField::new("Email", FieldType::Email)
                .with_length(120)
                .mandatory(true),
            EntityField::new("Birth date", FieldType::Date),
            EntityField::new("Active", FieldType::Boolean)
                .with_length(1)
                .mandatory(true),
        ],
    }));
    let mut step = TestStep::new(1, "Open the users screen");
    step.expected_result = "The search view is displayed".to_string();
    form.test_case = Some(TestCase {
        objective: Some("Verify user maintenance".to_string()),
        preconditions: Some("1. Logged in\na. As administrator".to_string()),
        steps: vec![step, TestStep::new(2, "Create a user")],
    });
    form
}

pub(crate) fn api_form() -> UseCaseForm {
    let mut form = base(VariantDetails::Api(ApiDetails {
        endpoint: Some("/api/v1/invoices".to_string()),
        http_method: Some("POST".to_string()),
        request_format: None,
        response_format: None,
        error_codes: Vec::new(),
    }));
    form.code = "API01".to_string();
    form.name = "Register invoice".to_string();
    form.file_name = "API01RegisterInvoice".to_string();
    form
}

pub(crate) fn service_form() -> UseCaseForm {
    let mut form = base(VariantDetails::Service(ServiceDetails {
        frequency: Some("Daily".to_string()),
        execution_time: None,
        configuration_paths: None,
        external_credentials: None,
    }));
    form.code = "SRV01".to_string();
    form.name = "Import timesheets".to_string();
    form.file_name = "SRV01ImportTimesheets".to_string();
    form
}

/// Boundary validation of use-case forms.
use super::error::{FormError, Result};
use super::types::{UseCaseForm, VariantDetails};

impl UseCaseForm {
    /// Decode and validate a form from its JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let form: Self = serde_json::from_str(json)?;
        form.validate()?;
        Ok(form)
    }

    /// Check the shape invariants the section assembler relies on.
    ///
    /// Optional data is never checked here; absent sections are resolved by
    /// omission or defaults during assembly.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("clientName", &self.client_name),
            ("projectName", &self.project_name),
            ("code", &self.code),
            ("name", &self.name),
            ("fileName", &self.file_name),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        if let VariantDetails::Entity(entity) = &self.details {
            for (index, field) in entity.entity_fields.iter().enumerate() {
                if field.name.trim().is_empty() {
                    return Err(FormError::UnnamedEntityField { index });
                }
                if field.length == Some(0) {
                    return Err(FormError::InvalidFieldLength {
                        field: field.name.clone(),
                    });
                }
            }
        }

        if let Some(test_case) = &self.test_case {
            for (expected, step) in (1u32..).zip(&test_case.steps) {
                if step.number != expected {
                    return Err(FormError::NonSequentialStep {
                        expected,
                        found: step.number,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fixtures;
    use crate::form::{TestStep, UseCaseVariant};

    const SERVICE_JSON: &str = r#"{
        "useCaseType": "service",
        "clientName": "Acme",
        "projectName": "Payroll",
        "code": "SRV01",
        "name": "Import timesheets",
        "fileName": "SRV01ImportTimesheets",
        "description": "Imports the daily timesheets",
        "frequency": "Daily"
    }"#;

    #[test]
    fn test_parse_service_form() {
        let form = UseCaseForm::from_json(SERVICE_JSON).unwrap();
        assert_eq!(form.variant(), UseCaseVariant::Service);
        match &form.details {
            VariantDetails::Service(service) => {
                assert_eq!(service.frequency.as_deref(), Some("Daily"));
                assert!(service.configuration_paths.is_none());
            },
            other => panic!("unexpected details: {:?}", other),
        }
        assert!(!form.generate_test_case);
        assert!(form.wireframes.is_empty());
    }

    #[test]
    fn test_missing_discriminant_is_rejected() {
        let json = SERVICE_JSON.replace(r#""useCaseType": "service","#, "");
        assert!(matches!(
            UseCaseForm::from_json(&json),
            Err(FormError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_discriminant_is_rejected() {
        let json = SERVICE_JSON.replace(r#""service""#, r#""workflow""#);
        assert!(matches!(
            UseCaseForm::from_json(&json),
            Err(FormError::Parse(_))
        ));
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let json = r#"{
            "useCaseType": "entity",
            "clientName": "Acme", "projectName": "CRM", "code": "E1",
            "name": "Manage users", "fileName": "E1ManageUsers",
            "description": "CRUD of users",
            "entityFields": [{"name": "Age", "type": "number", "length": -3}]
        }"#;
        assert!(matches!(
            UseCaseForm::from_json(json),
            Err(FormError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut form = fixtures::entity_form();
        if let VariantDetails::Entity(entity) = &mut form.details {
            entity.entity_fields[0].length = Some(0);
        }
        assert!(matches!(
            form.validate(),
            Err(FormError::InvalidFieldLength { .. })
        ));
    }

    #[test]
    fn test_empty_required_field() {
        let mut form = fixtures::api_form();
        form.code = "   ".to_string();
        assert!(matches!(form.validate(), Err(FormError::MissingField("code"))));
    }

    #[test]
    fn test_non_sequential_steps() {
        let mut form = fixtures::entity_form();
        let test_case = form.test_case.as_mut().unwrap();
        test_case.steps = vec![TestStep::new(1, "Open"), TestStep::new(3, "Save")];
        assert!(matches!(
            form.validate(),
            Err(FormError::NonSequentialStep {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_payload_step_status_is_ignored() {
        let json = r#"{
            "useCaseType": "entity",
            "clientName": "Acme", "projectName": "CRM", "code": "E1",
            "name": "Manage users", "fileName": "E1ManageUsers",
            "description": "CRUD of users",
            "generateTestCase": true,
            "testCase": {"steps": [{"number": 1, "action": "Open", "status": "Passed"}]}
        }"#;
        let form = UseCaseForm::from_json(json).unwrap();
        let steps = &form.test_case.unwrap().steps;
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, "Open");
    }

    #[test]
    fn test_fixtures_are_valid() {
        fixtures::entity_form().validate().unwrap();
        fixtures::api_form().validate().unwrap();
        fixtures::service_form().validate().unwrap();
    }
}

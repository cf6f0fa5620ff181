/// Use-case form types.
///
/// The form is the single input aggregate of a synthesis call. It is
/// deserialized from the camelCase JSON payload produced by the form layer.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The discriminant selecting which section-generation branch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseCaseVariant {
    Entity,
    Api,
    Service,
}

impl UseCaseVariant {
    /// Human readable label used in the description section.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entity => "Entity management",
            Self::Api => "API",
            Self::Service => "Service",
        }
    }
}

impl fmt::Display for UseCaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete use-case form.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::form::{UseCaseForm, UseCaseVariant};
///
/// let form = UseCaseForm::from_json(r#"{
///     "useCaseType": "api",
///     "clientName": "Acme",
///     "projectName": "Billing",
///     "code": "API01",
///     "name": "Query invoices",
///     "fileName": "API01QueryInvoices",
///     "description": "Returns the invoices of a customer",
///     "endpoint": "/invoices",
///     "httpMethod": "GET"
/// }"#)?;
/// assert_eq!(form.variant(), UseCaseVariant::Api);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseForm {
    pub client_name: String,
    pub project_name: String,
    pub code: String,
    pub name: String,
    pub file_name: String,
    pub description: String,
    #[serde(default)]
    pub business_rules: Option<String>,
    #[serde(default)]
    pub special_requirements: Option<String>,
    #[serde(default)]
    pub preconditions: Option<String>,
    #[serde(default)]
    pub postconditions: Option<String>,
    /// Variant specific fields, tagged by `useCaseType`
    #[serde(flatten)]
    pub details: VariantDetails,
    #[serde(default)]
    pub generate_test_case: bool,
    #[serde(default)]
    pub test_case: Option<TestCase>,
    #[serde(default)]
    pub wireframes: Wireframes,
}

impl UseCaseForm {
    /// The active variant.
    pub fn variant(&self) -> UseCaseVariant {
        self.details.variant()
    }
}

/// Variant specific form data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "useCaseType", rename_all = "lowercase")]
pub enum VariantDetails {
    Entity(EntityDetails),
    Api(ApiDetails),
    Service(ServiceDetails),
}

impl VariantDetails {
    pub fn variant(&self) -> UseCaseVariant {
        match self {
            Self::Entity(_) => UseCaseVariant::Entity,
            Self::Api(_) => UseCaseVariant::Api,
            Self::Service(_) => UseCaseVariant::Service,
        }
    }
}

/// Fields of an entity-management use case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityDetails {
    pub search_filters: Vec<String>,
    pub result_columns: Vec<String>,
    pub entity_fields: Vec<EntityField>,
}

/// Fields of an API use case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiDetails {
    pub endpoint: Option<String>,
    pub http_method: Option<String>,
    pub request_format: Option<String>,
    pub response_format: Option<String>,
    pub error_codes: Vec<String>,
}

/// Fields of a scheduled service use case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDetails {
    pub frequency: Option<String>,
    pub execution_time: Option<String>,
    pub configuration_paths: Option<String>,
    #[serde(alias = "externalCredentialsDescriptor")]
    pub external_credentials: Option<String>,
}

/// Data type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "string")]
    Text,
    #[serde(alias = "integer", alias = "int")]
    Number,
    Decimal,
    Date,
    DateTime,
    #[serde(alias = "bool")]
    Boolean,
    Email,
    Phone,
    #[serde(other)]
    Other,
}

impl FieldType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Decimal => "Decimal",
            Self::Date => "Date",
            Self::DateTime => "Date/Time",
            Self::Boolean => "Boolean",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Other => "Other",
        }
    }
}

/// One field of the managed entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub mandatory: bool,
}

impl EntityField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            length: None,
            mandatory: false,
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Length as rendered; boolean fields never carry one.
    pub fn effective_length(&self) -> Option<u32> {
        match self.field_type {
            FieldType::Boolean => None,
            _ => self.length,
        }
    }
}

/// Test case block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCase {
    pub objective: Option<String>,
    pub preconditions: Option<String>,
    pub steps: Vec<TestStep>,
}

/// One step of a test case. Steps are generated before execution, so any
/// status in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub number: u32,
    pub action: String,
    #[serde(default)]
    pub input_data: String,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub observations: String,
}

impl TestStep {
    pub fn new(number: u32, action: impl Into<String>) -> Self {
        Self {
            number,
            action: action.into(),
            input_data: String::new(),
            expected_result: String::new(),
            observations: String::new(),
        }
    }
}

/// Where the bytes of an image come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// A file on disk.
    Path { path: PathBuf },
    /// Base64 text, optionally wrapped in a `data:` URL.
    Encoded(String),
    /// Raw image bytes.
    Inline(Vec<u8>),
}

/// Wireframe captures attached to an entity form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wireframes {
    pub search: Option<ImageSource>,
    pub form: Option<ImageSource>,
}

impl Wireframes {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.form.is_none()
    }
}

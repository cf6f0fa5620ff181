/// API endpoint use cases.
use super::common::{self, Closing, ConditionDefaults};
use super::titles::{ALTERNATIVE_FLOWS, MAIN_FLOW};
use super::SectionWriter;
use crate::builder::marker::letter_label;
use crate::config::DocumentConfig;
use crate::form::{ApiDetails, UseCaseForm};
use crate::ir::{DocumentBlock, ListScheme};
use phf::phf_map;

const DEFAULTS: ConditionDefaults = ConditionDefaults {
    preconditions: "The client application holds valid credentials to invoke the endpoint.",
    postconditions: "The request is processed and a response with the corresponding status code is returned.",
};

/// Error codes documented when the form lists none.
pub const DEFAULT_ERROR_CODES: [&str; 5] = ["400", "401", "403", "404", "500"];

static ERROR_DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "400" => "Bad Request: the request is malformed or fails validation",
    "401" => "Unauthorized: the credentials are missing or invalid",
    "403" => "Forbidden: the client is not allowed to perform the operation",
    "404" => "Not Found: the requested resource does not exist",
    "405" => "Method Not Allowed: the endpoint does not accept the HTTP method",
    "408" => "Request Timeout: the client did not complete the request in time",
    "409" => "Conflict: the request conflicts with the current state of the resource",
    "415" => "Unsupported Media Type: the payload format is not accepted",
    "422" => "Unprocessable Entity: the payload is well formed but semantically invalid",
    "429" => "Too Many Requests: the client exceeded the rate limit",
    "500" => "Internal Server Error: an unexpected failure occurred while processing",
    "502" => "Bad Gateway: an upstream service returned an invalid response",
    "503" => "Service Unavailable: the service is temporarily unable to handle requests",
    "504" => "Gateway Timeout: an upstream service did not respond in time",
};

/// Leading digits of a configured code, so `404 - missing` keys as `404`.
pub(crate) fn status_code(code: &str) -> &str {
    let code = code.trim();
    let end = code
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code.len());
    &code[..end]
}

/// Human readable description of an HTTP status code.
pub fn error_description(code: &str) -> &'static str {
    ERROR_DESCRIPTIONS
        .get(status_code(code))
        .copied()
        .unwrap_or("Unexpected error: the request could not be completed")
}

/// Body blocks of an API form.
pub fn assemble_api_sections(
    form: &UseCaseForm,
    details: &ApiDetails,
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
            wireframes: false,
        },
    );
    w.finish()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn main_flow(w: &mut SectionWriter<'_>, details: &ApiDetails) {
    w.section(MAIN_FLOW);
    let list = w.list(ListScheme::Multilevel);

    let method = non_blank(&details.http_method).map(str::to_uppercase);
    let initiation = match (method, non_blank(&details.endpoint)) {
        (Some(method), Some(endpoint)) => {
            format!("Request initiation: the client sends a {method} request to {endpoint}.")
        }
        (None, Some(endpoint)) => {
            format!("Request initiation: the client sends a request to {endpoint}.")
        }
        (Some(method), None) => format!(
            "Request initiation: the client sends a {method} request to the configured endpoint."
        ),
        (None, None) => {
            "Request initiation: the client sends a request to the configured endpoint.".to_string()
        }
    };
    w.item(list, 0, initiation);
    if let Some(example) = details.request_format.as_deref().filter(|s| !s.trim().is_empty()) {
        w.item(list, 1, "Request example:");
        w.code_block(example, 2);
    }

    w.item(
        list,
        0,
        "Validation: the system validates the credentials and the structure of the request.",
    );
    w.item(
        list,
        0,
        "Processing: the system executes the business logic associated with the endpoint.",
    );
    w.item(
        list,
        0,
        "Response: the system returns the result with the corresponding HTTP status code.",
    );
    if let Some(example) = details.response_format.as_deref().filter(|s| !s.trim().is_empty()) {
        w.item(list, 1, "Response example:");
        w.code_block(example, 2);
    }
}

fn alternative_flows(w: &mut SectionWriter<'_>, details: &ApiDetails) {
    w.section(ALTERNATIVE_FLOWS);
    let list = w.list(ListScheme::Simple);

    let configured: Vec<&str> = details
        .error_codes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    let codes: &[&str] = if configured.is_empty() {
        &DEFAULT_ERROR_CODES
    } else {
        &configured
    };

    for code in codes {
        let code = match status_code(code) {
            "" => *code,
            number => number,
        };
        let description = error_description(code);
        let summary = description.split(':').next().unwrap_or(description);
        w.item(list, 0, format!("Error {code} - {summary}"));
        let lines = [
            format!("Detection: {description}."),
            "Logging: the error is written to the application log with the request identifier."
                .to_string(),
            format!("Response: the API returns status {code} with a descriptive error message."),
        ];
        for (index, line) in lines.into_iter().enumerate() {
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
    use crate::form::fixtures::api_form;
    use crate::ir::Paragraph;

    fn error_items(form: &UseCaseForm) -> Vec<String> {
        let blocks = assemble(form, &DocumentConfig::default());
        paragraphs(section(&blocks, titles::ALTERNATIVE_FLOWS))
            .filter(|p| p.numbering.is_some())
            .map(Paragraph::text)
            .collect()
    }

    #[test]
    fn test_default_error_codes_in_order() {
        let items = error_items(&api_form());
        assert_eq!(
            items,
            vec![
                "Error 400 - Bad Request",
                "Error 401 - Unauthorized",
                "Error 403 - Forbidden",
                "Error 404 - Not Found",
                "Error 500 - Internal Server Error",
            ]
        );
    }

    #[test]
    fn test_configured_error_codes_replace_defaults() {
        let mut form = api_form();
        if let VariantDetails::Api(details) = &mut form.details {
            details.error_codes = vec![
                "409".to_string(),
                " ".to_string(),
                "418".to_string(),
                "404 - missing".to_string(),
            ];
        }
        let items = error_items(&form);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], "Error 409 - Conflict");
        assert_eq!(items[1], "Error 418 - Unexpected error");
        assert_eq!(items[2], "Error 404 - Not Found");
    }

    #[test]
    fn test_each_error_has_three_lines() {
        let blocks = assemble(&api_form(), &DocumentConfig::default());
        let flows: Vec<&Paragraph> = paragraphs(section(&blocks, titles::ALTERNATIVE_FLOWS)).collect();
        assert_eq!(flows.len(), 5 * 4);
        assert!(flows[1].text().starts_with("a. Detection:"));
        assert!(flows[2].text().starts_with("b. Logging:"));
        assert_eq!(
            flows[3].text(),
            "c. Response: the API returns status 400 with a descriptive error message."
        );
    }

    #[test]
    fn test_main_flow_mentions_method_and_endpoint() {
        let mut form = api_form();
        if let VariantDetails::Api(details) = &mut form.details {
            details.http_method = Some("post".to_string());
            details.request_format = Some("{\n  \"amount\": 10\n}".to_string());
        }
        let blocks = assemble(&form, &DocumentConfig::default());
        let flow: Vec<&Paragraph> = paragraphs(section(&blocks, titles::MAIN_FLOW)).collect();
        assert_eq!(
            flow[0].text(),
            "Request initiation: the client sends a POST request to /api/v1/invoices."
        );
        assert_eq!(flow[1].text(), "Request example:");
        assert_eq!(flow[2].runs[0].style.font_family, "Courier New");
        assert_eq!(flow[2].text(), "{");
        assert_eq!(flow.iter().filter(|p| p.numbering.map(|n| n.level) == Some(0)).count(), 4);
    }

    #[test]
    fn test_error_description_lookup() {
        assert!(error_description("404").starts_with("Not Found"));
        assert!(error_description(" 401 ").starts_with("Unauthorized"));
        assert!(error_description("999").starts_with("Unexpected error"));
        assert!(error_description("404 Not Found").starts_with("Not Found"));
        assert!(error_description("404 - missing").starts_with("Not Found"));
        assert!(error_description("4O4").starts_with("Unexpected error"));
        assert!(error_description("Timeout").starts_with("Unexpected error"));
    }

    #[test]
    fn test_status_code_takes_leading_digits() {
        assert_eq!(status_code(" 409 Conflict "), "409");
        assert_eq!(status_code("500"), "500");
        assert_eq!(status_code("E500"), "");
    }
}

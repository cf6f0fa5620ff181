//! Package metadata: `docProps/core.xml` and `docProps/app.xml`.

use crate::common::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    /// Comma separated
    pub keywords: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Generate `core.xml`. Creation and modification share one timestamp.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
        ];
        for (tag, value) in elements {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        }

        let stamp = self
            .created
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        for tag in ["dcterms:created", "dcterms:modified"] {
            xml.push_str(&format!(
                "<{tag} xsi:type=\"dcterms:W3CDTF\">{stamp}</{tag}>"
            ));
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Generate `app.xml`.
pub(crate) fn app_xml() -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str(concat!(
        "<Application>",
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION"),
        "</Application>"
    ));
    xml.push_str("<DocSecurity>0</DocSecurity></Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_properties_escape_and_stamp() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let xml = DocumentProperties::new()
            .title("AB123 - R&D")
            .creator("Systems Analyst")
            .created(created)
            .to_xml();
        assert!(xml.contains("<dc:title>AB123 - R&amp;D</dc:title>"));
        assert!(xml.contains("<dc:creator>Systems Analyst</dc:creator>"));
        assert!(!xml.contains("dc:subject"));
        assert_eq!(xml.matches("2026-03-01T09:30:00Z").count(), 2);
    }
}

//! Package writer for OPC packages.
//!
//! Collects part blobs in memory and serializes them, together with
//! `[Content_Types].xml`, into a ZIP container.

use crate::common::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Name of the content types part.
pub const CONTENT_TYPES_URI: &str = "[Content_Types].xml";

/// A part waiting to be written.
#[derive(Debug)]
struct PendingPart {
    partname: String,
    blob: Vec<u8>,
}

/// Builder for OPC packages (ZIP archives).
///
/// # Examples
///
/// ```
/// use usecase_docgen::ooxml::opc::constants::content_type as ct;
/// use usecase_docgen::ooxml::opc::PackageWriter;
///
/// let mut writer = PackageWriter::new();
/// writer.add_part("/word/document.xml", ct::WML_DOCUMENT_MAIN, b"<w:document/>".to_vec())?;
/// let bytes = writer.finish()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), usecase_docgen::ooxml::OoxmlError>(())
/// ```
#[derive(Debug)]
pub struct PackageWriter {
    parts: Vec<PendingPart>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            content_types: ContentTypesItem::new(),
        }
    }

    /// Add a part. `partname` is absolute (`/word/document.xml`).
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: Vec<u8>) -> Result<()> {
        if !partname.starts_with('/') {
            return Err(OoxmlError::InvalidFormat(format!(
                "partname must start with '/': {partname}"
            )));
        }
        if self.parts.iter().any(|p| p.partname == partname) {
            return Err(OoxmlError::InvalidFormat(format!(
                "duplicate partname: {partname}"
            )));
        }
        self.content_types.add_content_type(partname, content_type);
        self.parts.push(PendingPart {
            partname: partname.to_string(),
            blob,
        });
        Ok(())
    }

    /// Add the relationships of `source`, or of the package itself when
    /// `source` is `/`. Empty collections are skipped.
    pub fn add_rels(&mut self, source: &str, rels: &Relationships) -> Result<()> {
        if rels.is_empty() {
            return Ok(());
        }
        let partname = rels_partname(source);
        self.add_part(&partname, ct::OPC_RELATIONSHIPS, rels.to_xml().into_bytes())
    }

    /// Number of parts added so far.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package to bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(CONTENT_TYPES_URI, options)?;
        zip.write_all(self.content_types.to_xml().as_bytes())?;

        for part in &self.parts {
            zip.start_file(part.partname.trim_start_matches('/'), options)?;
            zip.write_all(&part.blob)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Partname of the `.rels` part belonging to `source`.
///
/// `/word/document.xml` maps to `/word/_rels/document.xml.rels` and the
/// package root `/` to `/_rels/.rels`.
pub fn rels_partname(source: &str) -> String {
    let (dir, file) = source.rsplit_once('/').unwrap_or(("", source));
    format!("{dir}/_rels/{file}.rels")
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
#[derive(Debug)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: HashMap<String, String>,

    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Use a default mapping for well-known extensions, otherwise an
    /// override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if Self::is_default_content_type(&ext, content_type) {
            self.defaults.insert(ext, content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
                | ("gif", ct::GIF)
                | ("bmp", ct::BMP)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        // sorted so the output is stable
        let mut exts: Vec<_> = self.defaults.iter().collect();
        exts.sort();
        for (ext, content_type) in exts {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
        }

        let mut partnames: Vec<_> = self.overrides.iter().collect();
        partnames.sort();
        for (partname, content_type) in partnames {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type("/word/media/image1.png", ct::PNG);
        cti.add_content_type("/word/document.xml", ct::WML_DOCUMENT_MAIN);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(!xml.contains(r#"PartName="/word/media/image1.png""#));
    }

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname("/"), "/_rels/.rels");
        assert_eq!(rels_partname("/word/document.xml"), "/word/_rels/document.xml.rels");
        assert_eq!(rels_partname("/word/header1.xml"), "/word/_rels/header1.xml.rels");
    }

    #[test]
    fn test_finish_writes_zip_with_content_types_first() {
        let mut writer = PackageWriter::new();
        writer
            .add_part("/word/document.xml", ct::WML_DOCUMENT_MAIN, b"<x/>".to_vec())
            .unwrap();
        assert!(
            writer
                .add_part("/word/document.xml", ct::WML_DOCUMENT_MAIN, Vec::new())
                .is_err()
        );
        assert!(writer.add_part("word/other.xml", ct::XML, Vec::new()).is_err());

        let bytes = writer.finish().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_URI);

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<x/>");
    }
}

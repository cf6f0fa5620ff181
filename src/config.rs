/// Configuration for document synthesis.
///
/// Everything that is a house-style constant rather than form data lives
/// here: fonts and sizes, page geometry, branding assets and the fixed
/// revision-history entries.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::config::DocumentConfig;
///
/// let config = DocumentConfig::new()
///     .with_font_family("Arial")
///     .with_brand_mark("ACME")
///     .with_logo_candidate("assets/logo.png");
/// assert_eq!(config.typography.font_family, "Arial");
/// ```
use crate::common::RGBColor;
use crate::common::unit::inches_to_twips;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML could not be decoded or encoded
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Fonts, sizes and colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Font family used for body text and headings
    pub font_family: String,
    /// Font family used for request/response examples
    pub mono_font_family: String,
    /// Body size in half-points
    pub body_size: u32,
    /// Heading sizes in half-points for ranks 1 to 4
    pub heading_sizes: [u32; 4],
    /// Colour of headings and the document title
    pub brand_color: RGBColor,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            mono_font_family: "Courier New".to_string(),
            body_size: 22,
            heading_sizes: [32, 28, 26, 24],
            brand_color: RGBColor::BRAND_BLUE,
        }
    }
}

/// Page geometry, all values in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    /// Distance of the header from the top edge
    pub header_distance: u32,
    /// Distance of the footer from the bottom edge
    pub footer_distance: u32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl PageGeometry {
    /// Width between the left and right margins.
    pub fn printable_width(&self) -> u32 {
        self.page_width
            .saturating_sub(self.margin_left + self.margin_right)
    }

    /// Set all four margins (in inches).
    pub fn margins(mut self, inches: f64) -> Self {
        let twips = inches_to_twips(inches);
        self.margin_top = twips;
        self.margin_bottom = twips;
        self.margin_left = twips;
        self.margin_right = twips;
        self
    }
}

/// Fixed content of the revision-history data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionDefaults {
    /// Date written in the row; today's local date when unset
    pub date: Option<NaiveDate>,
    pub action: String,
    pub responsible: String,
    pub comment: String,
}

impl Default for RevisionDefaults {
    fn default() -> Self {
        Self {
            date: None,
            action: "Original version".to_string(),
            responsible: "Systems Analyst".to_string(),
            comment: "Initial creation of the document".to_string(),
        }
    }
}

impl RevisionDefaults {
    /// The date to print, resolving an unset date to today.
    pub fn resolved_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Complete synthesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub typography: Typography,
    pub page: PageGeometry,
    /// Logo files tried in order; the first readable image wins
    pub logo_candidates: Vec<PathBuf>,
    /// Text printed in the header when no logo resolves
    pub brand_mark: String,
    /// Fixed title of the header table
    pub header_title: String,
    pub revision: RevisionDefaults,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            page: PageGeometry::default(),
            logo_candidates: vec![
                PathBuf::from("assets/logo.png"),
                PathBuf::from("assets/logo.jpg"),
            ],
            brand_mark: "LOGO".to_string(),
            header_title: "USE CASE SPECIFICATION".to_string(),
            revision: RevisionDefaults::default(),
        }
    }
}

impl DocumentConfig {
    /// Create a configuration with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Reject values that would produce an unreadable document.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typography.font_family.trim().is_empty() {
            return Err(ConfigError::Invalid("font family is empty".to_string()));
        }
        if self.typography.body_size == 0 || self.typography.heading_sizes.contains(&0) {
            return Err(ConfigError::Invalid("font sizes must be positive".to_string()));
        }
        if self.page.printable_width() == 0 {
            return Err(ConfigError::Invalid(
                "margins leave no printable width".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.typography.font_family = family.into();
        self
    }

    #[inline]
    pub fn with_brand_color(mut self, color: RGBColor) -> Self {
        self.typography.brand_color = color;
        self
    }

    #[inline]
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Replace the logo candidate list.
    #[inline]
    pub fn with_logo_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.logo_candidates = candidates;
        self
    }

    /// Append one logo candidate.
    #[inline]
    pub fn with_logo_candidate(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_candidates.push(path.into());
        self
    }

    #[inline]
    pub fn with_brand_mark(mut self, mark: impl Into<String>) -> Self {
        self.brand_mark = mark.into();
        self
    }

    #[inline]
    pub fn with_header_title(mut self, title: impl Into<String>) -> Self {
        self.header_title = title.into();
        self
    }

    /// Pin the revision date, mostly useful for reproducible output.
    #[inline]
    pub fn with_revision_date(mut self, date: NaiveDate) -> Self {
        self.revision.date = Some(date);
        self
    }

    #[inline]
    pub fn with_revision_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.revision.responsible = responsible.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.page.margin_left, 1440);
        assert_eq!(config.page.printable_width(), 9360);
        assert_eq!(config.typography.brand_color.to_hex(), "0070C0");
        assert_eq!(config.typography.heading_sizes, [32, 28, 26, 24]);
        config.validate().unwrap();
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let config = DocumentConfig::new()
            .with_font_family("Arial")
            .with_header_title("SPEC")
            .with_logo_candidates(Vec::new())
            .with_logo_candidate("a.png")
            .with_revision_date(date)
            .with_revision_responsible("QA");
        assert_eq!(config.typography.font_family, "Arial");
        assert_eq!(config.header_title, "SPEC");
        assert_eq!(config.logo_candidates, vec![PathBuf::from("a.png")]);
        assert_eq!(config.revision.resolved_date(), date);
        assert_eq!(config.revision.responsible, "QA");
    }

    #[test]
    fn test_yaml_partial_override() {
        let yaml = "brand_mark: ACME\ntypography:\n  font_family: Arial\n  brand_color: \"FF0000\"\n";
        let config = DocumentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.brand_mark, "ACME");
        assert_eq!(config.typography.font_family, "Arial");
        assert_eq!(config.typography.brand_color, RGBColor::new(255, 0, 0));
        assert_eq!(config.typography.body_size, 22);
        assert_eq!(config.page, PageGeometry::default());
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docgen.yaml");
        std::fs::write(&path, "header_title: CASE\n").unwrap();
        let config = DocumentConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.header_title, "CASE");
    }

    #[test]
    fn test_invalid_margins_rejected() {
        let config = DocumentConfig::new().with_page(PageGeometry::default().margins(5.0));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}

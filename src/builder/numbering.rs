/// Numbering scheme registry.
///
/// Declares the reusable list definitions that paragraphs reference through
/// [`NumberingRef`](crate::ir::NumberingRef). The registry is pure data; the
/// DOCX writer renders it into `word/numbering.xml`.
use crate::common::unit::inches_to_twips;
use crate::ir::ListScheme;
use thiserror::Error;

/// Errors raised by numbering lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberingError {
    /// Requested level is outside the levels declared by the scheme
    #[error("Scheme {scheme:?} declares {declared} level(s), level {level} requested")]
    SchemeLevelOverflow {
        scheme: ListScheme,
        level: u8,
        declared: usize,
    },
}

/// Glyph format of a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Decimal,
    LowerLetter,
    LowerRoman,
    Bullet,
}

impl NumberFormat {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::LowerLetter => "lowerLetter",
            Self::LowerRoman => "lowerRoman",
            Self::Bullet => "bullet",
        }
    }
}

/// Format and metrics of one list level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    pub format: NumberFormat,
    /// Level text, `%1.` style placeholders or a literal glyph
    pub text: &'static str,
    /// Left indent in twips
    pub indent_left: u32,
    /// Hanging indent in twips
    pub hanging: u32,
}

/// A named list scheme with its levels.
#[derive(Debug, Clone)]
pub struct SchemeDefinition {
    pub scheme: ListScheme,
    pub levels: Vec<LevelDefinition>,
}

/// Registry of the three list schemes used by generated documents.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::builder::numbering::{NumberFormat, NumberingRegistry};
/// use usecase_docgen::ir::ListScheme;
///
/// let registry = NumberingRegistry::standard();
/// let level = registry.level(ListScheme::Multilevel, 1)?;
/// assert_eq!(level.format, NumberFormat::LowerLetter);
/// assert_eq!(level.indent_left, 720);
/// assert!(registry.level(ListScheme::Multilevel, 3).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct NumberingRegistry {
    schemes: Vec<SchemeDefinition>,
}

/// Indent of level 0.
pub const INDENT_BASE: f64 = 0.25;
/// Additional indent per level, also the hanging indent.
pub const INDENT_STEP: f64 = 0.25;

impl NumberingRegistry {
    /// The standard registry: Multilevel, Bullet and Simple.
    pub fn standard() -> Self {
        let step = inches_to_twips(INDENT_STEP);
        let indent = |level: u32| inches_to_twips(INDENT_BASE) + level * step;

        let multilevel = [
            (NumberFormat::Decimal, "%1."),
            (NumberFormat::LowerLetter, "%2."),
            (NumberFormat::LowerRoman, "%3."),
        ]
        .into_iter()
        .zip(0u32..)
        .map(|((format, text), level)| LevelDefinition {
            format,
            text,
            indent_left: indent(level),
            hanging: step,
        })
        .collect();

        Self {
            schemes: vec![
                SchemeDefinition {
                    scheme: ListScheme::Multilevel,
                    levels: multilevel,
                },
                SchemeDefinition {
                    scheme: ListScheme::Bullet,
                    levels: vec![LevelDefinition {
                        format: NumberFormat::Bullet,
                        text: "\u{2022}",
                        indent_left: indent(0),
                        hanging: step,
                    }],
                },
                SchemeDefinition {
                    scheme: ListScheme::Simple,
                    levels: vec![LevelDefinition {
                        format: NumberFormat::Decimal,
                        text: "%1.",
                        indent_left: indent(0),
                        hanging: step,
                    }],
                },
            ],
        }
    }

    /// All scheme definitions in declaration order.
    pub fn schemes(&self) -> &[SchemeDefinition] {
        &self.schemes
    }

    /// Definition of a scheme.
    pub fn scheme(&self, scheme: ListScheme) -> &SchemeDefinition {
        // every ListScheme variant is registered by `standard`
        self.schemes
            .iter()
            .find(|s| s.scheme == scheme)
            .unwrap_or(&self.schemes[0])
    }

    /// Abstract numbering id of a scheme in `numbering.xml`.
    pub fn abstract_id(&self, scheme: ListScheme) -> u32 {
        self.schemes
            .iter()
            .position(|s| s.scheme == scheme)
            .unwrap_or(0) as u32
    }

    /// Number of levels a scheme declares.
    pub fn level_count(&self, scheme: ListScheme) -> usize {
        self.scheme(scheme).levels.len()
    }

    /// Glyph format and indentation metrics of `(scheme, level)`.
    pub fn level(&self, scheme: ListScheme, level: u8) -> Result<&LevelDefinition, NumberingError> {
        let definition = self.scheme(scheme);
        definition
            .levels
            .get(level as usize)
            .ok_or(NumberingError::SchemeLevelOverflow {
                scheme,
                level,
                declared: definition.levels.len(),
            })
    }
}

impl Default for NumberingRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

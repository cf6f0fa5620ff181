//! RGB colour handling shared by runs, borders and cell shading.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An RGB colour.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::common::RGBColor;
///
/// let blue = RGBColor::from_hex("#0070C0").unwrap();
/// assert_eq!(blue, RGBColor::BRAND_BLUE);
/// assert_eq!(blue.to_hex(), "0070C0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Brand colour used by every heading and by the document title.
    pub const BRAND_BLUE: Self = Self::new(0, 112, 192);
    /// Table border gray.
    pub const BORDER_GRAY: Self = Self::new(128, 128, 128);
    /// Light tint for table header rows.
    pub const HEADER_TINT: Self = Self::new(217, 226, 243);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a colour from a hex string such as `"FF0000"` or `"#FF0000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Uppercase hex form without `#`, as WordprocessingML expects it.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex colour '{raw}'")))
    }
}

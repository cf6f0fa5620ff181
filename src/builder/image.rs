/// Image block builder.
///
/// Decodes image input (file, base64 text or raw bytes), detects its format
/// and sizes it to fit the bounding box of its role while keeping the source
/// aspect ratio. Failures are reported as [`ImageError`] so callers can fall
/// back to [`ImageBlockBuilder::placeholder`].
use super::paragraph::ParagraphBuilder;
use super::run::StyledRunBuilder;
use crate::common::ImageFormat;
use crate::common::unit::inches_to_emu;
use crate::form::ImageSource;
use crate::ir::{Alignment, ImageBlock, Paragraph};
use base64::Engine as _;
use std::io::Cursor;
use thiserror::Error;

/// Errors raised while turning input into an image block.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image data is empty")]
    Empty,

    /// Signature is not PNG, JPEG, GIF or BMP
    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has zero width or height")]
    ZeroDimensions,
}

/// Where an image is placed, which determines its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// Header logo, at most 1.2in x 0.8in
    Logo,
    /// Wireframe screenshot, at most 3.25in x 4.5in
    Wireframe,
}

impl ImageRole {
    /// Bounding box `(width, height)` in inches.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Logo => (1.2, 0.8),
            Self::Wireframe => (3.25, 4.5),
        }
    }

    /// Bounding box `(width, height)` in EMUs.
    pub fn bounds_emu(&self) -> (i64, i64) {
        let (w, h) = self.bounds();
        (inches_to_emu(w), inches_to_emu(h))
    }
}

/// Decode base64 text, accepting an optional `data:<mime>;base64,` prefix and
/// embedded whitespace.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, ImageError> {
    let text = text.trim();
    let payload = match text.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, data)| data),
        None => text,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(base64::engine::general_purpose::STANDARD.decode(compact)?)
}

/// Read the raw bytes behind an image source.
pub fn load_source(source: &ImageSource) -> Result<Vec<u8>, ImageError> {
    let data = match source {
        ImageSource::Path { path } => std::fs::read(path)?,
        ImageSource::Encoded(text) => decode_base64(text)?,
        ImageSource::Inline(bytes) => bytes.clone(),
    };
    if data.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(data)
}

/// Scale pixel dimensions to fit `(max_width, max_height)` EMUs, keeping the
/// aspect ratio. Small images are scaled up to touch the box.
pub fn fit_to_box(
    width_px: u32,
    height_px: u32,
    (max_width, max_height): (i64, i64),
) -> Result<(i64, i64), ImageError> {
    if width_px == 0 || height_px == 0 {
        return Err(ImageError::ZeroDimensions);
    }
    let scale = f64::min(
        max_width as f64 / width_px as f64,
        max_height as f64 / height_px as f64,
    );
    let width = (width_px as f64 * scale).round() as i64;
    let height = (height_px as f64 * scale).round() as i64;
    Ok((width.clamp(1, max_width), height.clamp(1, max_height)))
}

/// Builds [`ImageBlock`]s for one role.
#[derive(Debug, Clone)]
pub struct ImageBlockBuilder {
    role: ImageRole,
    description: String,
    alignment: Alignment,
}

impl ImageBlockBuilder {
    pub fn new(role: ImageRole) -> Self {
        let description = match role {
            ImageRole::Logo => "Logo",
            ImageRole::Wireframe => "Wireframe",
        };
        Self {
            role,
            description: description.to_string(),
            alignment: Alignment::Center,
        }
    }

    pub fn role(&self) -> ImageRole {
        self.role
    }

    /// Alternative text of the image, also used in the placeholder.
    #[inline]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Build an image block from encoded image bytes.
    pub fn build(&self, data: Vec<u8>) -> Result<ImageBlock, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        let format = ImageFormat::detect_from_bytes(&data).ok_or(ImageError::UnsupportedFormat)?;
        let (width_px, height_px) = image::ImageReader::new(Cursor::new(&data))
            .with_guessed_format()?
            .into_dimensions()?;
        let (width_emu, height_emu) = fit_to_box(width_px, height_px, self.role.bounds_emu())?;

        Ok(ImageBlock {
            data,
            format,
            width_emu,
            height_emu,
            description: self.description.clone(),
            alignment: self.alignment,
        })
    }

    /// Load and build an image block from a form image source.
    pub fn from_source(&self, source: &ImageSource) -> Result<ImageBlock, ImageError> {
        self.build(load_source(source)?)
    }

    /// Italic paragraph standing in for an image that could not be built.
    pub fn placeholder(&self, runs: &StyledRunBuilder) -> Paragraph {
        ParagraphBuilder::new()
            .run(runs.italic(format!("[{} not available]", self.description)))
            .alignment(self.alignment)
            .build()
    }
}

/// Encode a solid PNG of the given size.
#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 200, 200]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::EMUS_PER_INCH;

    #[test]
    fn test_logo_fits_box_keeping_aspect() {
        let block = ImageBlockBuilder::new(ImageRole::Logo)
            .build(png_bytes(200, 100))
            .unwrap();
        assert_eq!(block.format, ImageFormat::Png);
        assert_eq!(block.width_emu, inches_to_emu(1.2));
        assert_eq!(block.height_emu, inches_to_emu(0.6));
    }

    #[test]
    fn test_tall_wireframe_is_height_bound() {
        let block = ImageBlockBuilder::new(ImageRole::Wireframe)
            .build(png_bytes(100, 400))
            .unwrap();
        assert_eq!(block.height_emu, inches_to_emu(4.5));
        let ratio = block.height_emu as f64 / block.width_emu as f64;
        assert!((ratio - 4.0).abs() < 1e-3);
        assert!(block.width_emu <= inches_to_emu(3.25));
    }

    #[test]
    fn test_fit_to_box_rejects_zero() {
        assert!(matches!(
            fit_to_box(0, 10, (EMUS_PER_INCH, EMUS_PER_INCH)),
            Err(ImageError::ZeroDimensions)
        ));
    }

    #[test]
    fn test_data_url_is_decoded() {
        let png = png_bytes(4, 4);
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        let url = format!("data:image/png;base64,{encoded}");
        assert_eq!(decode_base64(&url).unwrap(), png);
        assert_eq!(decode_base64(&encoded).unwrap(), png);

        let block = ImageBlockBuilder::new(ImageRole::Wireframe)
            .from_source(&ImageSource::Encoded(url))
            .unwrap();
        assert_eq!(block.data, png);
    }

    #[test]
    fn test_path_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.png");
        std::fs::write(&path, png_bytes(30, 20)).unwrap();
        let block = ImageBlockBuilder::new(ImageRole::Wireframe)
            .from_source(&ImageSource::Path { path })
            .unwrap();
        assert_eq!(block.format, ImageFormat::Png);
    }

    #[test]
    fn test_failures() {
        let builder = ImageBlockBuilder::new(ImageRole::Wireframe);
        assert!(matches!(builder.build(Vec::new()), Err(ImageError::Empty)));
        assert!(matches!(
            builder.build(b"not an image at all".to_vec()),
            Err(ImageError::UnsupportedFormat)
        ));
        assert!(matches!(
            builder.from_source(&ImageSource::Encoded("%%%".to_string())),
            Err(ImageError::Base64(_))
        ));
        assert!(matches!(
            builder.from_source(&ImageSource::Path {
                path: "/nonexistent/wireframe.png".into()
            }),
            Err(ImageError::Io(_))
        ));
    }

    #[test]
    fn test_placeholder() {
        let runs = StyledRunBuilder::default();
        let p = ImageBlockBuilder::new(ImageRole::Wireframe)
            .description("Search view")
            .placeholder(&runs);
        assert_eq!(p.text(), "[Search view not available]");
        assert!(p.runs[0].style.italic);
    }
}

/// Ordered asset resolution.
///
/// Candidates are tried in order and the first one that loads and builds
/// wins. Every failed attempt is logged; when nothing succeeds the caller gets
/// [`Resolved::Fallback`] and renders its own placeholder.
use super::image::{ImageError, load_source};
use crate::form::ImageSource;
use std::path::PathBuf;

/// Something that can produce raw asset bytes.
pub trait AssetSource {
    /// Short human readable name used in logs.
    fn label(&self) -> String;

    /// Read the asset.
    fn load(&self) -> Result<Vec<u8>, ImageError>;
}

impl AssetSource for PathBuf {
    fn label(&self) -> String {
        self.display().to_string()
    }

    fn load(&self) -> Result<Vec<u8>, ImageError> {
        load_source(&ImageSource::Path { path: self.clone() })
    }
}

impl AssetSource for ImageSource {
    fn label(&self) -> String {
        match self {
            Self::Path { path } => path.display().to_string(),
            Self::Encoded(_) => "encoded image".to_string(),
            Self::Inline(bytes) => format!("inline image ({} bytes)", bytes.len()),
        }
    }

    fn load(&self) -> Result<Vec<u8>, ImageError> {
        load_source(self)
    }
}

/// Outcome of an ordered resolution.
#[derive(Debug)]
pub enum Resolved<T> {
    /// A candidate succeeded
    Found {
        value: T,
        /// Position of the winning candidate
        index: usize,
    },
    /// Every candidate failed, or there were none
    Fallback {
        /// One error per attempted candidate
        errors: Vec<ImageError>,
    },
}

impl<T> Resolved<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Found { value, .. } => Some(value),
            Self::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Tries candidate sources in order.
pub struct OrderedResolver<'a, S: AssetSource> {
    candidates: &'a [S],
}

impl<'a, S: AssetSource> OrderedResolver<'a, S> {
    pub fn new(candidates: &'a [S]) -> Self {
        Self { candidates }
    }

    /// Load each candidate and pass its bytes to `build` until one succeeds.
    pub fn resolve<T, F>(&self, mut build: F) -> Resolved<T>
    where
        F: FnMut(Vec<u8>) -> Result<T, ImageError>,
    {
        let mut errors = Vec::new();
        for (index, candidate) in self.candidates.iter().enumerate() {
            match candidate.load().and_then(&mut build) {
                Ok(value) => {
                    tracing::debug!(source = %candidate.label(), index, "asset resolved");
                    return Resolved::Found { value, index };
                }
                Err(err) => {
                    tracing::debug!(source = %candidate.label(), error = %err, "asset candidate failed");
                    errors.push(err);
                }
            }
        }
        Resolved::Fallback { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::image::{ImageBlockBuilder, ImageRole, png_bytes};

    #[test]
    fn test_first_success_wins() {
        let dir = tempfile::tempdir().unwrap();
        let jpg = dir.path().join("logo.jpg");
        let png = dir.path().join("logo.png");
        std::fs::write(&png, png_bytes(40, 20)).unwrap();

        // the missing file is skipped, the PNG wins
        let candidates = vec![jpg, png];
        let builder = ImageBlockBuilder::new(ImageRole::Logo);
        match OrderedResolver::new(&candidates).resolve(|data| builder.build(data)) {
            Resolved::Found { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value.description, "Logo");
            }
            Resolved::Fallback { errors } => panic!("unexpected fallback: {errors:?}"),
        }
    }

    #[test]
    fn test_all_failures_fall_back() {
        let candidates = vec![
            ImageSource::Inline(b"garbage bytes here".to_vec()),
            ImageSource::Encoded("!!".to_string()),
        ];
        let builder = ImageBlockBuilder::new(ImageRole::Wireframe);
        let resolved = OrderedResolver::new(&candidates).resolve(|data| builder.build(data));
        assert!(resolved.is_fallback());
        match resolved {
            Resolved::Fallback { errors } => assert_eq!(errors.len(), 2),
            Resolved::Found { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_no_candidates() {
        let candidates: Vec<PathBuf> = Vec::new();
        let resolved = OrderedResolver::new(&candidates).resolve(Ok);
        assert!(resolved.into_value().is_none());
    }
}

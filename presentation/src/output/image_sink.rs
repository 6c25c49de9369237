//! Illustration output
//!
//! Inline illustrations are decoded and written as `page-<n>.<ext>` when an
//! output directory is configured. Placeholder URLs pass through untouched.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io;
use std::path::PathBuf;
use storybook_domain::ImageReference;
use tracing::debug;

/// What happened to one illustration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutput {
    /// Written to disk
    Saved(PathBuf),
    /// Decoded but not saved (no output directory)
    Inline { mime_type: String, bytes: usize },
    /// Placeholder or remote URL
    Remote(String),
}

pub struct ImageSink {
    dir: Option<PathBuf>,
}

impl ImageSink {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Handle the illustration for `page_number` (1-based).
    pub fn write(&self, page_number: usize, image: &ImageReference) -> io::Result<ImageOutput> {
        let (mime_type, data_base64) = match image {
            ImageReference::Url(url) => return Ok(ImageOutput::Remote(url.clone())),
            ImageReference::Inline {
                mime_type,
                data_base64,
            } => (mime_type, data_base64),
        };

        let bytes = STANDARD
            .decode(data_base64)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let Some(dir) = &self.dir else {
            return Ok(ImageOutput::Inline {
                mime_type: mime_type.clone(),
                bytes: bytes.len(),
            });
        };

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("page-{}.{}", page_number, extension(mime_type)));
        std::fs::write(&path, &bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(ImageOutput::Saved(path))
    }
}

fn extension(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_image_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(Some(dir.path().join("pictures")));

        let output = sink
            .write(3, &ImageReference::inline("image/jpeg", "QUJD"))
            .unwrap();

        let path = dir.path().join("pictures").join("page-3.jpg");
        assert_eq!(output, ImageOutput::Saved(path.clone()));
        assert_eq!(std::fs::read(path).unwrap(), b"ABC");
    }

    #[test]
    fn test_inline_without_directory_is_not_saved() {
        let sink = ImageSink::new(None);
        let output = sink
            .write(1, &ImageReference::inline("image/png", "QUJD"))
            .unwrap();
        assert_eq!(
            output,
            ImageOutput::Inline {
                mime_type: "image/png".into(),
                bytes: 3
            }
        );
    }

    #[test]
    fn test_placeholder_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(Some(dir.path().to_path_buf()));
        let placeholder = ImageReference::placeholder(42);

        let output = sink.write(1, &placeholder).unwrap();

        assert_eq!(output, ImageOutput::Remote(placeholder.to_uri()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let sink = ImageSink::new(None);
        let err = sink
            .write(1, &ImageReference::inline("image/jpeg", "not base64!"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}

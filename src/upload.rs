//! Uploaded image files and their transfer encoding.

use crate::error::UploadError;
use base64::{engine::general_purpose, Engine as _};
use std::io::Cursor;

/// A file as submitted by the browser, before validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// An accepted image: raw bytes plus the declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// Accepts `file` if its declared content type starts with `image/`.
    ///
    /// Only the declared type is checked; the bytes are not inspected.
    pub fn accept(file: UploadedFile) -> Result<Self, UploadError> {
        if !is_image_type(&file.content_type) {
            return Err(UploadError::NotAnImage {
                content_type: file.content_type,
            });
        }
        Ok(Self {
            file_name: file.file_name,
            mime_type: file.content_type,
            bytes: file.bytes,
        })
    }

    /// Base64 payload paired with the MIME type, ready for the wire.
    pub fn to_inline(&self) -> InlineImage {
        InlineImage {
            mime_type: self.mime_type.clone(),
            data: general_purpose::STANDARD.encode(&self.bytes),
        }
    }

    /// Pixel dimensions, when the bytes decode as a known format.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        image::io::Reader::new(Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

/// Transfer-safe textual form of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// True when `content_type` declares an image.
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    const TINY_PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn test_accepts_image_types() {
        for mime in ["image/png", "image/jpeg", "image/webp", "image/gif"] {
            let file = UploadedFile::new("x", mime, vec![1, 2, 3]);
            assert!(ImageInput::accept(file).is_ok(), "{mime} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["application/pdf", "text/plain", "", "IMAGE/PNG", "video/mp4"] {
            let file = UploadedFile::new("doc.pdf", mime, vec![1, 2, 3]);
            match ImageInput::accept(file) {
                Err(UploadError::NotAnImage { content_type }) => assert_eq!(content_type, mime),
                other => panic!("expected rejection for {mime:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_content_is_not_inspected() {
        // Declared type wins even when the bytes are not an image.
        let file = UploadedFile::new("fake.png", "image/png", b"not really a png".to_vec());
        let image = ImageInput::accept(file).unwrap();
        assert_eq!(image.dimensions(), None);
    }

    #[test]
    fn test_inline_encoding() {
        let file = UploadedFile::new("a.jpg", "image/jpeg", b"hello".to_vec());
        let inline = ImageInput::accept(file).unwrap().to_inline();
        assert_eq!(inline.mime_type, "image/jpeg");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn test_dimensions_of_png() {
        let png = general_purpose::STANDARD.decode(TINY_PNG_B64).unwrap();
        let file = UploadedFile::new("dot.png", "image/png", png);
        let image = ImageInput::accept(file).unwrap();
        assert_eq!(image.dimensions(), Some((1, 1)));
    }
}

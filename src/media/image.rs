// SPDX-License-Identifier: MPL-2.0
//! Photo validation and preview decoding.
//!
//! A selected photo is decoded once to validate it and produce the preview
//! handle; the original encoded bytes are kept alongside so the upload sends
//! exactly what the user picked.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;
use std::sync::Arc;

/// File extensions accepted by the photo picker.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// A validated photo: preview handle plus the encoded bytes for upload.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original encoded bytes, shared between preview and upload.
    bytes: Arc<Vec<u8>>,
    file_name: String,
}

impl ImageData {
    /// Decodes encoded image bytes (JPEG, PNG, etc.) into a preview handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the bytes are not a well-formed image.
    pub fn from_bytes(bytes: Vec<u8>, file_name: impl Into<String>) -> Result<Self> {
        let decoded = image_rs::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();

        let bytes = Arc::new(bytes);
        let handle = image::Handle::from_bytes(bytes.to_vec());
        Ok(Self {
            handle,
            width,
            height,
            bytes,
            file_name: file_name.into(),
        })
    }

    /// Returns the original encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the file name the photo was picked under.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Returns whether a path looks like a photo the picker accepts.
#[must_use]
pub fn is_photo_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Returns the MIME type for an accepted photo file name.
#[must_use]
pub fn mime_type(file_name: &str) -> &'static str {
    let extension = file_name.rsplit('.').next().unwrap_or("");
    if extension.eq_ignore_ascii_case("png") {
        "image/png"
    } else if extension.eq_ignore_ascii_case("webp") {
        "image/webp"
    } else if extension.eq_ignore_ascii_case("bmp") {
        "image/bmp"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn from_bytes_decodes_valid_png() {
        let data = ImageData::from_bytes(encoded_png(4, 2), "sample.png")
            .expect("png should decode successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.file_name(), "sample.png");
        assert!(!data.bytes().is_empty());
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        match ImageData::from_bytes(b"not an image".to_vec(), "bad.png") {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn is_photo_path_accepts_known_extensions() {
        assert!(is_photo_path(&PathBuf::from("dog.jpg")));
        assert!(is_photo_path(&PathBuf::from("cat.JPEG")));
        assert!(is_photo_path(&PathBuf::from("bird.png")));
        assert!(!is_photo_path(&PathBuf::from("notes.txt")));
        assert!(!is_photo_path(&PathBuf::from("no_extension")));
    }

    #[test]
    fn mime_type_matches_extension() {
        assert_eq!(mime_type("dog.jpg"), "image/jpeg");
        assert_eq!(mime_type("dog.jpeg"), "image/jpeg");
        assert_eq!(mime_type("dog.PNG"), "image/png");
        assert_eq!(mime_type("dog.webp"), "image/webp");
        assert_eq!(mime_type("dog.bmp"), "image/bmp");
    }
}

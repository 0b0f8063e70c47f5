// SPDX-License-Identifier: MPL-2.0
//! Photo intake for the report form.

pub mod image;

pub use image::{is_photo_path, mime_type, ImageData, PHOTO_EXTENSIONS};

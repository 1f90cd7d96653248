//! Upload request model and its multipart encoding

use crate::error::GenerateError;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of creatives requested per pack. Not user configurable.
pub const FIXED_COUNT: u32 = 10;
pub const DEFAULT_TONE: &str = "premium";
pub const DEFAULT_PRESET: &str = "B3";

/// Text inputs exactly as typed in the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormFields {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub preset: String,
}

/// One selected image, read fully into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(Path::new(&file_name));
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, GenerateError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| GenerateError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        Ok(Self::from_bytes(file_name, bytes))
    }
}

/// MIME type guessed from the file extension
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Fully resolved payload for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub logo: ImageUpload,
    pub product: ImageUpload,
    pub brand_name: String,
    pub tone: String,
    pub preset: String,
}

impl UploadRequest {
    /// Builds the payload, substituting defaults for empty fields
    pub fn new(logo: ImageUpload, product: ImageUpload, fields: &FormFields) -> Self {
        Self {
            logo,
            product,
            brand_name: fields.brand_name.clone(),
            tone: or_default(&fields.tone, DEFAULT_TONE),
            preset: or_default(&fields.preset, DEFAULT_PRESET),
        }
    }

    pub fn into_form(self) -> Result<Form, GenerateError> {
        let logo = Part::bytes(self.logo.bytes)
            .file_name(self.logo.file_name)
            .mime_str(self.logo.mime)?;
        let product = Part::bytes(self.product.bytes)
            .file_name(self.product.file_name)
            .mime_str(self.product.mime)?;

        Ok(Form::new()
            .part("logo", logo)
            .part("product", product)
            .text("brand_name", self.brand_name)
            .text("tone", self.tone)
            .text("preset", self.preset)
            .text("count", FIXED_COUNT.to_string()))
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

//! Local image previews, never touching the network

use crate::error::GenerateError;
use crate::request::mime_for;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Logo,
    Product,
}

impl std::fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSlot::Logo => write!(f, "logo"),
            ImageSlot::Product => write!(f, "product"),
        }
    }
}

/// The two file inputs of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSelection {
    pub logo: Option<PathBuf>,
    pub product: Option<PathBuf>,
}

impl ImageSelection {
    pub fn set(&mut self, slot: ImageSlot, path: Option<PathBuf>) {
        match slot {
            ImageSlot::Logo => self.logo = path,
            ImageSlot::Product => self.product = path,
        }
    }

    /// Both inputs, or `None` if either is empty
    pub fn complete(&self) -> Option<(&Path, &Path)> {
        match (&self.logo, &self.product) {
            (Some(logo), Some(product)) => Some((logo.as_path(), product.as_path())),
            _ => None,
        }
    }

    /// Selected files in form order (logo first)
    pub fn selected(&self) -> Vec<(ImageSlot, &Path)> {
        let mut files = Vec::with_capacity(2);
        if let Some(logo) = &self.logo {
            files.push((ImageSlot::Logo, logo.as_path()));
        }
        if let Some(product) = &self.product {
            files.push((ImageSlot::Product, product.as_path()));
        }
        files
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Preview {
    pub slot: ImageSlot,
    pub file_name: String,
    pub data_url: String,
}

pub async fn load_preview(slot: ImageSlot, path: &Path) -> Result<Preview, GenerateError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| GenerateError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Preview {
        slot,
        file_name,
        data_url: data_url(mime_for(path), &bytes),
    })
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

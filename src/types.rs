//! Event names and payloads emitted to the webview

use pack_client::{DownloadLink, ImageSlot, Preview};
use serde::Serialize;

pub const STATUS_EVENT: &str = "forge-status";
pub const PROGRESS_EVENT: &str = "forge-progress";
pub const PROGRESS_VISIBLE_EVENT: &str = "forge-progress-visible";
pub const SUBMIT_EVENT: &str = "forge-submit";
pub const PREVIEW_EVENT: &str = "forge-preview";
pub const DOWNLOAD_EVENT: &str = "forge-download";

/// Status line payload
#[derive(Debug, Clone, Serialize)]
pub struct StatusChanged {
    pub text: String,
    pub muted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressChanged {
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisibilityChanged {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitChanged {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewChanged {
    pub action: String, // "clear" | "add"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<ImageSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

impl PreviewChanged {
    pub fn clear() -> Self {
        Self {
            action: "clear".to_string(),
            slot: None,
            file_name: None,
            data_url: None,
        }
    }

    pub fn add(preview: &Preview) -> Self {
        Self {
            action: "add".to_string(),
            slot: Some(preview.slot),
            file_name: Some(preview.file_name.clone()),
            data_url: Some(preview.data_url.clone()),
        }
    }
}

/// Download link payload; `visible: false` hides the link
#[derive(Debug, Clone, Serialize)]
pub struct DownloadChanged {
    pub visible: bool,
    pub href: Option<String>,
    pub file_name: Option<String>,
    pub saved_to: Option<String>,
}

impl From<Option<&DownloadLink>> for DownloadChanged {
    fn from(link: Option<&DownloadLink>) -> Self {
        match link {
            Some(link) => Self {
                visible: true,
                href: Some(link.href.clone()),
                file_name: Some(link.file_name.clone()),
                saved_to: Some(link.saved_to.to_string_lossy().to_string()),
            },
            None => Self {
                visible: false,
                href: None,
                file_name: None,
                saved_to: None,
            },
        }
    }
}

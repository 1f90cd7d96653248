//! Upload-and-download controller for the creative pack generation service
//!
//! Collects a logo, a product shot and a few text fields, posts them as one
//! multipart request, and hands the returned ZIP to the user:
//! - Local data-URL previews of the selected images
//! - A single `POST /generate` with a fixed creative count
//! - Short-lived archive references released after a fixed delay
//! - Coarse progress reporting through the [`Surface`] trait

mod client;
mod config;
mod controller;
mod download;
mod error;
mod object_url;
mod preview;
mod request;
mod state;
mod surface;

pub use client::GenerationClient;
pub use config::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_REVOKE_AFTER, DOWNLOAD_DIR_ENV, ENDPOINT_ENV,
};
pub use controller::{Controller, SubmitOutcome};
pub use download::{save_archive, ARCHIVE_FILE_NAME};
pub use error::GenerateError;
pub use object_url::ObjectUrlStore;
pub use preview::{data_url, load_preview, ImageSelection, ImageSlot, Preview};
pub use request::{
    mime_for, FormFields, ImageUpload, UploadRequest, DEFAULT_PRESET, DEFAULT_TONE, FIXED_COUNT,
};
pub use state::UiState;
pub use surface::{DownloadLink, Surface};

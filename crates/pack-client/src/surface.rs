//! The form as seen by the controller
//!
//! Implementors map each call onto their own widgets (a webview, a test
//! recorder, ...). Calls arrive in the order the user would see them.

use crate::preview::Preview;
use serde::Serialize;
use std::path::PathBuf;

/// Download affordance bound to a short-lived archive reference
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DownloadLink {
    pub href: String,
    pub file_name: String,
    /// Where the automatic download landed
    pub saved_to: PathBuf,
}

pub trait Surface: Send + Sync {
    fn set_status(&self, text: &str, muted: bool);

    fn set_progress(&self, percent: u8);

    fn set_progress_visible(&self, visible: bool);

    fn set_submit_enabled(&self, enabled: bool);

    fn clear_previews(&self);

    fn add_preview(&self, preview: &Preview);

    /// `None` hides the download affordance
    fn show_download(&self, link: Option<&DownloadLink>);

    /// Blocking user notification
    fn notify(&self, message: &str);
}

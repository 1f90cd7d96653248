use crate::types::{
    DownloadChanged, PreviewChanged, ProgressChanged, StatusChanged, SubmitChanged,
    VisibilityChanged, DOWNLOAD_EVENT, PREVIEW_EVENT, PROGRESS_EVENT, PROGRESS_VISIBLE_EVENT,
    STATUS_EVENT, SUBMIT_EVENT,
};
use pack_client::{DownloadLink, Preview, Surface};
use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Drives the webview markup through events; notifications use native dialogs
pub struct TauriSurface {
    app: AppHandle,
}

impl TauriSurface {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit<T: serde::Serialize + Clone>(&self, event: &str, payload: T) {
        if let Err(e) = self.app.emit(event, payload) {
            log::warn!("Failed to emit {}: {}", event, e);
        }
    }
}

impl Surface for TauriSurface {
    fn set_status(&self, text: &str, muted: bool) {
        self.emit(
            STATUS_EVENT,
            StatusChanged {
                text: text.to_string(),
                muted,
            },
        );
    }

    fn set_progress(&self, percent: u8) {
        self.emit(PROGRESS_EVENT, ProgressChanged { percent });
    }

    fn set_progress_visible(&self, visible: bool) {
        self.emit(PROGRESS_VISIBLE_EVENT, VisibilityChanged { visible });
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.emit(SUBMIT_EVENT, SubmitChanged { enabled });
    }

    fn clear_previews(&self) {
        self.emit(PREVIEW_EVENT, PreviewChanged::clear());
    }

    fn add_preview(&self, preview: &Preview) {
        self.emit(PREVIEW_EVENT, PreviewChanged::add(preview));
    }

    fn show_download(&self, link: Option<&DownloadLink>) {
        self.emit(DOWNLOAD_EVENT, DownloadChanged::from(link));
    }

    fn notify(&self, message: &str) {
        // Called from async commands, never the main thread
        self.app
            .dialog()
            .message(message)
            .title("CreativeForge")
            .kind(MessageDialogKind::Warning)
            .blocking_show();
    }
}

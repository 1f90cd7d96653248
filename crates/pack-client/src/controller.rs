//! Per-submission state machine
//!
//! `idle -> validating -> (abort -> idle)` or
//! `validating -> uploading -> generating -> complete`, with any step after
//! validation able to end in `server_error` or `failed`. Whatever the end
//! state, the submit control is re-enabled and the progress bar hidden.

use crate::client::GenerationClient;
use crate::config::ClientConfig;
use crate::download::{save_archive, ARCHIVE_FILE_NAME};
use crate::error::GenerateError;
use crate::object_url::ObjectUrlStore;
use crate::preview::{load_preview, ImageSelection};
use crate::request::{FormFields, ImageUpload, UploadRequest};
use crate::state::UiState;
use crate::surface::{DownloadLink, Surface};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Precondition failed, nothing was sent
    Aborted,
    ServerError { status: u16, body: String },
    Failed { message: String },
    Complete { href: String, saved_to: PathBuf },
}

impl From<GenerateError> for SubmitOutcome {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::MissingFiles => SubmitOutcome::Aborted,
            GenerateError::Server { status, body } => SubmitOutcome::ServerError { status, body },
            other => SubmitOutcome::Failed {
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    client: GenerationClient,
    store: ObjectUrlStore,
    config: ClientConfig,
}

impl Controller {
    pub fn new(config: ClientConfig) -> Result<Self, GenerateError> {
        Ok(Self {
            client: GenerationClient::new(&config)?,
            store: ObjectUrlStore::new(),
            config,
        })
    }

    pub fn client(&self) -> &GenerationClient {
        &self.client
    }

    pub fn store(&self) -> &ObjectUrlStore {
        &self.store
    }

    /// Re-render previews for the current selection. Returns how many rendered.
    pub async fn refresh_previews<S: Surface>(&self, surface: &S, selection: &ImageSelection) -> usize {
        surface.clear_previews();

        let mut rendered = 0;
        for (slot, path) in selection.selected() {
            match load_preview(slot, path).await {
                Ok(preview) => {
                    surface.add_preview(&preview);
                    rendered += 1;
                }
                Err(e) => log::warn!("preview: skipping {}: {}", slot, e),
            }
        }
        rendered
    }

    pub async fn submit<S: Surface>(
        &self,
        surface: &S,
        selection: &ImageSelection,
        fields: &FormFields,
    ) -> SubmitOutcome {
        log::info!("submit: {} -> {}", UiState::Idle, UiState::Validating);
        let Some((logo, product)) = selection.complete() else {
            log::warn!("submit: {} -> {} (missing files)", UiState::Validating, UiState::Idle);
            surface.notify(&GenerateError::MissingFiles.to_string());
            return SubmitOutcome::Aborted;
        };

        surface.clear_previews();
        surface.show_download(None);
        surface.set_progress(0);
        surface.set_status(UiState::Idle.status_text(), false);

        let outcome = match self.run(surface, logo, product, fields).await {
            Ok(link) => SubmitOutcome::Complete {
                href: link.href,
                saved_to: link.saved_to,
            },
            Err(e) => {
                let notice = match &e {
                    GenerateError::Server { .. } => {
                        self.enter(surface, UiState::ServerError);
                        e.to_string()
                    }
                    _ => {
                        log::error!("submit: request failed: {}", e);
                        self.enter(surface, UiState::Failed);
                        format!("Request failed: {}", e)
                    }
                };
                surface.notify(&notice);
                SubmitOutcome::from(e)
            }
        };

        surface.set_submit_enabled(true);
        surface.set_progress_visible(false);
        outcome
    }

    async fn run<S: Surface>(
        &self,
        surface: &S,
        logo: &Path,
        product: &Path,
        fields: &FormFields,
    ) -> Result<DownloadLink, GenerateError> {
        let request = UploadRequest::new(
            ImageUpload::from_path(logo).await?,
            ImageUpload::from_path(product).await?,
            fields,
        );

        surface.set_submit_enabled(false);
        surface.set_progress_visible(true);
        self.enter(surface, UiState::Uploading);

        let archive = self.client.generate(request).await?;
        self.enter(surface, UiState::Generating);

        let href = self.store.create(archive);
        let saved_to = match self.save_again(&href).await {
            Ok(path) => path,
            Err(e) => {
                self.store.revoke(&href);
                return Err(e);
            }
        };
        log::info!("submit: archive saved to {}", saved_to.display());

        let link = DownloadLink {
            href: href.clone(),
            file_name: ARCHIVE_FILE_NAME.to_string(),
            saved_to,
        };
        surface.show_download(Some(&link));
        self.store.revoke_after(href, self.config.revoke_after);

        self.enter(surface, UiState::Complete);
        Ok(link)
    }

    /// Download the archive behind `href` into the download directory
    pub async fn save_again(&self, href: &str) -> Result<PathBuf, GenerateError> {
        let bytes = self
            .store
            .resolve(href)
            .ok_or_else(|| GenerateError::Expired(href.to_string()))?;
        save_archive(&self.config.download_dir, ARCHIVE_FILE_NAME, &bytes).await
    }

    fn enter<S: Surface>(&self, surface: &S, state: UiState) {
        log::info!("submit: -> {}", state);
        surface.set_status(state.status_text(), state.muted());
        if let Some(percent) = state.progress() {
            surface.set_progress(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_keeps_status_and_body() {
        let outcome = SubmitOutcome::from(GenerateError::Server {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert_eq!(
            outcome,
            SubmitOutcome::ServerError {
                status: 502,
                body: "bad gateway".to_string()
            }
        );
    }

    #[test]
    fn other_errors_become_failed_with_message() {
        let outcome = SubmitOutcome::from(GenerateError::Transport("connection reset".to_string()));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "connection reset".to_string()
            }
        );
        assert_eq!(SubmitOutcome::from(GenerateError::MissingFiles), SubmitOutcome::Aborted);
    }
}

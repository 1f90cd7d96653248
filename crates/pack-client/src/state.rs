//! Display states of the form and what each one shows

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiState {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "validating")]
    Validating,
    #[serde(rename = "uploading")]
    Uploading,
    #[serde(rename = "generating")]
    Generating,
    #[serde(rename = "complete")]
    Complete,
    /// Server answered with a non-success status
    #[serde(rename = "server_error")]
    ServerError,
    #[serde(rename = "failed")]
    Failed,
}

impl UiState {
    pub fn status_text(self) -> &'static str {
        match self {
            UiState::Idle | UiState::Validating => "Ready",
            UiState::Uploading => "Uploading files…",
            UiState::Generating => "Generating images & captions…",
            UiState::Complete => "Complete — ZIP downloaded",
            UiState::ServerError => "Server error",
            UiState::Failed => "Failed",
        }
    }

    /// Progress bar width in percent; `None` leaves the bar as it is
    pub fn progress(self) -> Option<u8> {
        match self {
            UiState::Idle | UiState::Validating => Some(0),
            UiState::Uploading => Some(10),
            UiState::Generating => Some(40),
            UiState::Complete => Some(100),
            UiState::ServerError | UiState::Failed => None,
        }
    }

    /// Failure statuses are rendered dimmed
    pub fn muted(self) -> bool {
        matches!(self, UiState::ServerError | UiState::Failed)
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiState::Idle => write!(f, "idle"),
            UiState::Validating => write!(f, "validating"),
            UiState::Uploading => write!(f, "uploading"),
            UiState::Generating => write!(f, "generating"),
            UiState::Complete => write!(f, "complete"),
            UiState::ServerError => write!(f, "server_error"),
            UiState::Failed => write!(f, "failed"),
        }
    }
}

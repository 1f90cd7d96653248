//! Error taxonomy for a single submission

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Logo or product image was not selected
    MissingFiles,
    /// The generation service answered with a non-success status
    Server { status: u16, body: String },
    /// Request could not be sent or the body could not be read
    Transport(String),
    /// Local file system failure (reading inputs, writing the archive)
    Io(String),
    /// A short-lived archive reference was used after release
    Expired(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MissingFiles => {
                write!(f, "Please upload both logo and product images.")
            }
            GenerateError::Server { status, body } => {
                write!(f, "Server error: {} — {}", status, body)
            }
            GenerateError::Transport(msg) => write!(f, "{}", msg),
            GenerateError::Io(msg) => write!(f, "{}", msg),
            GenerateError::Expired(href) => write!(f, "Download link has expired: {}", href),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        GenerateError::Transport(e.to_string())
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        GenerateError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::GenerateError;

    #[test]
    fn server_error_message_carries_status_and_body() {
        let err = GenerateError::Server {
            status: 500,
            body: "internal error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal error"));
    }

    #[test]
    fn io_error_converts_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "logo.png missing");
        let err: GenerateError = io.into();
        assert_eq!(err, GenerateError::Io("logo.png missing".to_string()));
    }
}

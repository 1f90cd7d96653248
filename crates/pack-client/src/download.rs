//! Writes a received archive into the download directory

use crate::error::GenerateError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Suggested name of the downloaded pack
pub const ARCHIVE_FILE_NAME: &str = "creative_pack.zip";

/// Save `bytes` as `file_name` in `dir` without overwriting earlier downloads.
/// Collisions become `name (1).ext`, `name (2).ext`, ...
pub async fn save_archive(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, GenerateError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| GenerateError::Io(format!("Failed to create directory: {}", e)))?;

    let (stem, ext) = split_name(file_name);
    let mut attempt: u32 = 0;

    loop {
        let candidate = dir.join(numbered_name(stem, ext, attempt));

        // create_new makes the existence check and the create a single step
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(mut file) => {
                file.write_all(bytes)
                    .await
                    .map_err(|e| GenerateError::Io(format!("Failed to write archive: {}", e)))?;
                file.flush()
                    .await
                    .map_err(|e| GenerateError::Io(format!("Failed to flush archive: {}", e)))?;
                return Ok(candidate);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                attempt += 1;
            }
            Err(e) => {
                return Err(GenerateError::Io(format!(
                    "Failed to create {}: {}",
                    candidate.display(),
                    e
                )))
            }
        }
    }
}

fn split_name(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => (&file_name[..dot], Some(&file_name[dot + 1..])),
        _ => (file_name, None),
    }
}

fn numbered_name(stem: &str, ext: Option<&str>, attempt: u32) -> String {
    match (attempt, ext) {
        (0, Some(ext)) => format!("{}.{}", stem, ext),
        (0, None) => stem.to_string(),
        (n, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
        (n, None) => format!("{} ({})", stem, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_names_keep_extension() {
        assert_eq!(numbered_name("creative_pack", Some("zip"), 0), "creative_pack.zip");
        assert_eq!(numbered_name("creative_pack", Some("zip"), 2), "creative_pack (2).zip");
        assert_eq!(numbered_name("README", None, 1), "README (1)");
    }

    #[test]
    fn dotfiles_have_no_extension() {
        assert_eq!(split_name(".env"), (".env", None));
        assert_eq!(split_name("a.tar.gz"), ("a.tar", Some("gz")));
    }

    #[tokio::test]
    async fn second_save_does_not_overwrite_first() {
        let dir = tempfile::tempdir().unwrap();

        let first = save_archive(dir.path(), ARCHIVE_FILE_NAME, b"one").await.unwrap();
        let second = save_archive(dir.path(), ARCHIVE_FILE_NAME, b"two").await.unwrap();

        assert_eq!(first.file_name().unwrap(), "creative_pack.zip");
        assert_eq!(second.file_name().unwrap(), "creative_pack (1).zip");
        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let saved = save_archive(&nested, ARCHIVE_FILE_NAME, b"PK").await.unwrap();
        assert!(saved.starts_with(&nested));
    }
}

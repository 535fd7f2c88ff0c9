//! Flat files under one data directory: one CSV per form, plus the corpus
//! text file the chat assistant reads.

use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::errors::form_store_error::FormStoreError;

/// Name of the corpus text file inside the data directory.
pub const CORPUS_FILE_NAME: &str = "website_content.txt";

#[derive(Debug, Clone)]
pub struct SubmissionStore {
    data_dir: PathBuf,
}

impl SubmissionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Reads `FORM_DATA_DIR` (default `data`).
    pub fn from_env() -> Self {
        Self::new(std::env::var("FORM_DATA_DIR").unwrap_or_else(|_| "data".into()))
    }

    /// Store one submission. `data` is `header\nrow`: a new file gets it
    /// verbatim, an existing file only gets the row plus a newline.
    pub async fn save_csv(&self, filename: &str, data: &str) -> Result<PathBuf, FormStoreError> {
        let name = checked_csv_name(filename)?;
        if data.trim().is_empty() {
            return Err(FormStoreError::MissingField("data"));
        }

        fs::create_dir_all(&self.data_dir).await?;
        let path = self.data_dir.join(name);

        if fs::try_exists(&path).await? {
            match data.split('\n').nth(1) {
                Some(row) => {
                    let mut file = fs::OpenOptions::new().append(true).open(&path).await?;
                    file.write_all(row.as_bytes()).await?;
                    file.write_all(b"\n").await?;
                    file.flush().await?;
                    debug!(
                        target: "form_store::csv",
                        file = %path.display(),
                        bytes = row.len(),
                        "row appended"
                    );
                }
                None => {
                    debug!(
                        target: "form_store::csv",
                        file = %path.display(),
                        "no data row after header, nothing appended"
                    );
                }
            }
        } else {
            fs::write(&path, data).await?;
            info!(
                target: "form_store::csv",
                file = %path.display(),
                "csv file created"
            );
        }
        Ok(path)
    }

    /// Overwrite the corpus text file and return its path.
    pub async fn save_content(&self, content: &str) -> Result<PathBuf, FormStoreError> {
        if content.trim().is_empty() {
            return Err(FormStoreError::MissingField("content"));
        }
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.data_dir.join(CORPUS_FILE_NAME);
        fs::write(&path, content).await?;
        info!(
            target: "form_store::content",
            file = %path.display(),
            chars = content.chars().count(),
            "corpus text saved"
        );
        Ok(path)
    }
}

/// Accept only a single normal path component ending in `.csv`.
fn checked_csv_name(filename: &str) -> Result<&str, FormStoreError> {
    let invalid = || FormStoreError::InvalidFilename(filename.to_string());
    let trimmed = filename.trim();
    if trimmed.is_empty() {
        return Err(FormStoreError::MissingField("filename"));
    }

    let mut components = Path::new(trimmed).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(invalid()),
    }
    if trimmed.contains('\\') || !trimmed.to_ascii_lowercase().ends_with(".csv") || trimmed.len() <= 4 {
        return Err(invalid());
    }
    Ok(trimmed)
}

// src/core/upload.rs

use crate::core::error::ApiError;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions the analysis service accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf", "txt"];

/// Name of the multipart part carrying the document.
pub const FILE_FIELD: &str = "file";

/// The upload form: one document plus any extra text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub file: PathBuf,
    pub fields: Vec<(String, String)>,
}

impl UploadForm {
    pub fn new(file: impl Into<PathBuf>, fields: Vec<(String, String)>) -> Self {
        Self { file: file.into(), fields }
    }

    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.to_string_lossy().into_owned())
    }

    /// Checks the form before anything is sent.
    ///
    /// The file must exist, be a regular file, and carry one of
    /// [`ALLOWED_EXTENSIONS`] (case-insensitive).
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.file.as_os_str().is_empty() {
            return Err(ApiError::InvalidForm("no file selected".to_string()));
        }
        if !self.file.is_file() {
            return Err(ApiError::InvalidForm(format!(
                "{} is not a readable file",
                self.file.display()
            )));
        }
        match extension_of(&self.file) {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ApiError::InvalidForm(format!(
                "unsupported file type, expected one of: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))),
        }
    }

    /// Reads the file and builds the multipart body.
    pub async fn to_multipart(&self) -> Result<Form, ApiError> {
        let bytes = tokio::fs::read(&self.file).await?;
        debug!(file = %self.file.display(), size = bytes.len(), "Building multipart body.");

        let part = Part::bytes(bytes)
            .file_name(self.file_name())
            .mime_str(mime_for(&self.file))?;

        let form = self
            .fields
            .iter()
            .fold(Form::new().part(FILE_FIELD, part), |form, (key, value)| {
                form.text(key.clone(), value.clone())
            });
        Ok(form)
    }
}

/// Parses a `key=value` pair given on the command line.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

fn mime_for(path: &Path) -> &'static str {
    match extension_of(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

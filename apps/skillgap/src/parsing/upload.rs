use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Multipart field carrying the resume file.
pub const FILE_FIELD: &str = "file";

/// A resume upload plus any text fields sent alongside it.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
    fields: HashMap<String, String>,
}

impl ResumeUpload {
    /// Drains the multipart body. The `file` part is required and must have a filename.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut file: Option<(String, Bytes)> = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == FILE_FIELD {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
                file = Some((filename, data));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid field '{name}': {e}")))?;
                fields.insert(name, value);
            }
        }

        let (filename, bytes) = file.ok_or_else(|| {
            AppError::Validation("Upload a resume file (.pdf or .txt)".to_string())
        })?;
        if filename.trim().is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        info!("Received upload {filename} ({} bytes)", bytes.len());
        Ok(Self {
            filename,
            bytes,
            fields,
        })
    }

    /// A text field, if present and not blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

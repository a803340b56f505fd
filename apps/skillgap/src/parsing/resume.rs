//! Resume reader: turns an uploaded file into plain text for skill extraction.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::parsing::skill_extractor::extract_skills;

/// Resume formats the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::PlainText),
            _ => Err(AppError::UnsupportedFormat(format!(
                "Unsupported resume format for '{filename}'. Use .pdf or .txt"
            ))),
        }
    }
}

/// Extracts the text of an uploaded resume.
pub fn resume_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let format = ResumeFormat::from_filename(filename)?;
    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("{filename}: {e}")))?,
        ResumeFormat::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::Validation(format!("{filename} is not valid UTF-8 text"))
        })?,
    };
    debug!("Extracted {} chars from {filename} ({format:?})", text.len());
    Ok(text)
}

/// Reads an uploaded resume and returns the vocabulary skills it mentions.
pub fn parse_resume<S: AsRef<str>>(
    filename: &str,
    bytes: &[u8],
    vocabulary: &[S],
) -> Result<BTreeSet<String>, AppError> {
    let text = resume_text(filename, bytes)?;
    let skills = extract_skills(&text, vocabulary);
    info!("Found {} skills in resume {filename}", skills.len());
    Ok(skills)
}

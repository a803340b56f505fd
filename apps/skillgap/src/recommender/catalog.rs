use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One job posting from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

/// On-disk shape; every field is optional in the source file.
#[derive(Debug, Deserialize)]
struct RawPosting {
    id: Option<serde_json::Value>,
    title: Option<String>,
    company: Option<String>,
    description: Option<String>,
}

impl RawPosting {
    fn into_posting(self, index: usize) -> JobPosting {
        let id = match self.id {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => index.to_string(),
            Some(other) => other.to_string(),
        };
        JobPosting {
            id,
            title: self.title.unwrap_or_else(|| "Unknown".to_string()),
            company: self.company.unwrap_or_else(|| "Unknown".to_string()),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Read-only job catalog, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawPosting> =
            serde_json::from_str(json).context("job catalog must be a JSON array of postings")?;
        Ok(Self::new(
            raw.into_iter()
                .enumerate()
                .map(|(idx, r)| r.into_posting(idx))
                .collect(),
        ))
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Job catalog not found: {}", path.display());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("failed to parse job catalog {}", path.display()))?;
        info!("Loaded {} job postings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.postings.iter().map(|p| p.description.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_defaults() {
        let catalog = JobCatalog::from_json_str(
            r#"[
                {"id": "a1", "title": "Analyst", "company": "Acme", "description": "SQL"},
                {"description": "Python"},
                {"id": 42, "title": "Dev"}
            ]"#,
        )
        .unwrap();

        let postings = catalog.postings();
        assert_eq!(postings[0].id, "a1");
        assert_eq!(postings[1].id, "1");
        assert_eq!(postings[1].title, "Unknown");
        assert_eq!(postings[1].company, "Unknown");
        assert_eq!(postings[2].id, "42");
        assert_eq!(postings[2].description, "");
    }

    #[test]
    fn test_non_array_is_rejected() {
        assert!(JobCatalog::from_json_str(r#"{"id": "x"}"#).is_err());
    }

    #[test]
    fn test_from_json_path_missing_file() {
        let err = JobCatalog::from_json_path("/nope/sample_jds.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_from_json_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, r#"[{"id":"j","title":"T","company":"C","description":"D"}]"#)
            .unwrap();
        let catalog = JobCatalog::from_json_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.descriptions(), vec!["D".to_string()]);
    }
}

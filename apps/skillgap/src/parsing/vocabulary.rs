use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

/// The fixed list of canonical skill names every extractor matches against.
///
/// Order is the file order; duplicates (case-insensitive) keep the first spelling.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    skill: Option<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();
        Self { skills }
    }

    /// Loads the vocabulary from a CSV file with a `skill` header column.
    /// Other columns are ignored; blank cells are skipped.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Skills CSV file not found: {}", path.display());
        }

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open skills CSV {}", path.display()))?;

        let mut skills = Vec::new();
        for row in reader.deserialize::<SkillRow>() {
            let row = row.with_context(|| format!("malformed row in {}", path.display()))?;
            if let Some(skill) = row.skill {
                skills.push(skill);
            }
        }

        let vocabulary = Self::new(skills);
        info!(
            "Loaded {} skills from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_trims_and_dedups_case_insensitively() {
        let vocab = SkillVocabulary::new(["Python", " python ", "", "SQL", "  "]);
        assert_eq!(vocab.skills(), &["Python".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_from_csv_path_reads_skill_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skill,category").unwrap();
        writeln!(file, "Python,language").unwrap();
        writeln!(file, ",data").unwrap();
        writeln!(file, "Node.js,backend").unwrap();
        file.flush().unwrap();

        let vocab = SkillVocabulary::from_csv_path(file.path()).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.skills()[1], "Node.js");
    }

    #[test]
    fn test_from_csv_path_missing_file_errors() {
        let err = SkillVocabulary::from_csv_path("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

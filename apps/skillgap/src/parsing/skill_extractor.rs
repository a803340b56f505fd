//! Vocabulary-driven skill extraction from free text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::contains_word;

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9+#.\s]").expect("static regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Lowercases and strips everything except alphanumerics, `+`, `#`, `.` and
/// whitespace, then collapses whitespace. Keeps tokens such as `c++`, `c#`, `node.js`.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = disallowed_chars().replace_all(&lowered, " ");
    whitespace_runs().replace_all(&cleaned, " ").into_owned()
}

/// Returns the vocabulary skills present in `text`, sorted, in their vocabulary spelling.
///
/// Pure presence test: no fuzzy matching, no counting.
pub fn extract_skills<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> BTreeSet<String> {
    let clean = normalize_text(text);
    vocabulary
        .iter()
        .map(AsRef::as_ref)
        .filter(|skill| {
            let needle = skill.trim().to_lowercase();
            contains_word(&clean, &needle)
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &[&str] = &["Python", "SQL", "C++", "C#", "Node.js", "Machine Learning", "Java"];

    #[test]
    fn test_normalize_text_keeps_symbol_tokens() {
        assert_eq!(
            normalize_text("Skills:  C++, C#;\n Node.js (Express)!"),
            "skills c++ c# node.js express "
        );
    }

    #[test]
    fn test_extracts_with_vocabulary_casing() {
        let found = extract_skills("Experienced in PYTHON, sql and machine   learning.", VOCAB);
        let found: Vec<_> = found.into_iter().collect();
        assert_eq!(found, vec!["Machine Learning", "Python", "SQL"]);
    }

    #[test]
    fn test_extracts_symbol_suffixed_skills() {
        let found = extract_skills("Built services in C++ and C# plus Node.js", VOCAB);
        assert!(found.contains("C++"));
        assert!(found.contains("C#"));
        assert!(found.contains("Node.js"));
    }

    #[test]
    fn test_no_partial_matches() {
        let found = extract_skills("JavaScript and NoSQL", VOCAB);
        assert!(found.is_empty());
    }

    #[test]
    fn test_blank_vocabulary_entries_are_ignored() {
        let found = extract_skills("anything at all", &["", "   "]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Python developer with SQL, C++ and Node.js; machine learning hobbyist";
        let first = extract_skills(text, VOCAB);
        let second = extract_skills(text, VOCAB);
        assert_eq!(first, second);

        // Re-extracting from the joined result finds the same set.
        let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        assert_eq!(extract_skills(&joined, VOCAB), first);
    }
}

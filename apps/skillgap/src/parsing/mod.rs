//! Text parsing: vocabulary loading, skill extraction, JD section weighting,
//! and turning uploaded resumes into plain text.

pub mod handlers;
pub mod jd_weighter;
pub mod resume;
pub mod skill_extractor;
pub mod upload;
pub mod vocabulary;

/// Returns true when `needle` occurs in `haystack` with no word character
/// (alphanumeric or `_`) directly before or after it.
///
/// Both arguments are expected to be lowercased already.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    let Some(first) = needle.chars().next() else {
        return false;
    };
    // Every candidate start is checked, including ones that overlap an
    // earlier rejected occurrence.
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        from = start + first.len_utf8();
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_word_respects_boundaries() {
        assert!(contains_word("python and sql", "sql"));
        assert!(!contains_word("nosql stores", "sql"));
        assert!(!contains_word("javascript", "java"));
        assert!(contains_word("java, javascript", "java"));
    }

    #[test]
    fn test_contains_word_handles_symbol_suffixed_skills() {
        assert!(contains_word("c++ and c# developer", "c++"));
        assert!(contains_word("c++ and c# developer", "c#"));
        assert!(contains_word("node.js backend", "node.js"));
        // `+` is not a word character, so a bare `c` skill is found inside `c++`.
        assert!(contains_word("c++ only", "c"));
    }

    #[test]
    fn test_contains_word_finds_later_valid_occurrence() {
        assert!(contains_word("gopher go", "go"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_contains_word_checks_overlapping_occurrences() {
        assert!(contains_word("xa.a.a", "a.a"));
        assert!(contains_word("aaa aa", "aa"));
        assert!(!contains_word("xa.a.ax", "a.a"));
    }
}

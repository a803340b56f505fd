//! TF-IDF vector space fitted over one comparison set.
//!
//! Tokens are runs of two or more word characters, lowercased. Term weights are
//! raw counts times smoothed IDF `ln((1 + n) / (1 + df)) + 1`, and each row is
//! L2-normalised, so cosine similarity between rows reduces to a dot product.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::scoring::ScoringError;

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static regex"))
}

/// English stop words, the same set scikit-learn uses for `stop_words='english'`.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

/// Vectorizer options.
#[derive(Debug, Clone, Default)]
pub struct TfidfConfig {
    /// Keep only the N most frequent terms across the corpus.
    pub max_features: Option<usize>,
    /// Drop English stop words before counting.
    pub stop_words: bool,
}

impl TfidfConfig {
    /// Settings used when ranking a whole job catalog.
    pub fn catalog() -> Self {
        Self {
            max_features: Some(500),
            stop_words: true,
        }
    }
}

/// Fitted TF-IDF rows, one per input document, in input order.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    n_terms: usize,
    rows: Vec<HashMap<usize, f64>>,
}

impl TfidfMatrix {
    #[cfg(test)]
    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    /// Size of the fitted vocabulary.
    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    /// Cosine similarity between rows `a` and `b`, in [0, 1].
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        let (small, large) = if self.rows[a].len() <= self.rows[b].len() {
            (&self.rows[a], &self.rows[b])
        } else {
            (&self.rows[b], &self.rows[a])
        };
        small
            .iter()
            .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }

    /// Similarity of row 0 against every other row.
    pub fn similarities_to_first(&self) -> Vec<f64> {
        (1..self.rows.len()).map(|i| self.cosine(0, i)).collect()
    }
}

/// TF-IDF vectorizer. Stateless: every call fits a fresh vector space so the
/// IDF reflects exactly the documents being compared.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    config: TfidfConfig,
}

impl TfidfVectorizer {
    pub fn new(config: TfidfConfig) -> Self {
        Self { config }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        token_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.config.stop_words || !stop_words().contains(t))
            .map(str::to_string)
            .collect()
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix, ScoringError> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenize(d.as_ref()))
            .collect();

        let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                *corpus_counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        if corpus_counts.is_empty() {
            return Err(ScoringError::EmptyVocabulary);
        }

        let mut terms: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
        if let Some(limit) = self.config.max_features {
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            terms.truncate(limit);
        }
        let vocabulary: BTreeMap<String, usize> = {
            let mut names: Vec<&str> = terms.iter().map(|(t, _)| *t).collect();
            names.sort_unstable();
            names
                .into_iter()
                .enumerate()
                .map(|(idx, t)| (t.to_string(), idx))
                .collect()
        };

        let counts: Vec<HashMap<usize, f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = HashMap::new();
                for token in tokens {
                    if let Some(&idx) = vocabulary.get(token) {
                        *row.entry(idx).or_insert(0.0) += 1.0;
                    }
                }
                row
            })
            .collect();

        let n_docs = documents.len() as f64;
        let mut doc_freq = vec![0usize; vocabulary.len()];
        for row in &counts {
            for idx in row.keys() {
                doc_freq[*idx] += 1;
            }
        }
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|df| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|mut row| {
                for (idx, weight) in row.iter_mut() {
                    *weight *= idf[*idx];
                }
                let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in row.values_mut() {
                        *weight /= norm;
                    }
                }
                row
            })
            .collect();

        Ok(TfidfMatrix {
            n_terms: vocabulary.len(),
            rows,
        })
    }
}

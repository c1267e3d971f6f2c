use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

const BUNDLED_ENGLISH: &str = include_str!("../assets/stopwords_en.txt");

/// Static set of low-signal words dropped during normalization.
/// Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The English stopword list shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_words(BUNDLED_ENGLISH.lines())
    }

    /// Empty set: normalization still strips punctuation and lowercases,
    /// but no words are removed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a stopword list from a newline-delimited file, or fall back to
    /// the bundled English list when no path is given. An unreadable file
    /// degrades cleaning rather than failing the process.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            None => Self::bundled(),
            Some(path) => match std::fs::read_to_string(path) {
                Ok(contents) => {
                    let set = Self::from_words(contents.lines());
                    info!("Loaded {} stopwords from {}", set.len(), path.display());
                    set
                }
                Err(e) => {
                    warn!(
                        "Failed to read stopword list {}: {}. Proceeding without stopword removal",
                        path.display(),
                        e
                    );
                    Self::empty()
                }
            },
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

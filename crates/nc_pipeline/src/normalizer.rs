use crate::stopwords::StopwordSet;

/// Cleans a raw submission into the form the vectorizer was fitted on:
/// letters only, lowercase, stopwords removed, single-space separated.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: StopwordSet,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Any input is valid; the result may be empty if nothing survives.
    /// The step order matters: the vectorizer vocabulary was fitted on text
    /// cleaned exactly this way.
    pub fn normalize(&self, text: &str) -> String {
        let letters_only: String = text
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect();

        letters_only
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

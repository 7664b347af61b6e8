use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::filter::CodePointSet;

const WORDS_EN: &str = include_str!("../../assets/words-en.json");

/// Words kept by `long_words_only` must be longer than this.
pub const SHORT_WORD_MAX_LEN: usize = 3;

/// Raw reference corpus, in the order the corpus author chose.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn builtin() -> Self {
        Self::from_json(WORDS_EN).unwrap_or_default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Keep the first `word_list_size` corpus words that can be typed with
/// `code_points`, in corpus order. Repeated entries count once.
pub fn curate(
    raw: &WordList,
    code_points: &CodePointSet,
    word_list_size: usize,
    long_words_only: bool,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut curated: Vec<String> = Vec::new();
    for word in raw.words() {
        if curated.len() >= word_list_size {
            break;
        }
        if word.is_empty() || !code_points.contains_word(word) {
            continue;
        }
        if long_words_only && word.chars().count() <= SHORT_WORD_MAX_LEN {
            continue;
        }
        if seen.insert(word.as_str()) {
            curated.push(word.clone());
        }
    }

    tracing::debug!(
        "Curated {} of {} corpus words (limit {}, long words only: {})",
        curated.len(),
        raw.len(),
        word_list_size,
        long_words_only
    );
    curated
}

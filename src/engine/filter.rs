use std::collections::BTreeSet;

/// The characters a session is allowed to produce. Space is always permitted
/// as a separator and need not be a member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodePointSet {
    allowed: BTreeSet<char>,
}

impl CodePointSet {
    pub fn new(allowed: impl IntoIterator<Item = char>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn from_str_chars(chars: &str) -> Self {
        Self::new(chars.chars().filter(|ch| !ch.is_whitespace()))
    }

    pub fn contains(&self, ch: char) -> bool {
        self.allowed.contains(&ch)
    }

    pub fn is_allowed(&self, ch: char) -> bool {
        self.contains(ch) || ch == ' '
    }

    pub fn contains_word(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.allowed.iter().copied()
    }
}

/// Marks that surround a word instead of trailing it, as (open, close).
const PAIRS: &[(char, char)] = &[('(', ')'), ('"', '"')];

fn pair_of(mark: char) -> Option<(char, char)> {
    PAIRS
        .iter()
        .find(|&&(open, close)| mark == open || mark == close)
        .copied()
}

/// Attach `mark` to `word`. Paired marks wrap the word, but only when both
/// halves are in `allowed`; otherwise the word comes back unchanged. Every
/// other mark becomes a suffix.
pub fn punctuate(word: &str, mark: char, allowed: &[char]) -> String {
    match pair_of(mark) {
        Some((open, close)) => {
            if allowed.contains(&open) && allowed.contains(&close) {
                format!("{open}{word}{close}")
            } else {
                word.to_string()
            }
        }
        None => format!("{word}{mark}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_marks() {
        assert_eq!(punctuate("word", '.', &['.']), "word.");
        assert_eq!(punctuate("word", ',', &[',', '.']), "word,");
        assert_eq!(punctuate("word", '-', &['-']), "word-");
    }

    #[test]
    fn test_pairs_wrap_when_both_halves_allowed() {
        assert_eq!(punctuate("word", '(', &['(', ')']), "(word)");
        assert_eq!(punctuate("word", ')', &['(', ')']), "(word)");
        assert_eq!(punctuate("word", '"', &['"']), "\"word\"");
    }

    #[test]
    fn test_half_pair_is_skipped() {
        assert_eq!(punctuate("word", '(', &['(']), "word");
        assert_eq!(punctuate("word", ')', &[')', '.']), "word");
    }
}

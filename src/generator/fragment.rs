#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentOptions {
    /// Number of words to pull from the stream.
    pub word_count: usize,
    /// Upper bound on the passage length in characters.
    pub max_length: Option<usize>,
    /// Join each pair of consecutive words into one unit with no space.
    pub double_words: bool,
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            word_count: 20,
            max_length: None,
            double_words: false,
        }
    }
}

/// Assemble words into a space separated passage.
///
/// Stops after `word_count` words, or before the first unit that would push
/// the passage past `max_length`. The first unit is always placed, so the
/// passage is never empty for a non-zero word count, and no word is ever cut.
pub fn generate_fragment<I>(words: I, options: &FragmentOptions) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut words = words.into_iter();
    let mut passage = String::new();
    let mut passage_len = 0;
    let mut consumed = 0;

    while consumed < options.word_count {
        let Some(mut unit) = words.next() else {
            break;
        };
        consumed += 1;
        if options.double_words && consumed < options.word_count {
            if let Some(second) = words.next() {
                unit.push_str(&second);
                consumed += 1;
            }
        }

        let unit_len = unit.chars().count();
        let sep_len = usize::from(!passage.is_empty());
        if let Some(max) = options.max_length {
            if !passage.is_empty() && passage_len + sep_len + unit_len > max {
                break;
            }
        }

        if sep_len == 1 {
            passage.push(' ');
        }
        passage.push_str(&unit);
        passage_len += sep_len + unit_len;
    }

    passage
}

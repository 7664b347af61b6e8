use std::marker::PhantomData;

use rand::Rng;

use crate::generator::capitalize::capitalize_first;
use crate::generator::punctuate::punctuate;
use crate::generator::words::WordSource;

pub const DEFAULT_CAPITALS_RATE: f64 = 0.25;
pub const DEFAULT_PUNCTUATORS_RATE: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MangleOptions {
    pub with_capitals: bool,
    pub with_punctuators: bool,
    pub capitals_rate: f64,
    pub punctuators_rate: f64,
}

impl Default for MangleOptions {
    fn default() -> Self {
        Self {
            with_capitals: false,
            with_punctuators: false,
            capitals_rate: DEFAULT_CAPITALS_RATE,
            punctuators_rate: DEFAULT_PUNCTUATORS_RATE,
        }
    }
}

/// Apply the random capitalization and punctuation transforms to one word.
///
/// Exactly two values are drawn from `rng` per word, capitalization first and
/// punctuation second, whatever the options say. The stream position after a
/// word is therefore the same for every combination of toggles.
pub fn mangle_word<R: Rng + ?Sized>(
    word: &str,
    punctuators: &[char],
    options: &MangleOptions,
    rng: &mut R,
) -> String {
    let capital_roll: f64 = rng.r#gen();
    let punct_roll: f64 = rng.r#gen();

    let mut result = if options.with_capitals && capital_roll < options.capitals_rate {
        capitalize_first(word)
    } else {
        word.to_string()
    };

    if options.with_punctuators && !punctuators.is_empty() && punct_roll < options.punctuators_rate
    {
        // Reuse the roll to pick the mark: below the rate it is uniform over
        // [0, rate).
        let idx = ((punct_roll / options.punctuators_rate) * punctuators.len() as f64) as usize;
        let mark = punctuators[idx.min(punctuators.len() - 1)];
        result = punctuate(&result, mark, punctuators);
    }

    result
}

/// Mangled words pulled from a word source, sharing the session RNG.
pub struct MangledWords<'a, 'r, S, R: ?Sized> {
    source: S,
    punctuators: &'r [char],
    options: MangleOptions,
    rng: &'r mut R,
    _word: PhantomData<&'a str>,
}

impl<'a, 'r, S: WordSource<'a>, R: Rng + ?Sized> MangledWords<'a, 'r, S, R> {
    pub fn new(
        source: S,
        punctuators: &'r [char],
        options: MangleOptions,
        rng: &'r mut R,
    ) -> Self {
        Self {
            source,
            punctuators,
            options,
            rng,
            _word: PhantomData,
        }
    }
}

impl<'a, S: WordSource<'a>, R: Rng + ?Sized> Iterator for MangledWords<'a, '_, S, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.source.next_word(&mut *self.rng);
        Some(mangle_word(word, self.punctuators, &self.options, &mut *self.rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::generator::words::{RandomWords, UniqueWords};

    fn options(with_capitals: bool, with_punctuators: bool) -> MangleOptions {
        MangleOptions {
            with_capitals,
            with_punctuators,
            ..MangleOptions::default()
        }
    }

    #[test]
    fn test_disabled_options_leave_word_unchanged() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let word = mangle_word("hello", &['.', ','], &options(false, false), &mut rng);
            assert_eq!(word, "hello");
        }
    }

    #[test]
    fn test_always_rate_capitalizes_every_word() {
        let mut rng = SmallRng::seed_from_u64(42);
        let opts = MangleOptions {
            capitals_rate: 1.0,
            ..options(true, false)
        };
        for _ in 0..20 {
            assert_eq!(mangle_word("hello", &[], &opts, &mut rng), "Hello");
        }
    }

    #[test]
    fn test_punctuation_is_noop_without_permitted_marks() {
        let mut rng = SmallRng::seed_from_u64(3);
        let opts = MangleOptions {
            punctuators_rate: 1.0,
            ..options(false, true)
        };
        for _ in 0..20 {
            assert_eq!(mangle_word("hello", &[], &opts, &mut rng), "hello");
        }
    }

    #[test]
    fn test_punctuation_uses_only_permitted_marks() {
        let mut rng = SmallRng::seed_from_u64(9);
        let opts = MangleOptions {
            punctuators_rate: 1.0,
            ..options(false, true)
        };
        let mut seen_period = false;
        let mut seen_comma = false;
        for _ in 0..200 {
            let word = mangle_word("hello", &['.', ','], &opts, &mut rng);
            match word.as_str() {
                "hello." => seen_period = true,
                "hello," => seen_comma = true,
                other => panic!("unexpected mangling: {other}"),
            }
        }
        assert!(seen_period && seen_comma);
    }

    #[test]
    fn test_rng_consumption_independent_of_toggles() {
        let mut plain = SmallRng::seed_from_u64(11);
        let mut mangled = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            mangle_word("word", &['.'], &options(false, false), &mut plain);
            mangle_word("word", &['.'], &options(true, true), &mut mangled);
        }
        assert_eq!(plain.r#gen::<u64>(), mangled.r#gen::<u64>());
    }

    #[test]
    fn test_mangled_words_follow_source() {
        let words: Vec<String> = vec!["cat".into(), "dog".into()];
        let mut rng = SmallRng::seed_from_u64(5);
        let source = UniqueWords::new(RandomWords::new(&words).unwrap());
        let out: Vec<String> =
            MangledWords::new(source, &[], options(false, false), &mut rng)
                .take(10)
                .collect();
        assert!(out.iter().all(|w| w == "cat" || w == "dog"));
        assert!(out.windows(2).all(|w| w[0] != w[1]));
    }
}

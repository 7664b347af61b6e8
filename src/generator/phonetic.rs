use serde::{Deserialize, Serialize};

use crate::engine::filter::CodePointSet;

/// Letters in English frequency order, most common first.
pub const FREQUENCY_ORDER: &[(char, f64)] = &[
    ('e', 12.70),
    ('t', 9.06),
    ('a', 8.17),
    ('o', 7.51),
    ('i', 6.97),
    ('n', 6.75),
    ('s', 6.33),
    ('h', 6.09),
    ('r', 5.99),
    ('d', 4.25),
    ('l', 4.03),
    ('c', 2.78),
    ('u', 2.76),
    ('m', 2.41),
    ('w', 2.36),
    ('f', 2.23),
    ('g', 2.02),
    ('y', 1.97),
    ('p', 1.93),
    ('b', 1.29),
    ('v', 0.98),
    ('k', 0.77),
    ('j', 0.15),
    ('x', 0.15),
    ('q', 0.10),
    ('z', 0.07),
];

pub const PUNCTUATORS: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"', '-', '(', ')'];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub code_point: char,
    #[serde(default)]
    pub frequency: f64,
}

impl Letter {
    pub fn new(code_point: char, frequency: f64) -> Self {
        Self {
            code_point,
            frequency,
        }
    }

    /// Display form, upper-cased when the letter has a single-char upper form.
    pub fn label(&self) -> char {
        let mut upper = self.code_point.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(ch), None) => ch,
            _ => self.code_point,
        }
    }

    /// The members of `category` that can be typed with `code_points`.
    pub fn restrict(category: &[Letter], code_points: &CodePointSet) -> Vec<Letter> {
        category
            .iter()
            .filter(|letter| code_points.contains(letter.code_point))
            .copied()
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhoneticModel {
    pub letters: Vec<Letter>,
    #[serde(default)]
    pub punctuators: Vec<Letter>,
}

impl PhoneticModel {
    pub fn new(letters: Vec<Letter>, punctuators: Vec<Letter>) -> Self {
        Self {
            letters,
            punctuators,
        }
    }

    pub fn english() -> Self {
        let letters = FREQUENCY_ORDER
            .iter()
            .map(|&(ch, freq)| Letter::new(ch, freq))
            .collect();
        let punctuators = PUNCTUATORS.iter().map(|&ch| Letter::new(ch, 0.0)).collect();
        Self::new(letters, punctuators)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn restrict_punctuators(&self, code_points: &CodePointSet) -> Vec<char> {
        Letter::restrict(&self.punctuators, code_points)
            .into_iter()
            .map(|letter| letter.code_point)
            .collect()
    }
}

impl Default for PhoneticModel {
    fn default() -> Self {
        Self::english()
    }
}

use std::collections::HashSet;
use std::marker::PhantomData;

use rand::Rng;

use crate::error::LessonError;

/// An endless, pull-driven supply of words. The RNG is passed in on every
/// pull so one session stream can be shared with later pipeline stages.
pub trait WordSource<'a> {
    fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a str;

    /// Number of distinct words the source can produce.
    fn len(&self) -> usize;

    fn words<R: Rng + ?Sized>(self, rng: &mut R) -> Words<'a, '_, Self, R>
    where
        Self: Sized,
    {
        Words {
            source: self,
            rng,
            _word: PhantomData,
        }
    }
}

/// Uniform sampling, with replacement, over a curated list.
#[derive(Clone, Debug)]
pub struct RandomWords<'a> {
    words: &'a [String],
    distinct: usize,
}

impl<'a> RandomWords<'a> {
    pub fn new(words: &'a [String]) -> Result<Self, LessonError> {
        if words.is_empty() {
            return Err(LessonError::EmptyCuratedList);
        }
        let distinct = words.iter().map(String::as_str).collect::<HashSet<_>>().len();
        Ok(Self { words, distinct })
    }
}

impl<'a> WordSource<'a> for RandomWords<'a> {
    fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a str {
        let idx = rng.gen_range(0..self.words.len());
        &self.words[idx]
    }

    fn len(&self) -> usize {
        self.distinct
    }
}

/// Never yields the same word twice in a row, unless the underlying source
/// only has one word to give.
#[derive(Clone, Debug)]
pub struct UniqueWords<'a, S> {
    source: S,
    last: Option<&'a str>,
}

impl<'a, S: WordSource<'a>> UniqueWords<'a, S> {
    pub fn new(source: S) -> Self {
        Self { source, last: None }
    }
}

impl<'a, S: WordSource<'a>> WordSource<'a> for UniqueWords<'a, S> {
    fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a str {
        let mut word = self.source.next_word(rng);
        if self.source.len() > 1 {
            while Some(word) == self.last {
                word = self.source.next_word(rng);
            }
        }
        self.last = Some(word);
        word
    }

    fn len(&self) -> usize {
        self.source.len()
    }
}

pub struct Words<'a, 'r, S, R: ?Sized> {
    source: S,
    rng: &'r mut R,
    _word: PhantomData<&'a str>,
}

impl<'a, S: WordSource<'a>, R: Rng + ?Sized> Iterator for Words<'a, '_, S, R> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        Some(self.source.next_word(&mut *self.rng))
    }
}

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::engine::filter::CodePointSet;
use crate::engine::key_stats::KeyStatsMap;
use crate::engine::lesson_keys::LessonKeys;
use crate::engine::target::Target;
use crate::error::LessonError;
use crate::generator::dictionary::{WordList, curate};
use crate::generator::fragment::generate_fragment;
use crate::generator::mangle::MangledWords;
use crate::generator::phonetic::PhoneticModel;
use crate::generator::words::{RandomWords, UniqueWords};
use crate::session::result::DrillResult;

/// One round of practice: turn the last round's results into statistics,
/// pick the keys to report, and produce the next passage.
pub trait Lesson {
    fn analyze(&self, results: &[DrillResult]) -> KeyStatsMap;

    fn update(&self, stats: &KeyStatsMap) -> LessonKeys;

    fn generate(&mut self) -> Result<String, LessonError>;
}

/// Practice passages assembled from real words of a reference corpus.
pub struct WordListLesson {
    config: Config,
    model: Arc<PhoneticModel>,
    code_points: CodePointSet,
    punctuators: Vec<char>,
    word_list: Vec<String>,
    rng: SmallRng,
}

impl WordListLesson {
    pub fn new(
        config: Config,
        model: Arc<PhoneticModel>,
        code_points: CodePointSet,
        words: &WordList,
        rng: SmallRng,
    ) -> Result<Self, LessonError> {
        config.validate()?;
        if code_points.is_empty() {
            return Err(LessonError::InvalidConfiguration(
                "the character set is empty".to_string(),
            ));
        }

        let word_list = curate(
            words,
            &code_points,
            config.word_list_size,
            config.long_words_only,
        );
        if word_list.is_empty() {
            tracing::warn!(
                "No corpus word fits the {} allowed characters; generation will fail",
                code_points.len()
            );
        }
        let punctuators = model.restrict_punctuators(&code_points);

        tracing::info!(
            "Word list lesson ready: {} words, {} punctuators",
            word_list.len(),
            punctuators.len()
        );
        Ok(Self {
            config,
            model,
            code_points,
            punctuators,
            word_list,
            rng,
        })
    }

    pub fn with_seed(
        config: Config,
        model: Arc<PhoneticModel>,
        code_points: CodePointSet,
        words: &WordList,
        seed: u64,
    ) -> Result<Self, LessonError> {
        Self::new(config, model, code_points, words, SmallRng::seed_from_u64(seed))
    }

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    pub fn code_points(&self) -> &CodePointSet {
        &self.code_points
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Lesson for WordListLesson {
    fn analyze(&self, results: &[DrillResult]) -> KeyStatsMap {
        KeyStatsMap::build(self.model.letters(), results)
    }

    fn update(&self, stats: &KeyStatsMap) -> LessonKeys {
        LessonKeys::include_all(stats, &Target::from_config(&self.config))
    }

    fn generate(&mut self) -> Result<String, LessonError> {
        let source = UniqueWords::new(RandomWords::new(&self.word_list)?);
        let words = MangledWords::new(
            source,
            &self.punctuators,
            self.config.mangle_options(),
            &mut self.rng,
        );
        let text = generate_fragment(words, &self.config.fragment_options());
        tracing::debug!("Generated passage of {} chars", text.len());
        Ok(text)
    }
}

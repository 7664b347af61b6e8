use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LessonError {
    /// Curation kept no words, so there is nothing to draw passages from.
    #[error("no word in the corpus can be typed with the current character set")]
    EmptyCuratedList,
    #[error("invalid lesson configuration: {0}")]
    InvalidConfiguration(String),
}

// Adaptive word-list lessons for typing tutors: per-key statistics in,
// practice passages out. The `wordrill` binary is a thin host over this tree.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod session;

pub use error::LessonError;
pub use session::lesson::{Lesson, WordListLesson};

pub mod lesson;
pub mod result;

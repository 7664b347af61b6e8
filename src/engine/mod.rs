pub mod filter;
pub mod key_stats;
pub mod lesson_keys;
pub mod target;

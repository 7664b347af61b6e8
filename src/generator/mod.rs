pub mod capitalize;
pub mod dictionary;
pub mod fragment;
pub mod mangle;
pub mod phonetic;
pub mod punctuate;
pub mod words;

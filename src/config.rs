use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::filter::CodePointSet;
use crate::error::LessonError;
use crate::generator::fragment::FragmentOptions;
use crate::generator::mangle::{DEFAULT_CAPITALS_RATE, DEFAULT_PUNCTUATORS_RATE, MangleOptions};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_wpm")]
    pub target_wpm: u32,
    #[serde(default = "default_word_list_size")]
    pub word_list_size: usize,
    #[serde(default)]
    pub long_words_only: bool,
    #[serde(default)]
    pub capitals: bool,
    #[serde(default)]
    pub punctuators: bool,
    #[serde(default)]
    pub double_words: bool,
    #[serde(default = "default_capitals_rate")]
    pub capitals_rate: f64,
    #[serde(default = "default_punctuators_rate")]
    pub punctuators_rate: f64,
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default = "default_letters")]
    pub letters: String,
}

fn default_target_wpm() -> u32 {
    35
}
fn default_word_list_size() -> usize {
    1000
}
fn default_capitals_rate() -> f64 {
    DEFAULT_CAPITALS_RATE
}
fn default_punctuators_rate() -> f64 {
    DEFAULT_PUNCTUATORS_RATE
}
fn default_word_count() -> usize {
    20
}
fn default_letters() -> String {
    ('a'..='z').collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_wpm: default_target_wpm(),
            word_list_size: default_word_list_size(),
            long_words_only: false,
            capitals: false,
            punctuators: false,
            double_words: false,
            capitals_rate: default_capitals_rate(),
            punctuators_rate: default_punctuators_rate(),
            word_count: default_word_count(),
            max_length: None,
            letters: default_letters(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordrill")
            .join("config.toml")
    }

    pub fn target_cpm(&self) -> f64 {
        self.target_wpm as f64 * 5.0
    }

    pub fn code_points(&self) -> CodePointSet {
        CodePointSet::from_str_chars(&self.letters)
    }

    pub fn mangle_options(&self) -> MangleOptions {
        MangleOptions {
            with_capitals: self.capitals,
            with_punctuators: self.punctuators,
            capitals_rate: self.capitals_rate,
            punctuators_rate: self.punctuators_rate,
        }
    }

    pub fn fragment_options(&self) -> FragmentOptions {
        FragmentOptions {
            word_count: self.word_count,
            max_length: self.max_length,
            double_words: self.double_words,
        }
    }

    pub fn validate(&self) -> Result<(), LessonError> {
        if self.word_list_size == 0 {
            return Err(LessonError::InvalidConfiguration(
                "word_list_size must be positive".to_string(),
            ));
        }
        if self.word_count == 0 {
            return Err(LessonError::InvalidConfiguration(
                "word_count must be positive".to_string(),
            ));
        }
        if self.target_wpm == 0 {
            return Err(LessonError::InvalidConfiguration(
                "target_wpm must be positive".to_string(),
            ));
        }
        for (name, rate) in [
            ("capitals_rate", self.capitals_rate),
            ("punctuators_rate", self.punctuators_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(LessonError::InvalidConfiguration(format!(
                    "{name} must be between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.target_wpm, 35);
        assert_eq!(config.word_list_size, 1000);
        assert!(!config.long_words_only);
        assert!(!config.capitals && !config.punctuators && !config.double_words);
        assert_eq!(config.word_count, 20);
        assert_eq!(config.max_length, None);
        assert_eq!(config.code_points().len(), 26);
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let toml_str = r#"
word_list_size = 50
capitals = true
letters = "etaoinshr.,"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.word_list_size, 50);
        assert!(config.capitals);
        assert!(config.mangle_options().with_capitals);
        assert!(!config.mangle_options().with_punctuators);
        assert!(config.code_points().contains('.'));
        assert_eq!(config.target_wpm, 35);
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.double_words = true;
        config.max_length = Some(120);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.double_words);
        assert_eq!(loaded.max_length, Some(120));
        assert_eq!(loaded.letters, config.letters);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.word_count, 20);
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let mut config = Config::default();
        config.word_list_size = 0;
        assert!(matches!(
            config.validate(),
            Err(LessonError::InvalidConfiguration(_))
        ));

        let mut config = Config::default();
        config.word_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let mut config = Config::default();
        config.punctuators_rate = 1.5;
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}

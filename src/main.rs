use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use wordrill::config::Config;
use wordrill::generator::dictionary::WordList;
use wordrill::generator::phonetic::PhoneticModel;
use wordrill::session::result::DrillResult;
use wordrill::{Lesson, WordListLesson};

#[derive(Parser)]
#[command(name = "wordrill", version, about = "Adaptive word-list practice passages")]
struct Cli {
    #[arg(short, long, help = "Config file (defaults to the user config dir)")]
    config: Option<PathBuf>,

    #[arg(long, help = "JSON array of corpus words (defaults to the builtin list)")]
    words: Option<PathBuf>,

    #[arg(long, help = "JSON array of previous drill results to analyze")]
    results: Option<PathBuf>,

    #[arg(short, long, help = "Allowed characters, e.g. \"etaoinshr.,\"")]
    letters: Option<String>,

    #[arg(short = 'n', long, help = "Number of words per passage")]
    count: Option<usize>,

    #[arg(long, help = "Maximum corpus words kept for the session")]
    word_list_size: Option<usize>,

    #[arg(long, help = "RNG seed for reproducible passages")]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 1, help = "Passages to generate")]
    rounds: usize,

    #[arg(long, help = "Randomly capitalize words")]
    capitals: bool,

    #[arg(long, help = "Randomly punctuate words")]
    punctuators: bool,

    #[arg(long, help = "Join consecutive words in pairs")]
    double_words: bool,

    #[arg(long, help = "Skip words of three letters or fewer")]
    long_words_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Cannot load config '{}'", path.display()))?;
    apply_overrides(&mut config, &cli);

    let words = match &cli.words {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Cannot read word list '{}'", path.display()))?;
            WordList::from_json(&json)
                .with_context(|| format!("Invalid word list '{}'", path.display()))?
        }
        None => WordList::builtin(),
    };

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let code_points = config.code_points();
    let mut lesson = WordListLesson::new(
        config,
        Arc::new(PhoneticModel::english()),
        code_points,
        &words,
        rng,
    )?;

    if let Some(path) = &cli.results {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read results '{}'", path.display()))?;
        let results: Vec<DrillResult> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid results '{}'", path.display()))?;
        report_keys(&lesson, &results);
    }

    for _ in 0..cli.rounds {
        println!("{}", lesson.generate()?);
    }
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(letters) = &cli.letters {
        config.letters = letters.clone();
    }
    if let Some(count) = cli.count {
        config.word_count = count;
    }
    if let Some(size) = cli.word_list_size {
        config.word_list_size = size;
    }
    config.capitals |= cli.capitals;
    config.punctuators |= cli.punctuators;
    config.double_words |= cli.double_words;
    config.long_words_only |= cli.long_words_only;
}

fn report_keys(lesson: &WordListLesson, results: &[DrillResult]) {
    let stats = lesson.analyze(results);
    let keys = lesson.update(&stats);
    for key in keys.keys() {
        match key.confidence {
            Some(conf) => println!(
                "{}  {:>5.2}  ({} samples)",
                key.letter.label(),
                conf,
                key.sample_count
            ),
            None => println!("{}    -", key.letter.label()),
        }
    }
    if let Some(weakest) = keys.find_weakest() {
        println!("weakest key: {}", weakest.letter.label());
    }
    println!();
}

//! Word from Word - CLI
//!
//! Find every dictionary word hidden in the letters of a long seed word.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use word_from_word::{
    commands::{analyze_seed, check_word, run_play, run_survey},
    dictionary::{Dictionary, loader::approve_word},
    game::{GameConfig, config::DEFAULT_MIN_SEED_LENGTH, select_seed},
    moderation::{LogReporter, QueueFileReporter, WordReporter},
    output::{print_analysis_result, print_check_result, print_survey_statistics},
};

#[derive(Parser)]
#[command(
    name = "word_from_word",
    about = "Word-from-word puzzle: build as many words as you can from one long word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Minimum seed word length
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_SEED_LENGTH)]
    min_length: usize,

    /// Minimum playable words a seed should yield
    #[arg(long, global = true, default_value_t = 0)]
    min_words: usize,

    /// Round length in seconds (0 for an untimed round)
    #[arg(short, long, global = true, default_value_t = 420)]
    time_limit: u64,

    /// Append unknown words to this review queue instead of the log
    #[arg(long, global = true)]
    report_queue: Option<PathBuf>,

    /// Seed the random number generator for a repeatable game
    #[arg(long = "seed", global = true, value_name = "N")]
    rng_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive round (default)
    Play,

    /// Report the words, score and rank thresholds of a seed
    Analyze {
        /// Seed word to analyze (picked at random if omitted)
        seed: Option<String>,
    },

    /// Check whether a word counts for a seed
    Check {
        /// The seed word
        seed: String,

        /// The word to check
        word: String,
    },

    /// Survey every eligible seed in the dictionary
    Survey {
        /// Limit number of seeds to scan
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// How many of the richest seeds to list
        #[arg(long, default_value_t = 20)]
        top: usize,
    },

    /// Add a reviewed word to a dictionary file
    Approve {
        /// Dictionary file to update
        file: PathBuf,

        /// The word to add
        word: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let time_limit = (self.time_limit > 0).then(|| Duration::from_secs(self.time_limit));
        GameConfig::new(self.min_length)
            .with_min_valid_words(self.min_words)
            .with_time_limit(time_limit)
    }

    fn rng(&self) -> StdRng {
        self.rng_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    fn reporter(&self) -> Box<dyn WordReporter> {
        match &self.report_queue {
            Some(path) => Box::new(QueueFileReporter::new(path)),
            None => Box::new(LogReporter),
        }
    }
}

/// Load the dictionary named by the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::from_file(path)?,
    };
    debug!("dictionary '{source}' has {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let reporter = cli.reporter();
            run_play(&dictionary, cli.game_config(), reporter.as_ref(), &mut cli.rng())
                .map_err(|e| anyhow!(e))
        }
        Commands::Analyze { seed } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_analyze_command(&cli, seed.as_deref(), &dictionary)
        }
        Commands::Check { seed, word } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let result = check_word(seed, word, &dictionary).map_err(|e| anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Survey { limit, top } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let stats = run_survey(&dictionary, cli.min_length, cli.min_words, *limit, *top);
            print_survey_statistics(&stats);
            Ok(())
        }
        Commands::Approve { file, word } => run_approve_command(file, word),
    }
}

fn run_analyze_command(cli: &Cli, seed: Option<&str>, dictionary: &Dictionary) -> Result<()> {
    let seed = match seed {
        Some(seed) => seed.to_string(),
        None => {
            let selection =
                select_seed(dictionary, cli.min_length, cli.min_words, &mut cli.rng())?;
            selection.seed.text().to_string()
        }
    };

    let result = analyze_seed(&seed, dictionary).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_approve_command(file: &Path, word: &str) -> Result<()> {
    if approve_word(file, word)? {
        println!("✓ Added '{}' to {}", word.trim().to_lowercase(), file.display());
    } else {
        println!("'{}' is already in {}", word.trim().to_lowercase(), file.display());
    }
    Ok(())
}

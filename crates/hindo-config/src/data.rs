use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Input file locations
#[derive(Serialize, Deserialize, Clone)]
pub struct DataConfig {
    /// Frequency CSV, one row per word, most frequent first
    pub frequency_file: PathBuf,
    /// Known-vocabulary export, one word per line; may be absent on disk
    pub vocab_file: PathBuf,
}

impl DataConfig {
    pub fn new() -> Self {
        let frequency_file = env::var("HINDO_FREQUENCY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/clean/word_frequency.csv"));

        let vocab_file = env::var("HINDO_VOCAB_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/clean/wk_vocab.txt"));

        Self {
            frequency_file,
            vocab_file,
        }
    }
}

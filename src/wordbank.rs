//! Word and phrase lists, the answer dictionary, and random draws.
//!
//! Lists are line-oriented UTF-8 text: blank lines and `#` comments are
//! skipped, every other line is trimmed and used verbatim. The dictionary is
//! built once per provider from the word list plus every alphabetic token of
//! every phrase, all lowercased.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::game::GameError;
use crate::info_log;

pub const EMBEDDED_WORDS: &str = include_str!("resources/words_en.txt");
pub const EMBEDDED_PHRASES: &str = include_str!("resources/phrases_en.txt");

pub fn load_lines_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_lines_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Split `text` into maximal alphabetic runs and single non-alphabetic
/// characters, order preserved and case untouched.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            run.push(ch);
        } else {
            if !run.is_empty() {
                tokens.push(std::mem::take(&mut run));
            }
            tokens.push(ch.to_string());
        }
    }
    if !run.is_empty() {
        tokens.push(run);
    }
    tokens
}

/// Supplies random answers and dictionary membership tests.
///
/// Load-once, reuse-many: the lists and dictionary are immutable after
/// construction; only the RNG advances on random draws.
#[derive(Clone, Debug)]
pub struct WordProvider {
    words: Vec<String>,
    phrases: Vec<String>,
    dictionary: HashSet<String>,
    rng: ChaCha8Rng,
}

impl WordProvider {
    /// Provider over the embedded lists, drawing from OS entropy.
    pub fn new() -> Self {
        Self::from_lists(
            load_lines_from_str(EMBEDDED_WORDS),
            load_lines_from_str(EMBEDDED_PHRASES),
        )
    }

    /// Provider over the embedded lists with a reproducible draw sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_lists_seeded(
            load_lines_from_str(EMBEDDED_WORDS),
            load_lines_from_str(EMBEDDED_PHRASES),
            seed,
        )
    }

    pub fn from_lists(words: Vec<String>, phrases: Vec<String>) -> Self {
        Self::build(words, phrases, ChaCha8Rng::from_entropy())
    }

    pub fn from_lists_seeded(words: Vec<String>, phrases: Vec<String>, seed: u64) -> Self {
        Self::build(words, phrases, ChaCha8Rng::seed_from_u64(seed))
    }

    fn build(words: Vec<String>, phrases: Vec<String>, rng: ChaCha8Rng) -> Self {
        let mut dictionary: HashSet<String> =
            words.iter().map(|w| w.to_ascii_lowercase()).collect();
        for phrase in &phrases {
            for token in tokenize(phrase) {
                if token.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    dictionary.insert(token.to_ascii_lowercase());
                }
            }
        }
        info_log!(
            "word provider ready: {} words, {} phrases, {} dictionary entries",
            words.len(),
            phrases.len(),
            dictionary.len()
        );
        Self {
            words,
            phrases,
            dictionary,
            rng,
        }
    }

    pub fn random_word(&mut self) -> Result<String, GameError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::EmptyList("word"))
    }

    pub fn random_phrase(&mut self) -> Result<String, GameError> {
        self.phrases
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::EmptyList("phrase"))
    }

    /// Case-insensitive dictionary membership.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_ascii_lowercase())
    }

    /// Every alphabetic token must be dictionary-resident; non-alphabetic
    /// tokens are always accepted.
    pub fn is_valid_phrase(&self, phrase: &str) -> bool {
        tokenize(phrase)
            .iter()
            .filter(|t| t.chars().all(|ch| ch.is_ascii_alphabetic()))
            .all(|t| self.dictionary.contains(&t.to_ascii_lowercase()))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

impl Default for WordProvider {
    fn default() -> Self {
        Self::new()
    }
}

//! Core hangman game engine: masking, life accounting, win/loss detection.
//!
//! The engine is UI-agnostic and performs no I/O. It owns the answer, the
//! remaining lives, the set of guessed letters, and the game status for one
//! play-through; the console layer renders its observable state.

use std::collections::HashSet;

use crate::debug_log;
use crate::wordbank::WordProvider;

/// Default number of incorrect attempts before the game is lost.
pub const DEFAULT_LIVES: u32 = 6;

/// Glyph shown for characters the player has not revealed yet.
const MASK: char = '_';

/// Punctuation accepted in a single-word answer without forcing phrase
/// validation. Intentionally narrower than what the phrase tokenizer accepts.
const ANSWER_PUNCTUATION: [char; 6] = ['-', '\'', '!', ',', '.', '?'];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid answer: {0}")]
    InvalidAnswer(&'static str),

    #[error("guess must be a single alphabetic character")]
    InvalidGuess,

    #[error("{0} list is empty")]
    EmptyList(&'static str),
}

/// How non-alphabetic characters render in the masked view.
///
/// The win condition is unaffected: it depends only on alphabetic coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaskingPolicy {
    /// Mask letters only; punctuation and spaces stay visible.
    #[default]
    LettersOnly,
    /// Mask everything except spaces.
    AllChars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Stateful hangman game for a single answer.
///
/// Constructed through [`Game::new`] or the level factories; an invalid
/// answer never produces a partially-built game.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    answer: String,
    lives: u32,
    masking: MaskingPolicy,
    guessed: HashSet<char>,
    status: Status,
}

impl Game {
    /// Validate `answer` against the provider's dictionary and start a game.
    ///
    /// An answer containing a space, or any character outside letters, spaces,
    /// and the allowed punctuation set, is validated as a phrase; anything
    /// else is validated as a single word.
    pub fn new(
        answer: &str,
        lives: u32,
        masking: MaskingPolicy,
        provider: &WordProvider,
    ) -> Result<Self, GameError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(GameError::InvalidAnswer("answer must be non-empty"));
        }
        let phrase_shaped = answer.contains(' ')
            || answer
                .chars()
                .any(|ch| !ch.is_ascii_alphabetic() && ch != ' ' && !ANSWER_PUNCTUATION.contains(&ch));
        if phrase_shaped {
            if !provider.is_valid_phrase(answer) {
                return Err(GameError::InvalidAnswer("phrase not found in dictionary"));
            }
        } else if !provider.is_valid_word(answer) {
            return Err(GameError::InvalidAnswer("word not found in dictionary"));
        }
        Ok(Self {
            answer: answer.to_string(),
            lives,
            masking,
            guessed: HashSet::new(),
            status: Status::InProgress,
        })
    }

    /// Start a basic game with a random single word from the provider.
    pub fn new_basic(provider: &mut WordProvider, lives: u32) -> Result<Self, GameError> {
        let answer = provider.random_word()?;
        Self::new(&answer, lives, MaskingPolicy::default(), provider)
    }

    /// Start an intermediate game with a random phrase from the provider.
    pub fn new_intermediate(provider: &mut WordProvider, lives: u32) -> Result<Self, GameError> {
        let answer = provider.random_phrase()?;
        Self::new(&answer, lives, MaskingPolicy::default(), provider)
    }

    /// Render the answer with unrevealed characters masked.
    ///
    /// One output character per answer character, original case preserved.
    pub fn masked(&self) -> String {
        self.answer
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    if self.guessed.contains(&ch.to_ascii_lowercase()) {
                        ch
                    } else {
                        MASK
                    }
                } else {
                    match self.masking {
                        MaskingPolicy::LettersOnly => ch,
                        MaskingPolicy::AllChars => {
                            if ch == ' ' {
                                ch
                            } else {
                                MASK
                            }
                        }
                    }
                }
            })
            .collect()
    }

    /// Apply a guess. Returns `Ok(true)` if the letter occurs in the answer.
    ///
    /// On a finished game any input returns `Ok(false)` untouched; the
    /// single-alphabetic-character check only runs while the game is live.
    /// Re-guessing a known letter is a free no-op.
    pub fn guess(&mut self, input: &str) -> Result<bool, GameError> {
        if self.status != Status::InProgress {
            return Ok(false);
        }
        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(GameError::InvalidGuess);
        };
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidGuess);
        }
        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return Ok(false);
        }
        if self.normalized_answer().contains(letter) {
            if self.all_revealed() {
                self.status = Status::Won;
                debug_log!("game won with {} lives left", self.lives);
            }
            return Ok(true);
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = Status::Lost;
            debug_log!("game lost on letter '{letter}'");
        }
        Ok(false)
    }

    /// Deduct a life because the per-guess deadline elapsed.
    pub fn timeout_penalty(&mut self) {
        if self.status != Status::InProgress {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = Status::Lost;
            debug_log!("game lost on timeout");
        }
    }

    fn all_revealed(&self) -> bool {
        self.answer
            .chars()
            .filter(char::is_ascii_alphabetic)
            .all(|ch| self.guessed.contains(&ch.to_ascii_lowercase()))
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn remaining_lives(&self) -> u32 {
        self.lives
    }

    /// Guessed letters in sorted order for display.
    pub fn used_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Lowercase form of the answer, the form guesses are matched against.
    pub fn normalized_answer(&self) -> String {
        self.answer.to_ascii_lowercase()
    }
}

//! Command-line options and the interactive console loop.

use std::io::{self, BufRead};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::game::{DEFAULT_LIVES, Game, MaskingPolicy, Status};
use crate::timer::prompt_with_timeout;
use crate::wordbank::{
    EMBEDDED_PHRASES, EMBEDDED_WORDS, WordProvider, load_lines_from_file, load_lines_from_str,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (replaces the built-in one)
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<String>,

    /// Path to a newline-delimited phrase list (replaces the built-in one)
    #[arg(short = 'p', long = "phrases")]
    pub phrases_path: Option<String>,

    /// Starting number of lives
    #[arg(short = 'l', long = "lives", default_value_t = DEFAULT_LIVES)]
    pub lives: u32,

    /// Seconds allowed per guess
    #[arg(short = 't', long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Seed the word selection for a reproducible game
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Mask punctuation in addition to letters
    #[arg(long = "mask-all")]
    pub mask_all: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Basic,
    Intermediate,
}

/// Show the welcome menu and read `1` or `2`, re-prompting on anything else.
pub fn choose_level<R: BufRead>(reader: &mut R) -> io::Result<Level> {
    println!("Welcome to Hangman!\n");
    println!("Choose level: 1) Basic (single word)  2) Intermediate (phrase)\n");
    loop {
        println!("Enter 1 or 2:");
        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a level was chosen",
            ));
        }
        match input.trim() {
            "1" => return Ok(Level::Basic),
            "2" => return Ok(Level::Intermediate),
            _ => println!("Please enter 1 or 2.\n"),
        }
    }
}

/// Space out a masked string for readability: `__a__` -> `_ _ a _ _`.
#[must_use]
pub fn spaced(masked: &str) -> String {
    let chars: Vec<String> = masked.chars().map(|ch| ch.to_string()).collect();
    chars.join(" ")
}

fn format_used_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        "(none)".to_string()
    } else {
        let parts: Vec<String> = letters.iter().map(|ch| ch.to_string()).collect();
        parts.join(" ")
    }
}

fn build_provider(cli: &Cli) -> anyhow::Result<WordProvider> {
    let words = match &cli.words_path {
        Some(path) => load_lines_from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'"))?,
        None => load_lines_from_str(EMBEDDED_WORDS),
    };
    let phrases = match &cli.phrases_path {
        Some(path) => load_lines_from_file(path)
            .with_context(|| format!("failed to load phrase list from '{path}'"))?,
        None => load_lines_from_str(EMBEDDED_PHRASES),
    };
    Ok(match cli.seed {
        Some(seed) => WordProvider::from_lists_seeded(words, phrases, seed),
        None => WordProvider::from_lists(words, phrases),
    })
}

/// Run one interactive game from menu to outcome.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut provider = build_provider(cli)?;
    println!(
        "Loaded {} words and {} phrases.\n",
        provider.word_count(),
        provider.phrase_count()
    );

    let stdin = io::stdin();
    let level = choose_level(&mut stdin.lock())?;

    let masking = if cli.mask_all {
        MaskingPolicy::AllChars
    } else {
        MaskingPolicy::LettersOnly
    };
    let answer = match level {
        Level::Basic => provider.random_word()?,
        Level::Intermediate => provider.random_phrase()?,
    };
    let mut game = Game::new(&answer, cli.lives, masking, &provider)
        .context("the drawn answer failed dictionary validation")?;

    println!("\nLives: {}", game.remaining_lives());
    println!(
        "Guess letters. You have {} seconds per guess.\n",
        cli.timeout_secs
    );

    let deadline = Duration::from_secs(cli.timeout_secs);
    while game.status() == Status::InProgress {
        println!("Word: {}", spaced(&game.masked()));
        println!("Used: {}", format_used_letters(&game.used_letters()));
        let (text, timed_out) = prompt_with_timeout("Enter a letter: ", deadline);
        if timed_out {
            println!("Time's up! You lose a life.\n");
            game.timeout_penalty();
            continue;
        }
        let Some(text) = text else { continue };
        let text = text.trim();
        if text.eq_ignore_ascii_case("quit") {
            println!("\nGoodbye! The answer was: {}", game.answer());
            return Ok(());
        }
        match game.guess(text) {
            Ok(true) => println!("Great! That letter is in the answer.\n"),
            Ok(false) => println!("Nope, wrong guess.\n"),
            Err(err) => println!("Invalid input: {err}\n"),
        }
    }

    if game.status() == Status::Won {
        println!("You WIN! The answer was: {}", game.answer());
    } else {
        println!("Game over. The answer was: {}", game.answer());
    }
    Ok(())
}

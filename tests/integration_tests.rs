// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use std::time::{Duration, Instant};

use hangman::cli::{Level, choose_level, spaced};
use hangman::*;

fn curated_provider(seed: u64) -> WordProvider {
    WordProvider::from_lists_seeded(
        vec![
            "banana".to_string(),
            "apple".to_string(),
            "cherry".to_string(),
        ],
        vec!["data science".to_string(), "unit testing".to_string()],
        seed,
    )
}

#[test]
fn test_end_to_end_basic_game_win() {
    // Provider -> factory -> engine: play a full winning game.
    let mut provider = curated_provider(42);
    let mut game = Game::new_basic(&mut provider, DEFAULT_LIVES).unwrap();
    let answer = game.answer().to_string();

    // Guess every distinct letter of the answer; each must report a hit.
    let mut letters: Vec<char> = answer.chars().collect();
    letters.sort_unstable();
    letters.dedup();
    for letter in letters {
        assert_eq!(game.guess(&letter.to_string()), Ok(true));
    }

    assert_eq!(game.status(), Status::Won);
    assert_eq!(game.masked(), answer);
    assert_eq!(game.remaining_lives(), DEFAULT_LIVES);
}

#[test]
fn test_end_to_end_losing_game() {
    let mut provider = curated_provider(1);
    let mut game = Game::new_basic(&mut provider, 2).unwrap();

    // Neither letter occurs in any curated word.
    assert_eq!(game.guess("x"), Ok(false));
    assert_eq!(game.remaining_lives(), 1);
    assert_eq!(game.guess("q"), Ok(false));
    assert_eq!(game.remaining_lives(), 0);
    assert_eq!(game.status(), Status::Lost);

    // The finished game no longer reacts to anything.
    assert_eq!(game.guess("a"), Ok(false));
    game.timeout_penalty();
    assert_eq!(game.remaining_lives(), 0);
    assert_eq!(game.status(), Status::Lost);
}

#[test]
fn test_phrase_game_keeps_spaces_visible() {
    let mut provider = curated_provider(7);
    let mut game = Game::new_intermediate(&mut provider, DEFAULT_LIVES).unwrap();
    let answer = game.answer().to_string();
    assert!(answer.contains(' '));

    // Before any guess the mask shows exactly the non-letter structure.
    let masked = game.masked();
    assert_eq!(masked.len(), answer.chars().count());
    for (m, a) in masked.chars().zip(answer.chars()) {
        if a.is_ascii_alphabetic() {
            assert_eq!(m, '_');
        } else {
            assert_eq!(m, a);
        }
    }

    // Winning a phrase requires only its letters, not its spaces.
    for letter in answer.chars().filter(|ch| ch.is_ascii_alphabetic()) {
        game.guess(&letter.to_string()).unwrap();
    }
    assert_eq!(game.status(), Status::Won);
    assert_eq!(game.masked(), answer);
}

#[test]
fn test_timeouts_and_wrong_guesses_share_the_life_pool() {
    let provider = curated_provider(3);
    let mut game = Game::new("banana", 3, MaskingPolicy::LettersOnly, &provider).unwrap();

    game.timeout_penalty();
    assert_eq!(game.guess("z"), Ok(false));
    assert_eq!(game.remaining_lives(), 1);
    game.timeout_penalty();
    assert_eq!(game.status(), Status::Lost);
}

#[test]
fn test_dictionary_validation_through_the_full_pipeline() {
    let provider = curated_provider(5);
    assert!(Game::new("banana", 6, MaskingPolicy::LettersOnly, &provider).is_ok());
    assert!(Game::new("data science", 6, MaskingPolicy::LettersOnly, &provider).is_ok());
    assert_eq!(
        Game::new("zzzz", 6, MaskingPolicy::LettersOnly, &provider),
        Err(GameError::InvalidAnswer("word not found in dictionary"))
    );
    assert_eq!(
        Game::new("foo bar baz", 6, MaskingPolicy::LettersOnly, &provider),
        Err(GameError::InvalidAnswer("phrase not found in dictionary"))
    );
}

#[test]
fn test_menu_selection_drives_level_choice() {
    let mut reader = Cursor::new("2\n");
    assert_eq!(choose_level(&mut reader).unwrap(), Level::Intermediate);

    // Invalid entries are re-prompted until a valid one arrives.
    let mut reader = Cursor::new("basic\n0\n1\n");
    assert_eq!(choose_level(&mut reader).unwrap(), Level::Basic);
}

#[test]
fn test_word_lists_load_from_file() {
    use std::fs;

    let path = std::env::temp_dir().join("hangman_integration_words.txt");
    fs::write(&path, "# test list\n\nbanana\n  apple\n#skip\ncherry\n").unwrap();

    let words = load_lines_from_file(&path).unwrap();
    assert_eq!(words, vec!["banana", "apple", "cherry"]);

    let provider = WordProvider::from_lists_seeded(words, Vec::new(), 11);
    assert!(Game::new("apple", 6, MaskingPolicy::LettersOnly, &provider).is_ok());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_embedded_lists_produce_playable_games() {
    // Smoke test against the curated lists shipped with the binary.
    let mut provider = WordProvider::with_seed(13);
    let word = provider.random_word().unwrap();
    Game::new(&word, DEFAULT_LIVES, MaskingPolicy::LettersOnly, &provider).unwrap();
    let phrase = provider.random_phrase().unwrap();
    Game::new(&phrase, DEFAULT_LIVES, MaskingPolicy::LettersOnly, &provider).unwrap();
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = WordProvider::with_seed(99);
    let mut b = WordProvider::with_seed(99);
    assert_eq!(
        Game::new_basic(&mut a, 6).unwrap().answer(),
        Game::new_basic(&mut b, 6).unwrap().answer()
    );
    assert_eq!(
        Game::new_intermediate(&mut a, 6).unwrap().answer(),
        Game::new_intermediate(&mut b, 6).unwrap().answer()
    );
}

#[test]
fn test_bounded_wait_feeds_timeout_penalty() {
    // A never-arriving input source times out quickly, and the timeout flag
    // drives the engine's life accounting.
    let provider = curated_provider(21);
    let mut game = Game::new("apple", 1, MaskingPolicy::LettersOnly, &provider).unwrap();

    let start = Instant::now();
    let (text, timed_out) = wait_for_line(
        || {
            std::thread::sleep(Duration::from_secs(10));
            Ok("too late".to_string())
        },
        Duration::from_millis(100),
    );
    assert!(timed_out);
    assert_eq!(text, None);
    assert!(start.elapsed() < Duration::from_millis(500));

    if timed_out {
        game.timeout_penalty();
    }
    assert_eq!(game.status(), Status::Lost);
}

#[test]
fn test_masked_rendering_for_console() {
    let provider = curated_provider(17);
    let mut game = Game::new("banana", 6, MaskingPolicy::LettersOnly, &provider).unwrap();
    assert_eq!(spaced(&game.masked()), "_ _ _ _ _ _");
    game.guess("a").unwrap();
    assert_eq!(spaced(&game.masked()), "_ a _ a _ a");
}

//! End-to-end games over the public API

use std::fmt::Write as _;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;
use wordle_game::commands::run_game;
use wordle_game::config::Settings;
use wordle_game::core::{Classification, Feedback, Word, WordSize};
use wordle_game::game::{Game, GameState};
use wordle_game::output::RenderStyle;
use wordle_game::wordlists::{self, LIST_SIZE};

/// Write `<size>.txt` holding LIST_SIZE generated words
fn write_list(dir: &Path, size: WordSize) {
    let mut content = String::new();
    for i in 0..LIST_SIZE {
        let mut n = i;
        let word: String = (0..size.len())
            .map(|_| {
                let c = char::from(b'a' + (n % 26) as u8);
                n /= 26;
                c
            })
            .collect();
        writeln!(content, "{word}").unwrap();
    }
    fs::write(wordlists::word_list_path(dir, size), content).unwrap();
}

#[test]
fn seeded_game_from_disk_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let size = WordSize::try_from(6u8).unwrap();
    write_list(dir.path(), size);

    let mut settings = Settings::new(size);
    settings.words_dir = dir.path().to_path_buf();
    settings.seed = Some(2024);

    let words = wordlists::load(&settings.words_dir, size).unwrap();
    let first = Game::draw(&words, &mut settings.rng());
    let second = Game::draw(&words, &mut settings.rng());
    assert_eq!(first.secret(), second.secret());
    assert_eq!(first.secret().len(), 6);
}

#[test]
fn every_size_plays_to_a_win() {
    let dir = tempfile::tempdir().unwrap();
    for size in WordSize::ALL {
        write_list(dir.path(), size);
        let words = Rc::new(wordlists::load(dir.path(), size).unwrap());
        let mut game = Game::draw(&words, &mut rand::rng()).with_dictionary(Rc::clone(&words));
        let secret = game.secret().text().to_string();

        let mut out = Vec::new();
        let state = run_game(
            &mut game,
            &mut Cursor::new(format!("{secret}\n")),
            &mut out,
            RenderStyle::Plain,
        )
        .unwrap();

        assert_eq!(state, GameState::Won);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(&format!(
            "You have {} tries to guess the {size}-letter word",
            size.guess_budget()
        )));
        assert!(out.contains("You won!"));
    }
}

#[test]
fn strict_game_rejects_words_outside_list() {
    let dir = tempfile::tempdir().unwrap();
    let size = WordSize::try_from(5u8).unwrap();
    write_list(dir.path(), size);
    let words = Rc::new(wordlists::load(dir.path(), size).unwrap());
    let mut game = Game::draw(&words, &mut rand::rng()).with_dictionary(Rc::clone(&words));
    let secret = game.secret().text().to_string();

    let mut out = Vec::new();
    run_game(
        &mut game,
        &mut Cursor::new(format!("zzzzz\n{secret}\n")),
        &mut out,
        RenderStyle::Plain,
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("'zzzzz' is not in the word list."));
    assert!(out.contains("Guess 1: "));
    assert_eq!(game.attempts_used(), 1);
}

#[test]
fn exact_plus_close_never_exceeds_secret_count() {
    let words = ["speed", "erase", "allow", "llama", "geese", "eerie", "sassy", "assay"];
    for secret in words {
        for guess in words {
            let secret = Word::new(secret).unwrap();
            let guess = Word::new(guess).unwrap();
            let feedback = Feedback::calculate(&guess, &secret);
            let counts = secret.char_counts();

            for letter in b'a'..=b'z' {
                let scored = guess
                    .chars()
                    .iter()
                    .zip(feedback.classifications())
                    .filter(|&(&g, &c)| g == letter && c != Classification::Absent)
                    .count();
                let available = usize::from(counts.get(&letter).copied().unwrap_or(0));
                assert!(scored <= available, "{guess} vs {secret}");
            }
        }
    }
}

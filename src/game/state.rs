//! One game: a secret word, a guess budget, and the turns played so far

use super::GuessError;
use crate::core::{Feedback, Word, WordSize, WordSizeError};
use crate::wordlists::WordList;
use rand::Rng;
use std::rc::Rc;
use tracing::debug;

/// Settled state of a game between guesses
///
/// Scoring happens entirely inside [`Game::submit`], so it never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Exhausted,
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 1-based attempt number
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// State after this guess
    pub state: GameState,
}

#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    size: WordSize,
    history: Vec<(Word, Feedback)>,
    state: GameState,
    dictionary: Option<Rc<WordList>>,
}

impl Game {
    /// Start a game for `secret`
    ///
    /// # Errors
    /// Returns `WordSizeError` if the secret is not 5 to 8 letters long.
    pub fn new(secret: Word) -> Result<Self, WordSizeError> {
        let size = WordSize::try_from(secret.len() as u64)?;
        Ok(Self {
            secret,
            size,
            history: Vec::with_capacity(size.guess_budget()),
            state: GameState::AwaitingGuess,
            dictionary: None,
        })
    }

    /// Start a game with a secret drawn uniformly from `words`
    pub fn draw<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let size = words.size();
        Self {
            secret: words.random_word(rng).clone(),
            size,
            history: Vec::with_capacity(size.guess_budget()),
            state: GameState::AwaitingGuess,
            dictionary: None,
        }
    }

    /// Reject guesses that are not in `words`
    #[must_use]
    pub fn with_dictionary(mut self, words: Rc<WordList>) -> Self {
        self.dictionary = Some(words);
        self
    }

    /// Validate and score one guess
    ///
    /// Surrounding whitespace is ignored and letters are lowercased.
    /// Rejected guesses leave the game untouched.
    ///
    /// # Errors
    /// See [`GuessError`] for the rejection reasons.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let input = input.trim();
        let found = input.chars().count();
        if found != self.size.len() {
            return Err(GuessError::WrongLength {
                expected: self.size.len(),
                found,
            });
        }

        let guess = Word::new(input)?;

        if self.history.iter().any(|(previous, _)| *previous == guess) {
            return Err(GuessError::AlreadyGuessed(guess));
        }

        if let Some(words) = &self.dictionary
            && !words.contains(&guess)
        {
            return Err(GuessError::NotInWordList(guess));
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.history.push((guess.clone(), feedback.clone()));

        self.state = if feedback.score() == self.size.perfect_score() {
            GameState::Won
        } else if self.history.len() >= self.size.guess_budget() {
            GameState::Exhausted
        } else {
            GameState::AwaitingGuess
        };

        debug!(
            attempt = self.history.len(),
            guess = %guess,
            score = feedback.score(),
            state = ?self.state,
            "scored guess"
        );

        Ok(Turn {
            attempt: self.history.len(),
            guess,
            feedback,
            state: self.state,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::AwaitingGuess)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> WordSize {
        self.size
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.size.guess_budget().saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    fn game(secret: &str) -> Game {
        Game::new(Word::new(secret).unwrap()).unwrap()
    }

    #[test]
    fn new_game_awaits_guess() {
        let game = game("speed");
        assert_eq!(game.state(), GameState::AwaitingGuess);
        assert_eq!(game.size().len(), 5);
        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.history().is_empty());
    }

    #[test]
    fn rejects_unsupported_secret_length() {
        assert!(Game::new(Word::new("abcd").unwrap()).is_err());
        assert!(Game::new(Word::new("abcdefghi").unwrap()).is_err());
    }

    #[test]
    fn win_on_first_guess() {
        let mut game = game("speed");
        let turn = game.submit("speed").unwrap();
        assert_eq!(turn.attempt, 1);
        assert_eq!(turn.feedback.score(), 10);
        assert_eq!(turn.state, GameState::Won);
        assert!(game.is_over());
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut game = game("speed");
        let turn = game.submit("  SPEED\n").unwrap();
        assert_eq!(turn.state, GameState::Won);
    }

    #[test]
    fn exhausted_after_budget() {
        let mut game = game("speed");
        let misses = ["crane", "slate", "audio", "bumpy", "fight", "joker"];
        for (i, guess) in misses.iter().enumerate() {
            let turn = game.submit(guess).unwrap();
            assert_eq!(turn.attempt, i + 1);
            let expected = if i + 1 == misses.len() {
                GameState::Exhausted
            } else {
                GameState::AwaitingGuess
            };
            assert_eq!(turn.state, expected);
        }
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.submit("speed"), Err(GuessError::GameOver));
    }

    #[test]
    fn win_on_last_guess_is_a_win() {
        let mut game = game("speed");
        for guess in ["crane", "slate", "audio", "bumpy", "fight"] {
            game.submit(guess).unwrap();
        }
        assert_eq!(game.submit("speed").unwrap().state, GameState::Won);
    }

    #[test]
    fn wrong_length_does_not_consume_budget() {
        let mut game = game("speed");
        assert_eq!(
            game.submit("spee"),
            Err(GuessError::WrongLength {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn non_letters_rejected() {
        let mut game = game("speed");
        assert_eq!(
            game.submit("sp3ed"),
            Err(GuessError::InvalidWord(WordError::InvalidCharacters))
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn repeated_guess_rejected() {
        let mut game = game("speed");
        game.submit("crane").unwrap();
        assert_eq!(
            game.submit("CRANE"),
            Err(GuessError::AlreadyGuessed(Word::new("crane").unwrap()))
        );
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn dictionary_rejects_unknown_words() {
        let size = WordSize::try_from(5u8).unwrap();
        let words = WordList::from_words(size, ["speed", "crane"].map(|w| Word::new(w).unwrap()))
            .unwrap();
        let mut game = Game::new(Word::new("speed").unwrap())
            .unwrap()
            .with_dictionary(Rc::new(words));

        assert_eq!(
            game.submit("zzzzz"),
            Err(GuessError::NotInWordList(Word::new("zzzzz").unwrap()))
        );
        assert!(game.submit("crane").is_ok());
    }

    #[test]
    fn draw_picks_from_list() {
        use rand::SeedableRng;
        let size = WordSize::try_from(6u8).unwrap();
        let words =
            WordList::from_words(size, ["banana", "cherry"].map(|w| Word::new(w).unwrap()))
                .unwrap();
        let game = Game::draw(&words, &mut rand::rngs::StdRng::seed_from_u64(5));
        assert_eq!(game.size(), size);
        assert_eq!(game.attempts_remaining(), 7);
        assert!(words.contains(game.secret()));
    }

    #[test]
    fn history_keeps_feedback() {
        let mut game = game("speed");
        game.submit("erase").unwrap();
        let (guess, feedback) = &game.history()[0];
        assert_eq!(guess.text(), "erase");
        assert_eq!(feedback.score(), 3);
    }
}

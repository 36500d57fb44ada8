//! Game state machine
//!
//! A game owns its solution and guess history. It starts `Playing` and moves
//! at most once, to `Won` or `Lost`; after that every submission is refused.

use super::GameConfig;
use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use crate::error::{GameError, GuessError};
use log::{debug, info, trace, warn};
use rand::Rng;
use std::fmt;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("playing"),
            Self::Won => f.write_str("won"),
            Self::Lost => f.write_str("lost"),
        }
    }
}

/// Outcome of a finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub solution: Word,
    pub attempts_used: usize,
    pub status: GameStatus,
    pub history: Vec<Guess>,
}

/// One game against a hidden solution
#[derive(Debug)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    config: GameConfig,
    solution: Word,
    attempts_used: usize,
    submissions: usize,
    history: Vec<Guess>,
    status: GameStatus,
}

impl<'d> Game<'d> {
    /// Start a game with a solution drawn from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` for an unplayable config, or
    /// `GameError::Dictionary` if there is nothing to draw.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordy::dictionary::Dictionary;
    /// use wordy::game::{Game, GameConfig, GameStatus};
    ///
    /// let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let game = Game::new(&dictionary, GameConfig::default(), &mut rng).unwrap();
    ///
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert!(dictionary.contains(game.solution()));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'d Dictionary,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let solution = dictionary.random_word(rng)?.clone();
        Ok(Self::start(dictionary, config, solution))
    }

    /// Start a game with a known solution
    ///
    /// The solution goes through the same checks as a guess.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidSolution` if `solution` is not a dictionary
    /// word of the right length, or `GameError::InvalidConfig`.
    pub fn with_solution(
        dictionary: &'d Dictionary,
        config: GameConfig,
        solution: &str,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let solution = check_word(dictionary, solution).map_err(GameError::InvalidSolution)?;
        Ok(Self::start(dictionary, config, solution))
    }

    fn start(dictionary: &'d Dictionary, config: GameConfig, solution: Word) -> Self {
        debug!(
            "New game: {} letters, {} attempts, {} feedback",
            solution.len(),
            config.max_attempts,
            config.feedback
        );
        trace!("Solution is {solution}");
        Self {
            dictionary,
            config,
            solution,
            attempts_used: 0,
            submissions: 0,
            history: Vec::with_capacity(config.max_attempts),
            status: GameStatus::Playing,
        }
    }

    /// Submit a guess
    ///
    /// A valid guess consumes an attempt, is recorded, scored and returned,
    /// win or lose. Invalid guesses are rejected without touching the
    /// attempt count or history. Every submission counts toward the hard
    /// ceiling; exceeding it loses the game.
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` once the game has finished
    /// - `GuessError::AttemptCeilingExceeded` when this submission trips the ceiling
    /// - the advisory variants (`GuessError::is_invalid_guess`) for a bad word
    pub fn submit_guess(&mut self, raw: &str) -> Result<Guess, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver(self.status));
        }

        self.submissions += 1;
        if self.submissions > self.config.attempt_ceiling {
            warn!(
                "Attempt ceiling of {} exceeded, game lost",
                self.config.attempt_ceiling
            );
            self.status = GameStatus::Lost;
            return Err(GuessError::AttemptCeilingExceeded {
                ceiling: self.config.attempt_ceiling,
            });
        }

        let word = self.validate(raw).inspect_err(|e| {
            debug!("Rejected guess {raw:?}: {e}");
        })?;

        self.attempts_used += 1;
        let guess = Guess::scored(self.config.feedback, &self.solution, word);
        self.history.push(guess.clone());
        debug!(
            "Attempt {}/{}: {guess}",
            self.attempts_used, self.config.max_attempts
        );

        if guess.word() == &self.solution {
            self.status = GameStatus::Won;
            info!("Won in {} attempts", self.attempts_used);
        } else if self.attempts_used >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            info!("Lost after {} attempts", self.attempts_used);
        }

        Ok(guess)
    }

    /// Give up: a playing game becomes lost, a finished one is unchanged
    pub fn resign(&mut self) {
        if !self.status.is_terminal() {
            info!("Resigned after {} attempts", self.attempts_used);
            self.status = GameStatus::Lost;
        }
    }

    fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        let word = check_word(self.dictionary, raw)?;
        if self.history.iter().any(|g| g.word() == &word) {
            return Err(GuessError::AlreadyGuessed(word));
        }
        Ok(word)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Valid guesses still allowed
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of the result so far
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            solution: self.solution.clone(),
            attempts_used: self.attempts_used,
            status: self.status,
            history: self.history.clone(),
        }
    }

    /// Consume the game into its summary
    #[must_use]
    pub fn into_summary(self) -> GameSummary {
        GameSummary {
            solution: self.solution,
            attempts_used: self.attempts_used,
            status: self.status,
            history: self.history,
        }
    }
}

/// Normalize `raw` and check it is a dictionary word of the right length
fn check_word(dictionary: &Dictionary, raw: &str) -> Result<Word, GuessError> {
    let word = Word::new(raw)?;
    if word.len() != dictionary.word_length() {
        return Err(GuessError::WrongLength {
            expected: dictionary.word_length(),
            actual: word.len(),
            word,
        });
    }
    if !dictionary.contains(&word) {
        return Err(GuessError::NotInDictionary(word));
    }
    Ok(word)
}

//! Game configuration

use crate::core::FeedbackRule;
use crate::error::GameError;

/// Settings shared by every game a caller creates
///
/// Word length is not part of the config: it belongs to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Valid guesses allowed before the game is lost
    pub max_attempts: usize,
    /// Hard cap on submissions of any kind, valid or not
    pub attempt_ceiling: usize,
    /// Duplicate-letter rule used for feedback
    pub feedback: FeedbackRule,
}

impl GameConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
    pub const DEFAULT_ATTEMPT_CEILING: usize = 50;

    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            attempt_ceiling: Self::DEFAULT_ATTEMPT_CEILING,
            feedback: FeedbackRule::Approximate,
        }
    }

    #[must_use]
    pub const fn with_attempt_ceiling(mut self, attempt_ceiling: usize) -> Self {
        self.attempt_ceiling = attempt_ceiling;
        self
    }

    #[must_use]
    pub const fn with_feedback(mut self, feedback: FeedbackRule) -> Self {
        self.feedback = feedback;
        self
    }

    /// Check the settings can produce a playable game
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if `max_attempts` is zero or the
    /// ceiling is below the attempt budget.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.attempt_ceiling < self.max_attempts {
            return Err(GameError::InvalidConfig(format!(
                "attempt_ceiling ({}) must not be below max_attempts ({})",
                self.attempt_ceiling, self.max_attempts
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

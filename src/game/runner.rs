//! Automated play loop
//!
//! Feeds a guesser's proposals into a game until it finishes.

use super::{Game, GameStatus, GameSummary};
use crate::solver::{Constraints, Guesser};
use log::{debug, warn};

/// Play `game` to completion with `guesser`
///
/// Each turn the candidate set is recomputed from the history and handed to
/// the guesser. Rejected proposals are retried; the game's attempt ceiling
/// stops a guesser that never produces an acceptable word. A guesser with
/// nothing to propose forfeits the game.
///
/// # Examples
/// ```
/// use wordy::dictionary::Dictionary;
/// use wordy::game::{Game, GameConfig, GameStatus, play_game};
/// use wordy::solver::FirstCandidateGuesser;
///
/// let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
/// let mut game = Game::with_solution(&dictionary, GameConfig::default(), "stats").unwrap();
///
/// let summary = play_game(&mut game, &mut FirstCandidateGuesser);
/// assert_eq!(summary.status, GameStatus::Won);
/// assert_eq!(summary.attempts_used, 4); // CRANE, SMART, START, STATS
/// ```
pub fn play_game<G: Guesser + ?Sized>(game: &mut Game<'_>, guesser: &mut G) -> GameSummary {
    while game.status() == GameStatus::Playing {
        let candidates = Constraints::from_history(game.history()).filter(game.dictionary());
        debug!("{} candidates remain", candidates.len());

        let Some(proposal) = guesser.propose(&candidates, game.history()) else {
            warn!("Guesser has no proposal with {} candidates", candidates.len());
            game.resign();
            break;
        };

        match game.submit_guess(proposal.as_str()) {
            Ok(guess) => debug!("Guesser played {guess}"),
            Err(e) => debug!("Guesser proposal {proposal} refused: {e}"),
        }
    }

    game.summary()
}

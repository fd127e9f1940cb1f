//! The contract a game must satisfy to be searched

use std::fmt::Debug;

use crate::{error::RulesError, grid::Grid, player::*};

/// Position score, always on the same scale: higher is better for [`Player::Max`]
pub type Score = i32;

/// Score of a position that is certainly lost for [`Player::Max`]
pub const MIN_SCORE: Score = Score::MIN;
/// Score of a position that is certainly won for [`Player::Max`]
pub const MAX_SCORE: Score = Score::MAX;

/// The capabilities a two-player, zero-sum, perfect-information game
/// provides to the search
///
/// Implementations are stateless apart from read-only tables, so one rules
/// value can be shared by every branch of a search. States are values:
/// [`GameRules::apply`] returns a fresh successor and never edits its input.
pub trait GameRules {
    type State: Clone + Debug;
    type Action: Copy + Eq + Debug;

    /// The starting position, with every cell empty
    fn initial_state(&self) -> Self::State;

    /// The player to move, derived from how many cells are occupied
    ///
    /// Fails with [`RulesError::InvalidState`] when the grid is full or the
    /// token counts cannot come from alternating play.
    fn next_player(&self, state: &Self::State) -> Result<Player, RulesError>;

    /// The result of the game, or `None` while it is still going
    ///
    /// Winning alignments take priority over a full grid.
    fn outcome(&self, state: &Self::State) -> Option<Outcome>;

    /// Every playable action, in a deterministic board-scan order
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state after the player to move performs `action`
    ///
    /// Fails with [`RulesError::InvalidAction`] when the action is out of
    /// range or its target cell is taken.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State, RulesError>;

    /// Static value of a position, on the [`Score`] scale
    fn evaluate(&self, state: &Self::State) -> Result<Score, RulesError>;
}

/// The player whose turn it is after `occupied` moves: Min opens the game
pub(crate) fn player_for_move_count(occupied: usize) -> Player {
    if occupied % 2 == 0 {
        Player::Min
    } else {
        Player::Max
    }
}

/// Turn-parity check shared by the grid games
pub(crate) fn next_player_on<const ROWS: usize, const COLS: usize>(
    grid: &Grid<ROWS, COLS>,
) -> Result<Player, RulesError> {
    let occupied = grid.occupied();
    if occupied >= ROWS * COLS {
        return Err(RulesError::InvalidState(
            "the grid is full, there is no next player".to_string(),
        ));
    }

    let min_tokens = grid.count(Player::Min);
    let max_tokens = grid.count(Player::Max);
    if min_tokens < max_tokens || min_tokens > max_tokens + 1 {
        return Err(RulesError::InvalidState(format!(
            "{} Min tokens and {} Max tokens cannot come from alternating play",
            min_tokens, max_tokens
        )));
    }

    Ok(player_for_move_count(occupied))
}

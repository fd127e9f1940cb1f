//! Minimax search with alpha-beta pruning over any [`GameRules`]

use crate::{error::RulesError, player::Player, rules::*};

/// Depth budget large enough that the search only ever stops at finished games
pub const UNBOUNDED_DEPTH: u32 = u32::MAX;

/// A depth-bounded minimax searcher
///
/// # Notes
/// The searcher holds no position of its own: every call receives a state,
/// builds its successors as fresh values and drops them when it returns. The
/// only thing carried between calls is the node counter.
///
/// # Position Scoring
/// Scores are always on the Max/Min scale of [`Score`]. A search stops at a
/// finished game or when its depth budget runs out, and asks the rules for
/// [`GameRules::evaluate`] there.
pub struct Solver<'r, R: GameRules> {
    rules: &'r R,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'r, R: GameRules> Solver<'r, R> {
    /// Creates a new `Solver` for a rule set
    pub fn new(rules: &'r R) -> Self {
        Self {
            rules,
            node_count: 0,
        }
    }

    /// Performs game tree search
    ///
    /// Returns the score of `state` looking at most `depth` moves ahead.
    /// `alpha` is the best score Max can already guarantee higher up the
    /// tree and `beta` the best Min can guarantee.
    pub fn minimax(
        &mut self,
        state: &R::State,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, RulesError> {
        self.node_count += 1;

        if depth == 0 || self.rules.outcome(state).is_some() {
            return self.rules.evaluate(state);
        }

        let actions = self.rules.legal_actions(state);
        match self.rules.next_player(state)? {
            Player::Max => {
                let mut value = MIN_SCORE;
                for action in actions {
                    let next = self.rules.apply(state, action)?;
                    value = value.max(self.minimax(&next, depth - 1, alpha, beta)?);
                    alpha = alpha.max(value);
                    // Min will never let the game reach this node
                    if value >= beta {
                        break;
                    }
                }
                Ok(value)
            }
            Player::Min => {
                let mut value = MAX_SCORE;
                for action in actions {
                    let next = self.rules.apply(state, action)?;
                    value = value.min(self.minimax(&next, depth - 1, alpha, beta)?);
                    beta = beta.min(value);
                    // Max will never let the game reach this node
                    if value <= alpha {
                        break;
                    }
                }
                Ok(value)
            }
        }
    }
}

/// Scores `state` with a fresh [`Solver`]
pub fn minimax<R: GameRules>(
    rules: &R,
    state: &R::State,
    depth: u32,
    alpha: Score,
    beta: Score,
) -> Result<Score, RulesError> {
    Solver::new(rules).minimax(state, depth, alpha, beta)
}

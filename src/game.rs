//! A game session: the current position plus the moves that advance it

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

use crate::{error::RulesError, player::*, rules::*, solver::Solver};

/// Holds the current state of one game and plays moves on it
///
/// The state is only ever replaced by a successor computed by the rules;
/// a failed move leaves it as it was.
pub struct Game<R: GameRules> {
    rules: R,
    state: R::State,
    depth: u32,
}

impl<R: GameRules> Game<R> {
    /// Starts a game from the rules' empty grid, searching `depth` moves ahead
    pub fn new(rules: R, depth: u32) -> Self {
        let state = rules.initial_state();
        Self::from_state(rules, state, depth)
    }

    /// Resumes a game from an existing position
    pub fn from_state(rules: R, state: R::State, depth: u32) -> Self {
        Self {
            rules,
            state,
            depth,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn current_outcome(&self) -> Option<Outcome> {
        self.rules.outcome(&self.state)
    }

    pub fn current_player(&self) -> Result<Player, RulesError> {
        self.rules.next_player(&self.state)
    }

    pub fn legal_actions(&self) -> Vec<R::Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Plays `action` for the player to move
    pub fn play(&mut self, action: R::Action) -> Result<(), RulesError> {
        self.state = self.rules.apply(&self.state, action)?;
        Ok(())
    }

    /// Finds the best action for the player to move
    ///
    /// Each successor is scored with a full-window search. Max takes the
    /// highest score and Min the lowest; on a tie the earliest action in
    /// [`GameRules::legal_actions`] order wins.
    pub fn optimal_action(&self) -> Result<R::Action, RulesError> {
        if self.current_outcome().is_some() {
            return Err(RulesError::GameOver);
        }
        let player = self.current_player()?;
        let mut solver = Solver::new(&self.rules);

        let mut best: Option<(R::Action, Score)> = None;
        for action in self.legal_actions() {
            let next = self.rules.apply(&self.state, action)?;
            let score = solver.minimax(&next, self.depth, MIN_SCORE, MAX_SCORE)?;
            debug!(?action, score, "scored candidate");

            let better = match best {
                None => true,
                Some((_, best_score)) => match player {
                    Player::Max => score > best_score,
                    Player::Min => score < best_score,
                },
            };
            if better {
                best = Some((action, score));
            }
        }
        trace!(nodes = solver.node_count, "search finished");

        let (action, score) = best.ok_or(RulesError::GameOver)?;
        debug!(?action, score, %player, "selected action");
        Ok(action)
    }

    /// Plays the best action for the player to move and returns it
    pub fn play_optimal(&mut self) -> Result<R::Action, RulesError> {
        let action = self.optimal_action()?;
        self.play(action)?;
        Ok(action)
    }

    /// Plays an action chosen uniformly at random and returns it
    pub fn play_random<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<R::Action, RulesError> {
        if self.current_outcome().is_some() {
            return Err(RulesError::GameOver);
        }
        let action = *self
            .legal_actions()
            .choose(rng)
            .ok_or(RulesError::GameOver)?;
        debug!(?action, "selected random action");
        self.play(action)?;
        Ok(action)
    }
}

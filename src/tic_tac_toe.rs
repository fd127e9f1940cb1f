//! Rules for the 3×3 row/column/diagonal game
//!
//! The game is small enough to be solved outright, so positions are only
//! ever scored exactly: +1, -1 or 0 at a finished game.

use crate::{error::RulesError, grid::Grid, player::*, rules::*};

/// Side length of the board
pub const SIZE: usize = 3;

pub type TicTacToeState = Grid<SIZE, SIZE>;

/// A move: the coordinates of the cell to claim
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

const fn p(row: usize, column: usize) -> Position {
    Position::new(row, column)
}

/// The eight winning triples: rows, then columns, then diagonals
const LINES: [[Position; SIZE]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

#[derive(Clone, Debug)]
pub struct TicTacToeRules {
    lines: &'static [[Position; SIZE]],
}

impl TicTacToeRules {
    pub fn new() -> Self {
        Self { lines: &LINES }
    }

    /// The player owning a complete line, if any
    fn winner(&self, state: &TicTacToeState) -> Option<Player> {
        self.lines.iter().find_map(|line| {
            let first = state.get(line[0].row, line[0].column)?;
            if line
                .iter()
                .all(|cell| state.get(cell.row, cell.column) == Some(first))
            {
                Some(first)
            } else {
                None
            }
        })
    }
}

impl Default for TicTacToeRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for TicTacToeRules {
    type State = TicTacToeState;
    type Action = Position;

    fn initial_state(&self) -> TicTacToeState {
        Grid::new()
    }

    fn next_player(&self, state: &TicTacToeState) -> Result<Player, RulesError> {
        next_player_on(state)
    }

    fn outcome(&self, state: &TicTacToeState) -> Option<Outcome> {
        if let Some(player) = self.winner(state) {
            return Some(Outcome::win_for(player));
        }
        if state.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn legal_actions(&self, state: &TicTacToeState) -> Vec<Position> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| Position::new(row, column)))
            .filter(|position| state.is_empty_at(position.row, position.column))
            .collect()
    }

    fn apply(&self, state: &TicTacToeState, action: Position) -> Result<TicTacToeState, RulesError> {
        let Position { row, column } = action;
        if !TicTacToeState::in_bounds(row, column) {
            return Err(RulesError::InvalidAction(format!(
                "coordinates ({}, {}) are out of the grid",
                row, column
            )));
        }
        if !state.is_empty_at(row, column) {
            return Err(RulesError::InvalidAction(format!(
                "the cell ({}, {}) is not empty",
                row, column
            )));
        }
        let player = self.next_player(state)?;
        Ok(state.with(row, column, player))
    }

    /// Exact value of a finished game; fails on a game still in progress
    fn evaluate(&self, state: &TicTacToeState) -> Result<Score, RulesError> {
        match self.outcome(state) {
            Some(Outcome::MaxWins) => Ok(1),
            Some(Outcome::MinWins) => Ok(-1),
            Some(Outcome::Draw) => Ok(0),
            None => Err(RulesError::PreconditionViolated(
                "cannot determine the value of a non terminal state".to_string(),
            )),
        }
    }
}

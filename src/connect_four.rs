//! Rules for the 6×7 four-in-a-row drop game
//!
//! Tokens fall to the lowest empty row of the chosen column. The game is
//! too large to solve by brute force, so positions at the search horizon
//! are scored with a windowed heuristic.

use crate::{error::RulesError, grid::Grid, player::*, rules::*};

/// The number of rows of the board
pub const ROWS: usize = 6;
/// The number of columns of the board
pub const COLUMNS: usize = 7;
/// The length of a winning alignment
pub const CONNECT: usize = 4;
/// The column taking part in the most alignments
pub const CENTER_COLUMN: usize = COLUMNS / 2;

/// Bonus per token of the scored player in the center column
pub const CENTER_WEIGHT: Score = 6;
/// A window entirely held by the scored player
pub const FOUR_WEIGHT: Score = 100;
/// Three tokens and one empty cell
pub const THREE_WEIGHT: Score = 10;
/// Two tokens and two empty cells
pub const TWO_WEIGHT: Score = 5;
/// Penalty when the opponent has three tokens and one empty cell in a window
pub const OPPONENT_THREE_PENALTY: Score = 80;

pub type ConnectFourState = Grid<ROWS, COLUMNS>;

/// Scan directions as (row step, column step): horizontal, vertical,
/// descending diagonal, ascending diagonal
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Clone, Debug)]
pub struct ConnectFourRules {
    // every maximal line of at least CONNECT cells, grouped by direction
    lines: Vec<Vec<(usize, usize)>>,
}

impl ConnectFourRules {
    pub fn new() -> Self {
        let step = |row: usize, column: usize, (dr, dc): (isize, isize)| {
            let (row, column) = (row as isize + dr, column as isize + dc);
            if row < 0 || column < 0 || row >= ROWS as isize || column >= COLUMNS as isize {
                None
            } else {
                Some((row as usize, column as usize))
            }
        };

        let mut lines = Vec::new();
        for &direction in DIRECTIONS.iter() {
            let backwards = (-direction.0, -direction.1);
            for row in 0..ROWS {
                for column in 0..COLUMNS {
                    // only start a line at a cell with no predecessor
                    if step(row, column, backwards).is_some() {
                        continue;
                    }
                    let mut line = vec![(row, column)];
                    let mut current = (row, column);
                    while let Some(next) = step(current.0, current.1, direction) {
                        line.push(next);
                        current = next;
                    }
                    if line.len() >= CONNECT {
                        lines.push(line);
                    }
                }
            }
        }
        Self { lines }
    }

    /// Lowest empty row of a column, or `None` when the column is full
    fn landing_row(state: &ConnectFourState, column: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| state.is_empty_at(row, column))
    }

    /// Scans every line with one streak counter per player
    fn winner(&self, state: &ConnectFourState) -> Option<Player> {
        for line in &self.lines {
            let (mut max_streak, mut min_streak) = (0, 0);
            for &(row, column) in line {
                match state.get(row, column) {
                    Some(Player::Max) => {
                        max_streak += 1;
                        min_streak = 0;
                    }
                    Some(Player::Min) => {
                        min_streak += 1;
                        max_streak = 0;
                    }
                    None => {
                        max_streak = 0;
                        min_streak = 0;
                    }
                }
                if max_streak == CONNECT {
                    return Some(Player::Max);
                }
                if min_streak == CONNECT {
                    return Some(Player::Min);
                }
            }
        }
        None
    }

    /// Heuristic worth of the position for `player` alone
    pub fn score_position(&self, state: &ConnectFourState, player: Player) -> Score {
        let center_tokens = (0..ROWS)
            .filter(|&row| state.get(row, CENTER_COLUMN) == Some(player))
            .count() as Score;

        let windows: Score = self
            .lines
            .iter()
            .flat_map(|line| line.windows(CONNECT))
            .map(|window| Self::score_window(state, window, player))
            .sum();

        center_tokens * CENTER_WEIGHT + windows
    }

    fn score_window(state: &ConnectFourState, window: &[(usize, usize)], player: Player) -> Score {
        let (mut own, mut opponent, mut empty) = (0, 0, 0);
        for &(row, column) in window {
            match state.get(row, column) {
                Some(cell) if cell == player => own += 1,
                Some(_) => opponent += 1,
                None => empty += 1,
            }
        }

        let mut score = match (own, empty) {
            (4, _) => FOUR_WEIGHT,
            (3, 1) => THREE_WEIGHT,
            (2, 2) => TWO_WEIGHT,
            _ => 0,
        };
        if opponent == 3 && empty == 1 {
            score -= OPPONENT_THREE_PENALTY;
        }
        score
    }
}

impl Default for ConnectFourRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for ConnectFourRules {
    type State = ConnectFourState;
    type Action = usize;

    fn initial_state(&self) -> ConnectFourState {
        Grid::new()
    }

    fn next_player(&self, state: &ConnectFourState) -> Result<Player, RulesError> {
        next_player_on(state)
    }

    fn outcome(&self, state: &ConnectFourState) -> Option<Outcome> {
        if let Some(player) = self.winner(state) {
            return Some(Outcome::win_for(player));
        }
        if state.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn legal_actions(&self, state: &ConnectFourState) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| Self::landing_row(state, column).is_some())
            .collect()
    }

    fn apply(&self, state: &ConnectFourState, column: usize) -> Result<ConnectFourState, RulesError> {
        if column >= COLUMNS {
            return Err(RulesError::InvalidAction(format!(
                "column {} is out of the grid, columns must be between 0 and {}",
                column,
                COLUMNS - 1
            )));
        }
        let row = Self::landing_row(state, column).ok_or_else(|| {
            RulesError::InvalidAction(format!("column {} is full", column))
        })?;
        let player = self.next_player(state)?;
        Ok(state.with(row, column, player))
    }

    /// Scores a position on the Max/Min scale
    ///
    /// A won position is scored by the player parity says is to move: that
    /// player has just lost, so it scores the worst sentinel for them. Other
    /// positions score the mover's heuristic minus the opponent's, negated
    /// when Min is to move.
    fn evaluate(&self, state: &ConnectFourState) -> Result<Score, RulesError> {
        match self.outcome(state) {
            Some(Outcome::Draw) => Ok(0),
            Some(_) => Ok(match player_for_move_count(state.occupied()) {
                Player::Max => MIN_SCORE,
                Player::Min => MAX_SCORE,
            }),
            None => {
                let mover = self.next_player(state)?;
                let value =
                    self.score_position(state, mover) - self.score_position(state, mover.opponent());
                Ok(match mover {
                    Player::Max => value,
                    Player::Min => -value,
                })
            }
        }
    }
}

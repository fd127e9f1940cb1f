//! A rules-agnostic engine for two-player, zero-sum, perfect-information games
//!
//! Any game implementing [`GameRules`] can be searched with minimax and
//! alpha-beta pruning, either to the end of the game or down to a fixed
//! depth where a heuristic takes over. Two games ship with the engine:
//! 3×3 tic-tac-toe and 6×7 connect four.
//!
//! # Basic Usage
//!
//! ```
//! use minimax_games::{Game, Outcome, TicTacToeRules, TicTacToeState, UNBOUNDED_DEPTH};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // Min (O) moves first, so with two tokens each it is Min's turn again
//! let state = TicTacToeState::from_rows(&["OO.", "XX.", "..."])?;
//! let mut game = Game::from_state(TicTacToeRules::new(), state, UNBOUNDED_DEPTH);
//! game.play_optimal()?;
//!
//! assert_eq!(game.current_outcome(), Some(Outcome::MinWins));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod config;

pub mod connect_four;

pub mod error;

pub mod game;

pub mod grid;

pub mod player;

pub mod rules;

pub mod solver;

pub mod tic_tac_toe;


pub use config::{EngineConfig, GameSettings};
pub use connect_four::{ConnectFourRules, ConnectFourState};
pub use error::{ConfigError, RulesError};
pub use game::Game;
pub use grid::Grid;
pub use player::{Outcome, Player};
pub use rules::{GameRules, Score, MAX_SCORE, MIN_SCORE};
pub use solver::{minimax, Solver, UNBOUNDED_DEPTH};
pub use tic_tac_toe::{Position, TicTacToeRules, TicTacToeState};

// a winning alignment must fit on the connect four board
const_assert!(connect_four::CONNECT <= connect_four::ROWS);
const_assert!(connect_four::CONNECT <= connect_four::COLUMNS);
const_assert!(connect_four::CENTER_COLUMN < connect_four::COLUMNS);

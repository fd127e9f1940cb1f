use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use rand::Rng;
use tracing::info;

use std::io::{stdin, stdout, Write};

use minimax_games::{
    connect_four::{self, ConnectFourRules, ConnectFourState},
    tic_tac_toe::{self, Position, TicTacToeRules, TicTacToeState},
    Game, GameRules, Outcome, Player, RulesError,
};

/// Prints `message` and reads one trimmed line, `None` once stdin is closed
pub fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Asks a yes/no question until it gets an answer
pub fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        let answer = prompt(&format!("{} y/n: ", question))?
            .ok_or_else(|| anyhow!("input closed"))?;
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Who picks the moves of each player
#[derive(Copy, Clone, Debug)]
pub struct Controllers {
    pub max_is_ai: bool,
    pub min_is_ai: bool,
}

impl Controllers {
    fn is_ai(&self, player: Player) -> bool {
        match player {
            Player::Max => self.max_is_ai,
            Player::Min => self.min_is_ai,
        }
    }
}

/// Text front end for one game: input parsing and board rendering
pub trait Frontend {
    type Rules: GameRules;

    fn instruction(&self) -> &'static str;

    fn parse_action(&self, input: &str) -> Option<<Self::Rules as GameRules>::Action>;

    fn render(&self, state: &<Self::Rules as GameRules>::State) -> Result<()>;

    fn symbol(&self, player: Player) -> &'static str {
        match player {
            Player::Max => "X",
            Player::Min => "O",
        }
    }

    fn color(&self, player: Player) -> Color {
        match player {
            Player::Max => Color::Red,
            Player::Min => Color::Yellow,
        }
    }

    /// Queues a styled token, or `blank` for an empty cell
    fn queue_cell(&self, cell: Option<Player>, blank: &'static str) -> Result<()> {
        let mut stdout = stdout();
        match cell {
            Some(player) => stdout.queue(PrintStyledContent(
                style(self.symbol(player))
                    .attribute(Attribute::Bold)
                    .with(self.color(player)),
            ))?,
            None => stdout.queue(PrintStyledContent(style(blank)))?,
        };
        Ok(())
    }
}

/// Plays a game to the end and returns its outcome
///
/// Computer moves are optimal with probability `optimal_probability` and
/// random otherwise.
pub fn run<F: Frontend, G: Rng>(
    frontend: &F,
    game: &mut Game<F::Rules>,
    controllers: Controllers,
    optimal_probability: f64,
    rng: &mut G,
) -> Result<Option<Outcome>> {
    info!(depth = game.depth(), "game started");

    while game.current_outcome().is_none() {
        frontend.render(game.state())?;
        let player = game.current_player()?;

        if controllers.is_ai(player) {
            println!("AI is thinking...");
            if rng.gen_bool(optimal_probability) {
                game.play_optimal()?;
            } else {
                game.play_random(rng)?;
            }
            continue;
        }

        let input = match prompt(&format!("{} > ", frontend.instruction()))? {
            Some(input) => input,
            None => return Ok(None),
        };
        let action = match frontend.parse_action(&input) {
            Some(action) => action,
            None => {
                println!("Invalid input: {}", input);
                continue;
            }
        };
        match game.play(action) {
            Ok(()) => {}
            // try the move again
            Err(err @ RulesError::InvalidAction(_)) => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    frontend.render(game.state())?;
    let outcome = game.current_outcome();
    if let Some(finished) = outcome {
        match finished.winner() {
            Some(player) => println!("{} player won", frontend.symbol(player)),
            None => println!("The game ended in a DRAW"),
        }
    }
    info!(?outcome, "game finished");
    Ok(outcome)
}

pub struct TicTacToeCli;

impl TicTacToeCli {
    pub fn new_game(depth: u32) -> Game<TicTacToeRules> {
        Game::new(TicTacToeRules::new(), depth)
    }
}

impl Frontend for TicTacToeCli {
    type Rules = TicTacToeRules;

    fn instruction(&self) -> &'static str {
        "Coordinates of your next action [row,column]"
    }

    /// Accepts a row letter `a`-`c` and a column digit `0`-`2`, optionally
    /// separated by a comma
    fn parse_action(&self, input: &str) -> Option<Position> {
        let mut chars = input.trim().chars();
        let row = match chars.next()?.to_ascii_lowercase() {
            letter @ 'a'..='c' => letter as usize - 'a' as usize,
            _ => return None,
        };

        let rest = chars.as_str().trim_start();
        let rest = rest.strip_prefix(',').unwrap_or(rest).trim();
        let mut digits = rest.chars();
        let column = digits.next()?.to_digit(10)? as usize;
        if digits.next().is_some() || column >= tic_tac_toe::SIZE {
            return None;
        }
        Some(Position::new(row, column))
    }

    fn render(&self, state: &TicTacToeState) -> Result<()> {
        let mut stdout = stdout();
        let header: String = (0..tic_tac_toe::SIZE).map(|c| format!(" {}", c)).collect();
        stdout.queue(PrintStyledContent(style(header + "\n").with(Color::Cyan)))?;

        for (index, row) in state.rows().enumerate() {
            let label = (b'a' + index as u8) as char;
            stdout.queue(PrintStyledContent(style(label.to_string()).with(Color::Cyan)))?;
            for &cell in row.iter() {
                stdout.queue(PrintStyledContent(style(" ")))?;
                self.queue_cell(cell, ".")?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

pub struct ConnectFourCli;

impl ConnectFourCli {
    pub fn new_game(depth: u32) -> Game<ConnectFourRules> {
        Game::new(ConnectFourRules::new(), depth)
    }
}

impl Frontend for ConnectFourCli {
    type Rules = ConnectFourRules;

    fn instruction(&self) -> &'static str {
        "Column number of your next action"
    }

    fn parse_action(&self, input: &str) -> Option<usize> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&column| column < connect_four::COLUMNS)
    }

    fn symbol(&self, player: Player) -> &'static str {
        match player {
            Player::Max => "Red",
            Player::Min => "Yellow",
        }
    }

    fn render(&self, state: &ConnectFourState) -> Result<()> {
        let mut stdout = stdout();
        let cols: String = (0..connect_four::COLUMNS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in state.rows() {
            for &cell in row.iter() {
                match cell {
                    Some(player) => stdout.queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(self.color(player)),
                    ))?,
                    None => stdout.queue(PrintStyledContent(
                        style(" ").on(Color::DarkBlue),
                    ))?,
                };
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tic_tac_toe_coordinates() {
        let cli = TicTacToeCli;

        assert_eq!(cli.parse_action("a0"), Some(Position::new(0, 0)));
        assert_eq!(cli.parse_action(" b , 2 "), Some(Position::new(1, 2)));
        assert_eq!(cli.parse_action("c,1"), Some(Position::new(2, 1)));
        assert_eq!(cli.parse_action("B1"), Some(Position::new(1, 1)));
    }

    #[test]
    fn rejects_bad_tic_tac_toe_coordinates() {
        let cli = TicTacToeCli;

        for input in &["", "d0", "a3", "a", "a,,1", "a12", "1a", "a-1"] {
            assert_eq!(cli.parse_action(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn parses_connect_four_columns() {
        let cli = ConnectFourCli;

        assert_eq!(cli.parse_action("0"), Some(0));
        assert_eq!(cli.parse_action(" 6\n"), Some(6));
        assert_eq!(cli.parse_action("7"), None);
        assert_eq!(cli.parse_action("-1"), None);
        assert_eq!(cli.parse_action("three"), None);
    }
}

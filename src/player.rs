use std::fmt;

/// One of the two adversarial roles in a game
///
/// `Max` tries to push the score up, `Min` tries to push it down. The roles
/// are not tied to any symbol a front end draws for them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "Max"),
            Player::Min => write!(f, "Min"),
        }
    }
}

/// The result of a finished game
///
/// A game still in progress has no outcome, so rule engines report
/// `Option<Outcome>` and `None` means the game goes on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Outcome {
    MaxWins,
    MinWins,
    Draw,
}

impl Outcome {
    /// The outcome where `player` has completed a winning alignment
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Max => Outcome::MaxWins,
            Player::Min => Outcome::MinWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::MaxWins => Some(Player::Max),
            Outcome::MinWins => Some(Player::Min),
            Outcome::Draw => None,
        }
    }
}

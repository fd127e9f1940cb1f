use anyhow::{anyhow, Result};

use std::fmt;

use crate::player::Player;

/// A fixed-size rectangular board of cells, each empty or holding a player's token
///
/// Row 0 is the top row. A `Grid` is a plain `Copy` value: placing a token
/// with [`Grid::with`] returns a new grid and leaves the original untouched,
/// so sibling branches of a search never see each other's moves.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Grid<const ROWS: usize, const COLS: usize> {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Grid<ROWS, COLS> {
    /// Creates an empty grid
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Builds a grid from one string per row, top row first
    ///
    /// `X` is a token of [`Player::Max`], `O` a token of [`Player::Min`],
    /// and `.` or a space an empty cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != ROWS {
            return Err(anyhow!("expected {} rows, found {}", ROWS, rows.len()));
        }
        let mut grid = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != COLS {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    COLS
                ));
            }
            for (column, cell_char) in line.chars().enumerate() {
                grid.cells[row][column] = match cell_char {
                    'X' | 'x' => Some(Player::Max),
                    'O' | 'o' => Some(Player::Min),
                    '.' | ' ' => None,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", cell_char)),
                };
            }
        }
        Ok(grid)
    }

    /// The content of a cell, or `None` when empty or out of range
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    pub fn in_bounds(row: usize, column: usize) -> bool {
        row < ROWS && column < COLS
    }

    pub fn is_empty_at(&self, row: usize, column: usize) -> bool {
        Self::in_bounds(row, column) && self.cells[row][column].is_none()
    }

    /// Returns a copy of this grid with `player`'s token placed at (row, column)
    ///
    /// Callers check bounds and occupancy first.
    pub fn with(&self, row: usize, column: usize, player: Player) -> Self {
        let mut next = *self;
        next.cells[row][column] = Some(player);
        next
    }

    /// Number of tokens on the grid
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Number of tokens belonging to `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == ROWS * COLS
    }

    /// Iterates over the rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>; COLS]> {
        self.cells.iter()
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Grid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for Grid<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row.iter() {
                let symbol = match cell {
                    Some(Player::Max) => 'X',
                    Some(Player::Min) => 'O',
                    None => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_places_tokens() -> Result<()> {
        let grid = Grid::<2, 3>::from_rows(&["X.O", " OX"])?;

        assert_eq!(grid.get(0, 0), Some(Player::Max));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(0, 2), Some(Player::Min));
        assert_eq!(grid.get(1, 2), Some(Player::Max));
        assert_eq!(grid.occupied(), 4);
        assert_eq!(grid.count(Player::Min), 2);
        Ok(())
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(Grid::<2, 2>::from_rows(&["XO"]).is_err());
        assert!(Grid::<2, 2>::from_rows(&["XO", "X"]).is_err());
        assert!(Grid::<2, 2>::from_rows(&["XO", "X?"]).is_err());
    }

    #[test]
    fn with_leaves_original_untouched() {
        let grid = Grid::<3, 3>::new();
        let next = grid.with(1, 1, Player::Min);

        assert_eq!(grid.occupied(), 0);
        assert_eq!(next.occupied(), 1);
        assert_eq!(next.get(1, 1), Some(Player::Min));
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let grid = Grid::<3, 3>::new().with(2, 2, Player::Max);

        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.is_empty_at(3, 0));
    }

    #[test]
    fn display_round_trips_through_from_rows() -> Result<()> {
        let grid = Grid::<2, 3>::from_rows(&["X.O", ".OX"])?;

        assert_eq!(grid.to_string(), "X.O\n.OX\n");
        Ok(())
    }
}

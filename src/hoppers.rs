//! Hoppers - jump frogs over green frogs until only the red one is left.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::{Dir, Pos};
use crate::parser::{self, ParserErr};
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not a lily pad, frogs can't land here.
    Invalid,
    Empty,
    Green,
    Red,
}

impl Cell {
    pub(crate) fn from_char(c: char) -> Option<Cell> {
        match c {
            '*' => Some(Cell::Invalid),
            '.' => Some(Cell::Empty),
            'G' => Some(Cell::Green),
            'R' => Some(Cell::Red),
            _ => None,
        }
    }

    pub fn is_frog(self) -> bool {
        self == Cell::Green || self == Cell::Red
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Invalid => write!(f, "*"),
            Cell::Empty => write!(f, "."),
            Cell::Green => write!(f, "G"),
            Cell::Red => write!(f, "R"),
        }
    }
}

// the jumped frog is at +dir, the frog lands at +2*dir
const DIAGONAL_JUMPS: [Dir; 4] = [
    Dir { r: -1, c: -1 },
    Dir { r: -1, c: 1 },
    Dir { r: 1, c: -1 },
    Dir { r: 1, c: 1 },
];
// only from even rows
const ALL_JUMPS: [Dir; 8] = [
    Dir { r: -1, c: -1 },
    Dir { r: -1, c: 1 },
    Dir { r: 1, c: -1 },
    Dir { r: 1, c: 1 },
    Dir { r: -2, c: 0 },
    Dir { r: 0, c: 2 },
    Dir { r: 2, c: 0 },
    Dir { r: 0, c: -2 },
];

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<Cell>) -> Self {
        Board { grid }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// `None` outside the board
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos).cloned()
    }

    pub fn green_frogs(&self) -> usize {
        self.grid.iter().filter(|&&cell| cell == Cell::Green).count()
    }

    fn jumps(pos: Pos) -> &'static [Dir] {
        if pos.r % 2 == 0 {
            &ALL_JUMPS
        } else {
            &DIAGONAL_JUMPS
        }
    }

    fn jump(&self, from: Pos, dir: Dir) -> Option<Board> {
        let over = from + dir;
        let to = over + dir;
        if self.cell(over) != Some(Cell::Green) || self.cell(to) != Some(Cell::Empty) {
            return None;
        }

        let mut grid = self.grid.clone();
        grid[to] = grid[from];
        grid[from] = Cell::Empty;
        grid[over] = Cell::Empty;
        Some(Board::new(grid))
    }
}

impl State for Board {
    fn is_goal(&self) -> bool {
        self.green_frogs() == 0
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut new_states = Vec::new();

        for pos in self.grid.positions() {
            if !self.grid[pos].is_frog() {
                continue;
            }
            for &dir in Self::jumps(pos) {
                if let Some(new_state) = self.jump(pos, dir) {
                    new_states.push(new_state);
                }
            }
        }

        new_states
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_hoppers(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver;

    fn board(level: &str) -> Board {
        level.parse().unwrap()
    }

    #[test]
    fn formatting() {
        let level = r"
3 3
R * .
* G *
. * .
";
        let level = board(level);
        assert_eq!(level.to_string(), "R * .\n* G *\n. * .\n");
        assert_eq!(format!("{:?}", level), level.to_string());
        assert_eq!(level.rows(), 3);
        assert_eq!(level.cols(), 3);
        assert_eq!(level.cell(Pos::new(1, 1)), Some(Cell::Green));
        assert_eq!(level.cell(Pos::new(3, 0)), None);
        assert_eq!(level.green_frogs(), 1);
    }

    #[test]
    fn diagonal_jump() {
        let level = board("3 3\nR * .\n* G *\n. * .\n");
        let neighbors = level.neighbors();

        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].to_string(), ". * .\n* . *\n. * R\n");
        assert!(neighbors[0].is_goal());
        assert!(!level.is_goal());
    }

    #[test]
    fn straight_jumps_only_from_even_rows() {
        // the red frog on row 0 can jump over G at distance 2
        let level = board("1 5\nR . G . .\n");
        let neighbors = level.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].to_string(), ". . . . R\n");

        // the same layout on row 1 has no straight jumps
        let level = board("3 5\n. . . . .\nR . G . .\n. . . . .\n");
        assert!(level.neighbors().is_empty());
    }

    #[test]
    fn red_frog_is_never_jumped() {
        let level = board("1 5\nG . R . .\n");
        assert!(level.neighbors().is_empty());
        assert!(solver::solve(&level).path.is_none());
    }

    #[test]
    fn green_frogs_jump_each_other() {
        // G at 0 can jump G at 2, the other way around would leave the board
        let level = board("1 9\nG . G . . . . . R\n");
        let neighbors = level.neighbors();

        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].to_string(), ". . . . G . . . R\n");
    }

    #[test]
    fn two_jumps() {
        let level = r"
5 5
R * . * .
* G * . *
. * . * .
* . * G *
. * . * .
";
        let solution = solver::solve(&board(level));
        let path = solution.path.unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path[1].cell(Pos::new(2, 2)), Some(Cell::Red));
        assert_eq!(path[2].cell(Pos::new(4, 4)), Some(Cell::Red));
        assert_eq!(path[2].green_frogs(), 0);
        assert_eq!(solution.stats.total_generated(), 2);
        assert_eq!(solution.stats.total_unique_visited(), 3);
    }

    #[test]
    fn same_board_reached_twice() {
        // R jumping the left G and G jumping G on the right are independent,
        // both orders lead to the same board
        let level = board("1 11\nR . G . . . . . G . G\n");
        let solution = solver::solve(&level);
        let path = solution.path.unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path[2].to_string(), ". . . . R . G . . . .\n");
        assert_eq!(path[3].to_string(), ". . . . . . . . R . .\n");
        assert_eq!(solution.stats.generated_by_depth(), &[0, 2, 2, 1]);
        assert_eq!(solution.stats.duplicates_by_depth(), &[0, 0, 1]);
        assert_eq!(solution.stats.total_unique_visited(), 5);
    }
}

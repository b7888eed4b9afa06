//! Astro - get the astronaut to the goal by sliding it and the robots around.
//!
//! A piece slides in one direction until the next cell holds another piece and stops
//! right before it. Sliding off the board is not allowed so a move needs a blocker.
//! The goal is not an obstacle: robots slide over it, the astronaut stops on it.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{self, ParserErr};
use crate::state::State;
use crate::vec2d::Vec2d;

pub(crate) const GOAL: char = '*';
pub(crate) const ASTRONAUT: char = 'A';
pub(crate) const EMPTY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Robot {
    pub symbol: char,
    pub pos: Pos,
}

impl Robot {
    pub fn new(symbol: char, pos: Pos) -> Self {
        Robot { symbol, pos }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: i32,
    cols: i32,
    goal: Pos,
    astronaut: Pos,
    robots: Vec<Robot>,
}

impl Board {
    /// The parser guarantees all pieces are on the board, on different cells
    /// and that robot symbols are unique.
    pub(crate) fn new(rows: i32, cols: i32, goal: Pos, astronaut: Pos, mut robots: Vec<Robot>) -> Self {
        // sort so the order robots were listed in doesn't matter for equality
        robots.sort();
        Board {
            rows,
            cols,
            goal,
            astronaut,
            robots,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn astronaut(&self) -> Pos {
        self.astronaut
    }

    /// Sorted by symbol
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// What to draw at `pos` - a piece, the goal or an empty cell.
    pub fn symbol_at(&self, pos: Pos) -> char {
        if pos == self.astronaut {
            ASTRONAUT
        } else if let Some(robot) = self.robots.iter().find(|robot| robot.pos == pos) {
            robot.symbol
        } else if pos == self.goal {
            GOAL
        } else {
            EMPTY
        }
    }

    fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && pos.r < self.rows && pos.c < self.cols
    }

    fn is_occupied(&self, pos: Pos) -> bool {
        self.astronaut == pos || self.robots.iter().any(|robot| robot.pos == pos)
    }

    /// Where a piece at `from` ends up when it slides in `dir`,
    /// `None` if it can't move or would leave the board.
    fn slide(&self, from: Pos, dir: Dir, stops_on_goal: bool) -> Option<Pos> {
        let mut cur = from;
        loop {
            if stops_on_goal && cur == self.goal && cur != from {
                return Some(cur);
            }

            let next = cur + dir;
            if !self.contains(next) {
                return None;
            }
            if self.is_occupied(next) {
                return if cur == from { None } else { Some(cur) };
            }
            cur = next;
        }
    }

    fn with_astronaut(&self, astronaut: Pos) -> Board {
        Board {
            astronaut,
            robots: self.robots.clone(),
            ..*self
        }
    }

    fn with_robot(&self, index: usize, pos: Pos) -> Board {
        let mut robots = self.robots.clone();
        robots[index].pos = pos;
        Board { robots, ..*self }
    }
}

impl State for Board {
    fn is_goal(&self) -> bool {
        self.astronaut == self.goal
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut new_states = Vec::new();

        for &dir in &DIRECTIONS {
            if let Some(dest) = self.slide(self.astronaut, dir, true) {
                new_states.push(self.with_astronaut(dest));
            }
            for (i, robot) in self.robots.iter().enumerate() {
                if let Some(dest) = self.slide(robot.pos, dir, false) {
                    new_states.push(self.with_robot(i, dest));
                }
            }
        }

        new_states
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_astro(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut grid = Vec2d::filled(self.rows, self.cols, EMPTY);
        grid[self.goal] = GOAL;
        for robot in &self.robots {
            grid[robot.pos] = robot.symbol;
        }
        grid[self.astronaut] = ASTRONAUT;
        write!(f, "{}", grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

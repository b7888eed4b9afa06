use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::astro::{self, Robot};
use crate::config::Puzzle;
use crate::data::{Pos, MAX_SIZE};
use crate::hoppers::{self, Cell};
use crate::vec2d::Vec2d;

/// Line numbers start at 1 and count blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    MissingLine(&'static str),
    Dimensions(usize),
    TooLarge,
    Coords(usize),
    OutOfBounds(usize),
    Symbol(usize),
    Overlap(Pos),
    DuplicateRobot(char),
    RobotCount(usize),
    RowLength(usize),
    Pos(usize, usize),
    NoRedFrog,
    MultipleRedFrogs,
    TrailingLine(usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::MissingLine(what) => write!(f, "Missing {} line", what),
            ParserErr::Dimensions(line) => write!(f, "Invalid dimensions on line {}", line),
            ParserErr::TooLarge => write!(f, "Board larger than {} rows/columns", MAX_SIZE),
            ParserErr::Coords(line) => write!(f, "Invalid coordinates on line {}", line),
            ParserErr::OutOfBounds(line) => write!(f, "Position outside the board on line {}", line),
            ParserErr::Symbol(line) => write!(f, "Unexpected symbol on line {}", line),
            ParserErr::Overlap(pos) => write!(f, "More than one piece at {}", pos),
            ParserErr::DuplicateRobot(symbol) => write!(f, "More than one robot {}", symbol),
            ParserErr::RobotCount(line) => write!(f, "Invalid number of robots on line {}", line),
            ParserErr::RowLength(line) => write!(f, "Wrong number of cells on line {}", line),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::NoRedFrog => write!(f, "No red frog"),
            ParserErr::MultipleRedFrogs => write!(f, "More than one red frog"),
            ParserErr::TrailingLine(line) => write!(f, "Unexpected content on line {}", line),
        }
    }
}

impl Error for ParserErr {}

/// Astro boards list pieces with coordinates (`A 0,1`), Hoppers boards list cells.
pub fn detect_puzzle(level: &str) -> Puzzle {
    match lines(level).nth(1) {
        Some((_, line)) if line.contains(',') => Puzzle::Astro,
        _ => Puzzle::Hoppers,
    }
}

/// Non-blank lines with their line numbers
fn lines(level: &str) -> impl Iterator<Item = (usize, &str)> {
    level
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty())
}

fn parse_dimensions(line_num: usize, line: &str) -> Result<(i32, i32), ParserErr> {
    let dims = line
        .split_whitespace()
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParserErr::Dimensions(line_num))?;
    match dims[..] {
        [rows, cols] if rows > 0 && cols > 0 => {
            if rows > MAX_SIZE || cols > MAX_SIZE {
                Err(ParserErr::TooLarge)
            } else {
                Ok((rows as i32, cols as i32))
            }
        }
        _ => Err(ParserErr::Dimensions(line_num)),
    }
}

/// Parses `X r,c`
fn parse_piece(line_num: usize, line: &str, rows: i32, cols: i32) -> Result<(char, Pos), ParserErr> {
    let mut tokens = line.split_whitespace();
    let (symbol, coords) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(symbol), Some(coords), None) => (symbol, coords),
        _ => return Err(ParserErr::Coords(line_num)),
    };

    let mut chars = symbol.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(ParserErr::Symbol(line_num)),
    };

    let mut parts = coords.split(',').map(|s| s.trim().parse::<i32>());
    let pos = match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(r)), Some(Ok(c)), None) => Pos::new(r, c),
        _ => return Err(ParserErr::Coords(line_num)),
    };
    if pos.r < 0 || pos.c < 0 || pos.r >= rows || pos.c >= cols {
        return Err(ParserErr::OutOfBounds(line_num));
    }

    Ok((symbol, pos))
}

/// Parses
/// ```text
/// rows cols
/// * goal_r,goal_c
/// A astronaut_r,astronaut_c
/// robot_count
/// X r,c
/// ...
/// ```
pub fn parse_astro(level: &str) -> Result<astro::Board, ParserErr> {
    let mut lines = lines(level);

    let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("dimensions"))?;
    let (rows, cols) = parse_dimensions(line_num, line)?;

    let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("goal"))?;
    let (symbol, goal) = parse_piece(line_num, line, rows, cols)?;
    if symbol != astro::GOAL {
        return Err(ParserErr::Symbol(line_num));
    }

    let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("astronaut"))?;
    let (symbol, astronaut) = parse_piece(line_num, line, rows, cols)?;
    if symbol != astro::ASTRONAUT {
        return Err(ParserErr::Symbol(line_num));
    }

    let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("robot count"))?;
    let robot_count: usize = line.parse().map_err(|_| ParserErr::RobotCount(line_num))?;

    let mut robots: Vec<Robot> = Vec::new();
    for _ in 0..robot_count {
        let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("robot"))?;
        let (symbol, pos) = parse_piece(line_num, line, rows, cols)?;
        if symbol == astro::GOAL || symbol == astro::ASTRONAUT || symbol == astro::EMPTY {
            return Err(ParserErr::Symbol(line_num));
        }
        if robots.iter().any(|robot| robot.symbol == symbol) {
            return Err(ParserErr::DuplicateRobot(symbol));
        }
        if pos == astronaut || robots.iter().any(|robot| robot.pos == pos) {
            return Err(ParserErr::Overlap(pos));
        }
        robots.push(Robot::new(symbol, pos));
    }

    if let Some((line_num, _)) = lines.next() {
        return Err(ParserErr::TrailingLine(line_num));
    }

    Ok(astro::Board::new(rows, cols, goal, astronaut, robots))
}

/// Parses
/// ```text
/// rows cols
/// cell cell ...
/// ...
/// ```
/// where a cell is one of `*` (no lily pad), `.`, `G` or `R`.
pub fn parse_hoppers(level: &str) -> Result<hoppers::Board, ParserErr> {
    let mut lines = lines(level);

    let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("dimensions"))?;
    let (rows, cols) = parse_dimensions(line_num, line)?;

    let mut grid = Vec::new();
    let mut red_frog = None;
    for r in 0..rows as usize {
        let (line_num, line) = lines.next().ok_or(ParserErr::MissingLine("board row"))?;

        let mut row = Vec::new();
        for (c, token) in line.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let cell = match (chars.next(), chars.next()) {
                (Some(ch), None) => Cell::from_char(ch),
                _ => None,
            };
            let cell = cell.ok_or(ParserErr::Pos(r, c))?;

            if cell == Cell::Red {
                if red_frog.is_some() {
                    return Err(ParserErr::MultipleRedFrogs);
                }
                red_frog = Some(Pos::new(r as i32, c as i32));
            }
            row.push(cell);
        }
        if row.len() != cols as usize {
            return Err(ParserErr::RowLength(line_num));
        }
        grid.push(row);
    }

    if let Some((line_num, _)) = lines.next() {
        return Err(ParserErr::TrailingLine(line_num));
    }
    if red_frog.is_none() {
        return Err(ParserErr::NoRedFrog);
    }

    Ok(hoppers::Board::new(Vec2d::new(grid)))
}

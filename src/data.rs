use std::fmt::{self, Display, Formatter};
use std::ops::Add;

// larger boards are rejected by the parser
pub(crate) const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Dir {
    pub(crate) r: i32,
    pub(crate) c: i32,
}

impl Dir {
    const fn new(r: i32, c: i32) -> Dir {
        Dir { r, c }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}

pub(crate) const UP: Dir = Dir::new(-1, 0);
pub(crate) const RIGHT: Dir = Dir::new(0, 1);
pub(crate) const DOWN: Dir = Dir::new(1, 0);
pub(crate) const LEFT: Dir = Dir::new(0, -1);
pub(crate) const DIRECTIONS: [Dir; 4] = [UP, RIGHT, DOWN, LEFT];

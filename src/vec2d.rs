use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T> Vec2d<T> {
    /// All rows must have the same length - the parser checks that.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        assert!(grid.iter().all(|row| row.len() == cols));

        Vec2d {
            data: grid.into_iter().flatten().collect(),
            rows: rows as i32,
            cols: cols as i32,
        }
    }

    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && pos.r < self.rows && pos.c < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    /// Row-major
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn offset(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{} out of bounds", pos);
        pos.r as usize * self.cols as usize + pos.c as usize
    }
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn filled(rows: i32, cols: i32, default: T) -> Self {
        Vec2d {
            data: vec![default; (rows * cols) as usize],
            rows,
            cols,
        }
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols as usize) {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.data[self.offset(pos)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let offset = self.offset(pos);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_row_major() {
        let mut grid = Vec2d::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[Pos::new(1, 0)], 4);

        grid[Pos::new(0, 2)] = 9;
        assert_eq!(grid.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 9, 4, 5, 6]);
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
            ]
        );
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::filled(2, 2, '.');
        assert_eq!(grid.get(Pos::new(1, 1)), Some(&'.'));
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 2)), None);
        assert_eq!(grid.get(Pos::new(2, 0)), None);
    }

    #[test]
    fn formatting() {
        let grid = Vec2d::new(vec![vec!['.', '*'], vec!['G', 'R']]);
        assert_eq!(grid.to_string(), ". *\nG R\n");
        assert_eq!(format!("{:?}", grid), ". *\nG R\n");
        assert_eq!(Vec2d::filled(2, 1, 0).to_string(), "0\n0\n");
    }
}

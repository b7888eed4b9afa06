// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod astro;
pub mod config;
pub mod fs;
pub mod hoppers;
pub mod parser;
pub mod solver;
pub mod state;

mod data;
mod vec2d;

use std::error::Error;
use std::str::FromStr;

use crate::config::SolverConfig;
use crate::solver::{SolverErr, SolverOk};

pub use crate::data::Pos;
pub use crate::state::State;

pub trait LoadPuzzle {
    /// Reads the file at this path and parses it as puzzle `P`.
    fn load_puzzle<P>(&self) -> Result<P, Box<dyn Error>>
    where
        P: FromStr,
        P::Err: Error + 'static;
}

impl LoadPuzzle for str {
    fn load_puzzle<P>(&self) -> Result<P, Box<dyn Error>>
    where
        P: FromStr,
        P::Err: Error + 'static,
    {
        let text = fs::read_file(self)?;
        let puzzle = text.parse::<P>()?;
        Ok(puzzle)
    }
}

pub trait Solve: State {
    fn solve(&self, config: &SolverConfig) -> Result<SolverOk<Self>, SolverErr>;
}

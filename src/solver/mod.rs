pub mod stats;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use fnv::FnvHashMap;
use log::debug;
use typed_arena::Arena;

use crate::config::SolverConfig;
use crate::state::State;
use crate::Solve;

use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Cancelled,
    TimedOut,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Cancelled => write!(f, "Search cancelled"),
            SolverErr::TimedOut => write!(f, "Search timed out"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk<S> {
    /// From the initial state to a goal, both included.
    /// `None` if no goal is reachable.
    pub path: Option<Vec<S>>,
    pub stats: Stats,
}

impl<S> SolverOk<S> {
    fn new(path: Option<Vec<S>>, stats: Stats) -> Self {
        Self { path, stats }
    }

    /// Number of moves of the solution, zero if the initial state is already solved.
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

impl<S> Debug for SolverOk<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "Moves: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// What to do next from some position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint<S> {
    AlreadySolved,
    /// The state after the first move of a shortest solution.
    Next(S),
    NoSolution,
}

impl<S: State> Solve for S {
    fn solve(&self, config: &SolverConfig) -> Result<SolverOk<Self>, SolverErr> {
        solve_with(self, config)
    }
}

/// Finds a shortest path from `start` to any goal state.
///
/// Exhausts the whole reachable state space if there is no solution.
pub fn solve<S: State>(start: &S) -> SolverOk<S> {
    match search(start, &SolverConfig::default()) {
        Ok(solver_ok) => solver_ok,
        Err(err) => unreachable!("search without limits stopped: {}", err),
    }
}

pub fn solve_with<S: State>(start: &S, config: &SolverConfig) -> Result<SolverOk<S>, SolverErr> {
    search(start, config)
}

pub fn hint<S: State>(current: &S) -> Hint<S> {
    match hint_with(current, &SolverConfig::default()) {
        Ok(hint) => hint,
        Err(err) => unreachable!("search without limits stopped: {}", err),
    }
}

pub fn hint_with<S: State>(current: &S, config: &SolverConfig) -> Result<Hint<S>, SolverErr> {
    let hint = match search(current, config)?.path {
        None => Hint::NoSolution,
        Some(mut path) => {
            if path.len() == 1 {
                Hint::AlreadySolved
            } else {
                Hint::Next(path.swap_remove(1))
            }
        }
    };
    Ok(hint)
}

struct SearchNode<'a, S> {
    state: &'a S,
    dist: usize,
}

fn search<S: State>(start: &S, config: &SolverConfig) -> Result<SolverOk<S>, SolverErr> {
    debug!("Search called");

    let started = Instant::now();
    let mut stats = Stats::new();

    // every state we discover lives here until the search ends,
    // the frontier and prevs only hold references
    let arena = Arena::new();
    let mut prevs: FnvHashMap<&S, Option<&S>> = FnvHashMap::default();
    let mut to_visit = VecDeque::new();

    let start: &S = arena.alloc(start.clone());
    prevs.insert(start, None);
    stats.add_unique(0);
    to_visit.push_back(SearchNode { state: start, dist: 0 });

    let mut goal_tested_depth = None;
    while let Some(cur_node) = to_visit.pop_front() {
        if config.is_cancelled() {
            return Err(SolverErr::Cancelled);
        }
        if let Some(timeout) = config.timeout {
            if started.elapsed() >= timeout {
                return Err(SolverErr::TimedOut);
            }
        }

        if goal_tested_depth != Some(cur_node.dist) {
            // all of the previous depth has been expanded
            // so the whole current depth is in cur_node + to_visit
            goal_tested_depth = Some(cur_node.dist);
            if config.print_status {
                println!("Visited new depth: {}", cur_node.dist);
                println!("{:?}", stats);
            }

            let goal = Some(&cur_node)
                .into_iter()
                .chain(to_visit.iter())
                .find(|node| node.state.is_goal());
            if let Some(goal) = goal {
                debug!("Solved at depth {}, backtracking path", goal.dist);
                let path = backtrack_path(&prevs, goal.state);
                return Ok(SolverOk::new(Some(path), stats));
            }
        }

        let dist = cur_node.dist + 1;
        for neighbor_state in cur_node.state.neighbors() {
            stats.add_generated(dist);

            // mark as visited when discovered, not when expanded,
            // BFS can't find a shorter path later
            if prevs.contains_key(&neighbor_state) {
                stats.add_reached_duplicate(dist);
                continue;
            }
            let neighbor_state: &S = arena.alloc(neighbor_state);
            prevs.insert(neighbor_state, Some(cur_node.state));
            stats.add_unique(dist);
            to_visit.push_back(SearchNode {
                state: neighbor_state,
                dist,
            });
        }
    }

    debug!("State space exhausted");
    Ok(SolverOk::new(None, stats))
}

fn backtrack_path<'a, S: State>(
    prevs: &FnvHashMap<&'a S, Option<&'a S>>,
    final_state: &'a S,
) -> Vec<S> {
    let mut ret = Vec::new();
    let mut state = Some(final_state);
    while let Some(cur) = state {
        ret.push(cur.clone());
        state = prevs[cur];
    }
    ret.reverse();
    ret
}

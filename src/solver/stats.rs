use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counts of search events, indexed by depth.
///
/// The initial state is counted as unique at depth 0 but never as generated
/// so `total_generated() == total_unique_visited() - 1 + total_reached_duplicates()`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    generated_states: Vec<u64>,
    unique_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    /// Every state produced by expanding another one, duplicates included.
    pub fn total_generated(&self) -> u64 {
        self.generated_states.iter().sum()
    }

    /// Distinct states ever added to the frontier.
    pub fn total_unique_visited(&self) -> u64 {
        self.unique_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn generated_by_depth(&self) -> &[u64] {
        &self.generated_states
    }

    pub fn unique_by_depth(&self) -> &[u64] {
        &self.unique_states
    }

    pub fn duplicates_by_depth(&self) -> &[u64] {
        &self.duplicate_states
    }

    /// Returns true when this is the first event at this depth.
    pub(crate) fn add_generated(&mut self, depth: usize) -> bool {
        Self::add(&mut self.generated_states, depth)
    }

    pub(crate) fn add_unique(&mut self, depth: usize) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: usize) -> bool {
        let mut ret = false;

        // while because depth 0 has no generated states
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn depths(&self) -> usize {
        self.generated_states
            .len()
            .max(self.unique_states.len())
            .max(self.duplicate_states.len())
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Generated"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
        ]));
        for depth in 0..self.depths() {
            let at = |counts: &[u64]| counts.get(depth).cloned().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&at(&self.generated_states).separated_string()),
                Cell::new(&at(&self.unique_states).separated_string()),
                Cell::new(&at(&self.duplicate_states).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated by depth: {:?}", self.generated_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.unique_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total generated: {}", self.total_generated().separated_string())?;
        writeln!(f, "total unique visited: {}", self.total_unique_visited().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_reached_duplicates().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States generated total: {}", self.total_generated().separated_string())?;
        writeln!(f, "Unique states visited total: {}", self.total_unique_visited().separated_string())?;
        writeln!(f, "Reached duplicates total: {}", self.total_reached_duplicates().separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}

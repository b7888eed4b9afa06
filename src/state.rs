use std::hash::Hash;

/// One configuration of a puzzle.
///
/// Implementors are immutable values: `neighbors` builds new states
/// and never modifies `self`.
///
/// `Eq` and `Hash` must depend only on what is on the board (piece positions, cell contents),
/// never on how the state was reached. The solver relies on this to detect duplicates,
/// it doesn't check it.
pub trait State: Clone + Eq + Hash {
    /// Whether this configuration is solved.
    fn is_goal(&self) -> bool;

    /// All states reachable by exactly one legal move.
    ///
    /// Duplicates are allowed, `self` is not. No legal moves means an empty `Vec`.
    fn neighbors(&self) -> Vec<Self>;
}

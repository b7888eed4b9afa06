use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Puzzle {
    Astro,
    Hoppers,
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Puzzle::Astro => write!(f, "astro"),
            Puzzle::Hoppers => write!(f, "hoppers"),
        }
    }
}

impl FromStr for Puzzle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astro" => Ok(Puzzle::Astro),
            "hoppers" => Ok(Puzzle::Hoppers),
            _ => Err(format!("Unknown puzzle: {}", s)),
        }
    }
}

/// Limits and reporting for one search.
///
/// The default searches until the state space is exhausted.
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    pub timeout: Option<Duration>,
    /// Checked once per expanded state, set it from another thread to stop the search.
    pub cancel: Option<Arc<AtomicBool>>,
    /// Print stats to stdout every time the search reaches a new depth.
    pub print_status: bool,
}

impl SolverConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        SolverConfig {
            timeout: Some(timeout),
            ..SolverConfig::default()
        }
    }

    pub fn with_cancel(cancel: Arc<AtomicBool>) -> Self {
        SolverConfig {
            cancel: Some(cancel),
            ..SolverConfig::default()
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

use std::fmt::Display;

use enum_map::Enum;

/// The two actions between which the solver chooses when it restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Lever {
    /// Backtrack to the root and randomise the activities of the variables.
    Reset,
    /// Backtrack to the root and leave the activities untouched.
    Restart,
}

impl Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lever::Reset => write!(f, "reset"),
            Lever::Restart => write!(f, "restart"),
        }
    }
}

/// The reward which was observed for the search session following a [`Lever`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub lever: Lever,
    pub reward: f64,
}

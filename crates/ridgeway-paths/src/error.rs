use std::fmt;

use ridgeway_core::{Point, Range};

/// Why a route search produced no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the height field.
    OutOfBounds { point: Point, bounds: Range },
    /// The frontier emptied before the destination was reached.
    Unreachable { origin: Point, destination: Point },
    /// The expansion budget ran out first.
    BudgetExhausted { expansions: usize },
    /// Following parent links from the destination never reached the origin.
    /// This is an internal invariant violation.
    BrokenParentChain { at: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "point {point} lies outside the height field {bounds}")
            }
            Self::Unreachable {
                origin,
                destination,
            } => write!(f, "no route from {origin} to {destination}"),
            Self::BudgetExhausted { expansions } => {
                write!(f, "search gave up after {expansions} expansions")
            }
            Self::BrokenParentChain { at } => {
                write!(f, "path node at {at} has no parent before the origin")
            }
        }
    }
}

impl std::error::Error for PathError {}

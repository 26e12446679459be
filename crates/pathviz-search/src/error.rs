use std::fmt;

use pathviz_core::Pos;

/// Errors raised by grid construction, run creation and path reconstruction.
///
/// An exhausted open set is not an error; it ends a run with
/// [`Outcome::Unreachable`](crate::Outcome::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: i32, cols: i32 },
    /// The position is not part of the grid.
    OutOfBounds(Pos),
    /// Start and finish would share a cell.
    SameEndpoints(Pos),
    /// A run was requested with a wall as start or goal.
    WallEndpoint(Pos),
    /// Walls cannot be placed on the start or finish cell.
    EndpointEdit(Pos),
    /// Path reconstruction was requested for a node the search never visited.
    GoalNotVisited(Pos),
    /// Predecessor links from this node do not lead back to a root.
    BrokenChain(Pos),
    /// A text layout row has a different width than the first one.
    InconsistentRows { line: usize },
    /// A text layout contains an unknown character.
    InvalidRune { ch: char, pos: Pos },
    /// A text layout lacks the `S` or `F` marker.
    MissingEndpoint(char),
    /// A text layout has more than one `S` or `F` marker.
    DuplicateEndpoint { ch: char, pos: Pos },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            Self::SameEndpoints(p) => write!(f, "start and finish both at {p}"),
            Self::WallEndpoint(p) => {
                write!(f, "invalid configuration: endpoint {p} is a wall")
            }
            Self::EndpointEdit(p) => write!(f, "cannot place a wall on endpoint {p}"),
            Self::GoalNotVisited(p) => write!(f, "node {p} was never visited"),
            Self::BrokenChain(p) => {
                write!(f, "predecessor chain from {p} does not terminate")
            }
            Self::InconsistentRows { line } => {
                write!(f, "grid layout: line {line} has an inconsistent width")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout: invalid rune '{ch}' at {pos}")
            }
            Self::MissingEndpoint(ch) => write!(f, "grid layout: no '{ch}' marker"),
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "grid layout: second '{ch}' marker at {pos}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_errors_quote_the_rune() {
        let e = SearchError::InvalidRune {
            ch: 'x',
            pos: Pos::new(1, 2),
        };
        assert_eq!(e.to_string(), "grid layout: invalid rune 'x' at (1, 2)");
        assert_eq!(
            SearchError::MissingEndpoint('S').to_string(),
            "grid layout: no 'S' marker"
        );
        assert!(SearchError::DuplicateEndpoint {
            ch: 'F',
            pos: Pos::ZERO
        }
        .to_string()
        .is_ascii());
    }
}

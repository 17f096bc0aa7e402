use core::fmt;

use crate::Cell;

/// Rejected start or goal placement. Raised before any search runs; an unreachable goal is not
/// an error but [SearchResult::Unreachable](crate::SearchResult::Unreachable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointError {
    OutOfBounds(Cell),
    OnWall(Cell),
    /// Start and goal are the same cell.
    Coincident(Cell),
    /// The start or goal has not been placed yet.
    Missing,
    /// Both endpoints are already placed.
    AlreadyPlaced,
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointError::OutOfBounds(cell) => write!(f, "endpoint {} is outside the grid", cell),
            EndpointError::OnWall(cell) => write!(f, "endpoint {} is on a wall", cell),
            EndpointError::Coincident(cell) => {
                write!(f, "start and goal are both placed at {}", cell)
            }
            EndpointError::Missing => write!(f, "start and goal must both be placed"),
            EndpointError::AlreadyPlaced => write!(f, "start and goal are already placed"),
        }
    }
}

impl std::error::Error for EndpointError {}

/// An algorithm name that is not one of `A*`, `Dijkstra`, `BFS` or `DFS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown search algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

//! # robo_pathfinding
//!
//! Pathfinding on a square maze grid with unit-cost, 4-directional movement. Four strategies
//! share one control loop and one path reconstruction routine:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the Manhattan distance.
//! Pre-computed [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! answer reachability without searching.
//!
//! ```
//! use robo_pathfinding::{search, Algorithm, Cell, PathingGrid, SearchResult};
//!
//! let mut grid = PathingGrid::new(5);
//! grid.set_wall(Cell::new(1, 1), true);
//! let result = search(&grid, Cell::new(0, 0), Cell::new(4, 4), Algorithm::AStar);
//! assert_eq!(result.len(), Some(8));
//! ```
pub mod cell;
pub mod error;
pub mod frontier;
pub mod path;
pub mod pathing_grid;
pub mod search;
pub mod session;
pub mod solver;

use core::fmt;
use std::str::FromStr;

pub use crate::cell::Cell;
pub use crate::error::{EndpointError, ParseAlgorithmError};
pub use crate::pathing_grid::PathingGrid;
pub use crate::search::Exploration;
pub use crate::session::{Endpoint, Session, SessionConfig};

use crate::solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, GridSolver,
};

/// Side length of the grid in the reference configuration.
pub const GRID_SIZE: usize = 20;
/// Cost of a single orthogonal step.
pub const C: i32 = 1;
/// Inline capacity for neighbour lists; a cell has at most four.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Selects the search strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Whether every path returned by this algorithm is a shortest one.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Outcome of a search: the cells from start to goal inclusive, or [SearchResult::Unreachable].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Path(Vec<Cell>),
    Unreachable,
}

impl SearchResult {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchResult::Unreachable)
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            SearchResult::Path(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self {
            SearchResult::Path(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }

    /// Number of steps (edges) in the path.
    pub fn len(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

impl From<Exploration<Cell, i32>> for SearchResult {
    fn from(exploration: Exploration<Cell, i32>) -> Self {
        match exploration.path {
            Some(path) => SearchResult::Path(path),
            None => SearchResult::Unreachable,
        }
    }
}

/// Finds a path from `start` to `goal` on `grid`. Assumes both endpoints are distinct free cells
/// inside the grid, use [try_search] to have that checked.
pub fn search(grid: &PathingGrid, start: Cell, goal: Cell, algorithm: Algorithm) -> SearchResult {
    explore(grid, start, goal, algorithm).into()
}

/// Like [search], additionally reporting the order in which cells were finalized.
pub fn explore(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
) -> Exploration<Cell, i32> {
    log::debug!("Running {} from {} to {}", algorithm, start, goal);
    match algorithm {
        Algorithm::Bfs => BfsSolver.explore(grid, start, goal),
        Algorithm::Dfs => DfsSolver.explore(grid, start, goal),
        Algorithm::Dijkstra => DijkstraSolver.explore(grid, start, goal),
        Algorithm::AStar => AstarSolver::new().explore(grid, start, goal),
    }
}

/// Checks the preconditions of [search]: both endpoints in bounds, free and distinct.
pub fn validate_endpoints(grid: &PathingGrid, start: Cell, goal: Cell) -> Result<(), EndpointError> {
    for cell in [start, goal] {
        if !grid.in_bounds(cell) {
            return Err(EndpointError::OutOfBounds(cell));
        }
        if grid.is_wall(cell) {
            return Err(EndpointError::OnWall(cell));
        }
    }
    if start == goal {
        return Err(EndpointError::Coincident(start));
    }
    Ok(())
}

/// [search] preceded by [validate_endpoints].
pub fn try_search(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
) -> Result<SearchResult, EndpointError> {
    validate_endpoints(grid, start, goal)?;
    Ok(search(grid, start, goal, algorithm))
}

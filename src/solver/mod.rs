use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;
use crate::search::{best_first, Exploration};
use crate::{Cell, SearchResult, C};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// A search strategy over a [PathingGrid]. Implementors only pick a frontier discipline and a
/// heuristic, the control loop and path reconstruction are shared.
pub trait GridSolver {
    type Frontier: Frontier<Cell, i32> + Default;

    /// Estimated remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32;

    /// Runs the search and returns the finalization order alongside the path.
    fn explore(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> Exploration<Cell, i32> {
        best_first(
            &start,
            Self::Frontier::default(),
            |node| grid.neighbors(node).into_iter().map(|n| (n, C)),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
    }

    fn get_path_single_goal(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        self.explore(grid, start, goal).into()
    }
}

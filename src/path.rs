use indexmap::IndexMap;
use itertools::Itertools;

use crate::{pathing_grid::PathingGrid, Cell, C};

/// Walks the predecessor indices from `terminal` back to the start, which is marked by a
/// parent index of [usize::MAX], and returns the nodes ordered from start to terminal.
pub fn reverse_path<N, S>(parents: &IndexMap<N, usize, S>, terminal: usize) -> Vec<N>
where
    N: Copy,
{
    let mut path: Vec<N> = std::iter::successors(parents.get_index(terminal), |(_, parent)| {
        parents.get_index(**parent)
    })
    .map(|(node, _)| *node)
    .collect();
    path.reverse();
    path
}

/// Checks that `path` leads from `start` to `goal` over free cells in orthogonal steps.
pub fn is_valid_path(grid: &PathingGrid, path: &[Cell], start: Cell, goal: Cell) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|c| grid.is_free(*c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

/// Cost of following `path` with unit steps.
pub fn path_cost(path: &[Cell]) -> i32 {
    path.len().saturating_sub(1) as i32 * C
}

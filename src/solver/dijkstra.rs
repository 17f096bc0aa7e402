use crate::frontier::PriorityFrontier;
use crate::{solver::GridSolver, Cell};

/// Uniform-cost search: A* without a heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier<Cell, i32>;

    fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
        0
    }
}

use crate::frontier::FifoFrontier;
use crate::{solver::GridSolver, Cell};

/// Breadth-first search. Cells are expanded in order of edge distance, so the first time the
/// goal is dequeued its path has the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<Cell, i32>;

    fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
        0
    }
}

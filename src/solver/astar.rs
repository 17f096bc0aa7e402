use crate::frontier::PriorityFrontier;
use crate::{solver::GridSolver, Cell, C};

/// A* with the Manhattan distance, which is admissible and consistent for unit-cost
/// 4-directional moves. A `heuristic_factor` above 1.0 weights the heuristic, trading optimal
/// paths for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<Cell, i32>;

    /// Just the Manhattan cost times a heuristic factor.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        ((p1.manhattan_distance(p2) * C) as f32 * self.heuristic_factor) as i32
    }
}

use crate::{Cell, GRID_SIZE, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] is a square occupancy map where a cell is either free or a wall ([true] in the
/// underlying [BoolGrid]). Columns map to x and rows map to y. In addition to the raw values it
/// maintains connected components of free cells in a [UnionFind] structure, which answer
/// reachability queries without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    size: usize,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(GRID_SIZE)
    }
}

impl PathingGrid {
    /// Creates an N×N grid with every cell free.
    pub fn new(size: usize) -> PathingGrid {
        let mut pathing_grid = PathingGrid {
            grid: BoolGrid::new(size, size, false),
            components: UnionFind::new(size * size),
            components_dirty: false,
            size,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    pub fn dimensions(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.size as i32;
        (0..n).contains(&cell.row) && (0..n).contains(&cell.col)
    }

    /// Out-of-bounds cells are reported as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.grid.get(cell.col, cell.row)
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Every free cell one orthogonal step from `cell`, ordered up, down, left, right.
    pub fn neighbors(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.is_free(*n))
            .collect()
    }

    /// Marks a cell as wall or free. Joins newly connected components and flags the components
    /// as dirty if they are (potentially) broken apart.
    pub fn set_wall(&mut self, cell: Cell, blocked: bool) {
        if !self.in_bounds(cell) {
            warn!("Ignoring wall update at {} outside of a {}x{} grid", cell, self.size, self.size);
            return;
        }
        let was_wall = self.grid.get(cell.col, cell.row);
        self.grid.set(cell.col, cell.row, blocked);
        if blocked && !was_wall {
            self.components_dirty = true;
        } else if !blocked && was_wall {
            let ix = self.get_ix(cell);
            for n in self.neighbors(&cell) {
                let n_ix = self.get_ix(n);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Flips a cell between wall and free and returns whether it is now a wall.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        let blocked = !self.is_wall(cell);
        self.set_wall(cell, blocked);
        self.is_wall(cell)
    }

    pub fn clear_walls(&mut self) {
        self.grid = BoolGrid::new(self.size, self.size, false);
        self.generate_components();
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    pub fn wall_count(&self) -> usize {
        self.cells().filter(|c| self.is_wall(*c)).count()
    }

    fn get_ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.size + cell.col as usize
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> usize {
        self.components.find(self.get_ix(*cell))
    }

    /// Checks if start and goal are free and on the same component. Components must be up to
    /// date, see [update](Self::update).
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.is_free(*start) && self.is_free(*goal) {
            !self
                .components
                .equiv(self.get_ix(*start), self.get_ix(*goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        for cell in self.cells().collect::<Vec<_>>() {
            if self.is_wall(cell) {
                continue;
            }
            let ix = self.get_ix(cell);
            // Down and right suffice since every pair is visited from one side.
            for n in [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)] {
                if self.is_free(n) {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.size as i32;
        for row in 0..n {
            let line = (0..n)
                .map(|col| if self.is_wall(Cell::new(row, col)) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

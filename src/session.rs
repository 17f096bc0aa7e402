//! A puzzle session owns the grid and the two endpoints between searches. Editing and searching
//! are separate phases: every search borrows the grid read-only and edits bump a revision
//! counter that invalidates any cached result.
use log::{debug, info};

use crate::search::Exploration;
use crate::{explore, validate_endpoints, Algorithm, Cell, EndpointError, PathingGrid, SearchResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side length of the square grid.
    pub size: usize,
    pub algorithm: Algorithm,
    /// Replay the previous result while grid, endpoints and algorithm are unchanged.
    pub cache_results: bool,
    /// Consult the connected components before searching and skip the search if the goal is
    /// on another component.
    pub check_components: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            size: crate::GRID_SIZE,
            algorithm: Algorithm::default(),
            cache_results: false,
            check_components: false,
        }
    }
}

/// Which endpoint a placement assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

#[derive(Clone, Debug)]
struct CachedSearch {
    revision: u64,
    algorithm: Algorithm,
    start: Cell,
    goal: Cell,
    exploration: Exploration<Cell, i32>,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    grid: PathingGrid,
    start: Option<Cell>,
    goal: Option<Cell>,
    algorithm: Algorithm,
    revision: u64,
    cache: Option<CachedSearch>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Session {
        Session {
            config,
            grid: PathingGrid::new(config.size),
            start: None,
            goal: None,
            algorithm: config.algorithm,
            revision: 0,
            cache: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    pub fn start(&self) -> Option<Cell> {
        self.start
    }
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Places the start on the first call and the goal on the second. Walls, cells outside the
    /// grid and the start cell itself are rejected for the goal.
    pub fn place_endpoint(&mut self, cell: Cell) -> Result<Endpoint, EndpointError> {
        if !self.grid.in_bounds(cell) {
            return Err(EndpointError::OutOfBounds(cell));
        }
        if self.grid.is_wall(cell) {
            return Err(EndpointError::OnWall(cell));
        }
        let placed = match (self.start, self.goal) {
            (None, _) => {
                self.start = Some(cell);
                Endpoint::Start
            }
            (Some(start), None) if start == cell => return Err(EndpointError::Coincident(cell)),
            (Some(_), None) => {
                self.goal = Some(cell);
                Endpoint::Goal
            }
            (Some(_), Some(_)) => return Err(EndpointError::AlreadyPlaced),
        };
        info!("Placed {:?} at {}", placed, cell);
        Ok(placed)
    }

    fn is_endpoint(&self, cell: Cell) -> bool {
        self.start == Some(cell) || self.goal == Some(cell)
    }

    /// Sets a wall unless the cell is outside the grid or holds an endpoint. Returns whether the
    /// update was applied.
    pub fn set_wall(&mut self, cell: Cell, blocked: bool) -> bool {
        if !self.grid.in_bounds(cell) || self.is_endpoint(cell) {
            return false;
        }
        if self.grid.is_wall(cell) != blocked {
            self.grid.set_wall(cell, blocked);
            self.revision += 1;
        }
        true
    }

    /// Flips a wall, with the same restrictions as [set_wall](Self::set_wall).
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        let blocked = !self.grid.is_wall(cell);
        self.set_wall(cell, blocked)
    }

    pub fn clear_walls(&mut self) {
        info!("Clearing {} walls", self.grid.wall_count());
        self.grid.clear_walls();
        self.revision += 1;
    }

    /// Clears walls and both endpoints.
    pub fn reset(&mut self) {
        self.clear_walls();
        self.start = None;
        self.goal = None;
        self.cache = None;
    }

    pub fn find_path(&mut self) -> Result<SearchResult, EndpointError> {
        self.explore().map(SearchResult::from)
    }

    /// Runs the selected algorithm between the placed endpoints.
    pub fn explore(&mut self) -> Result<Exploration<Cell, i32>, EndpointError> {
        let (start, goal) = match (self.start, self.goal) {
            (Some(start), Some(goal)) => (start, goal),
            _ => return Err(EndpointError::Missing),
        };
        validate_endpoints(&self.grid, start, goal)?;
        if self.config.cache_results {
            if let Some(cached) = self.cache.as_ref().filter(|cached| {
                cached.revision == self.revision
                    && cached.algorithm == self.algorithm
                    && cached.start == start
                    && cached.goal == goal
            }) {
                debug!("Replaying cached {} result", cached.algorithm);
                return Ok(cached.exploration.clone());
            }
        }
        if self.config.check_components {
            self.grid.update();
        }
        let exploration = if self.config.check_components && self.grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            Exploration {
                path: None,
                cost: 0,
                visited: Vec::new(),
            }
        } else {
            explore(&self.grid, start, goal, self.algorithm)
        };
        if self.config.cache_results {
            self.cache = Some(CachedSearch {
                revision: self.revision,
                algorithm: self.algorithm,
                start,
                goal,
                exploration: exploration.clone(),
            });
        }
        Ok(exploration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: usize) -> Session {
        Session::new(SessionConfig {
            size,
            ..SessionConfig::default()
        })
    }

    #[test]
    fn placement_order() {
        let mut s = session(5);
        s.set_wall(Cell::new(2, 2), true);
        assert_eq!(
            s.place_endpoint(Cell::new(2, 2)),
            Err(EndpointError::OnWall(Cell::new(2, 2)))
        );
        assert_eq!(
            s.place_endpoint(Cell::new(5, 0)),
            Err(EndpointError::OutOfBounds(Cell::new(5, 0)))
        );
        assert_eq!(s.place_endpoint(Cell::new(0, 0)), Ok(Endpoint::Start));
        assert_eq!(
            s.place_endpoint(Cell::new(0, 0)),
            Err(EndpointError::Coincident(Cell::new(0, 0)))
        );
        assert_eq!(s.place_endpoint(Cell::new(4, 4)), Ok(Endpoint::Goal));
        assert_eq!(
            s.place_endpoint(Cell::new(3, 3)),
            Err(EndpointError::AlreadyPlaced)
        );
        assert_eq!(s.start(), Some(Cell::new(0, 0)));
        assert_eq!(s.goal(), Some(Cell::new(4, 4)));
    }

    #[test]
    fn walls_cannot_cover_endpoints() {
        let mut s = session(3);
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        assert!(!s.toggle_wall(Cell::new(0, 0)));
        assert!(!s.toggle_wall(Cell::new(-1, 0)));
        assert!(s.toggle_wall(Cell::new(1, 1)));
        assert!(s.grid().is_wall(Cell::new(1, 1)));
        assert!(s.grid().is_free(Cell::new(0, 0)));
    }

    #[test]
    fn find_path_requires_both_endpoints() {
        let mut s = session(3);
        assert_eq!(s.find_path(), Err(EndpointError::Missing));
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        assert_eq!(s.find_path(), Err(EndpointError::Missing));
        s.place_endpoint(Cell::new(2, 2)).unwrap();
        assert_eq!(s.find_path().unwrap().len(), Some(4));
    }

    #[test]
    fn edits_between_searches_are_seen() {
        let mut s = Session::new(SessionConfig {
            size: 3,
            cache_results: true,
            ..SessionConfig::default()
        });
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        s.place_endpoint(Cell::new(0, 2)).unwrap();
        assert_eq!(s.find_path().unwrap().len(), Some(2));
        assert_eq!(s.find_path().unwrap().len(), Some(2));
        s.toggle_wall(Cell::new(0, 1));
        assert_eq!(s.find_path().unwrap().len(), Some(4));
        s.toggle_wall(Cell::new(1, 1));
        s.toggle_wall(Cell::new(2, 1));
        assert_eq!(s.find_path(), Ok(SearchResult::Unreachable));
        s.clear_walls();
        assert_eq!(s.find_path().unwrap().len(), Some(2));
    }

    #[test]
    fn cache_distinguishes_algorithms() {
        let mut s = Session::new(SessionConfig {
            size: 3,
            cache_results: true,
            ..SessionConfig::default()
        });
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        s.place_endpoint(Cell::new(2, 0)).unwrap();
        assert_eq!(s.find_path().unwrap().len(), Some(2));
        s.set_algorithm(Algorithm::Dfs);
        assert_eq!(s.algorithm(), Algorithm::Dfs);
        assert_eq!(s.find_path().unwrap().len(), Some(6));
    }

    #[test]
    fn component_check_skips_search() {
        let mut s = Session::new(SessionConfig {
            size: 3,
            check_components: true,
            ..SessionConfig::default()
        });
        for row in 0..3 {
            s.set_wall(Cell::new(row, 1), true);
        }
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        s.place_endpoint(Cell::new(0, 2)).unwrap();
        let exploration = s.explore().unwrap();
        assert!(!exploration.found());
        assert!(exploration.visited.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = Session::default();
        assert_eq!(s.grid().dimensions(), crate::GRID_SIZE);
        s.place_endpoint(Cell::new(0, 0)).unwrap();
        s.set_wall(Cell::new(3, 3), true);
        s.reset();
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().wall_count(), 0);
    }
}

/// Fuzzes the solvers on many random grids: a path must be found exactly when start and goal
/// share a connected component, the optimal strategies must match an independent breadth-first
/// distance, and every path must be a valid walk over free cells.
use robo_pathfinding::path::is_valid_path;
use robo_pathfinding::{explore, search, Algorithm, Cell, PathingGrid};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(n);
    for cell in pathing_grid.cells().collect::<Vec<_>>() {
        pathing_grid.set_wall(cell, rng.gen_bool(0.35));
    }
    pathing_grid.update();
    pathing_grid
}

fn random_free_cell(grid: &PathingGrid, rng: &mut StdRng) -> Option<Cell> {
    let free = grid.cells().filter(|c| grid.is_free(*c)).collect::<Vec<_>>();
    free.choose(rng).copied()
}

/// Plain flood fill distance, written without any of the crate's search machinery.
fn brute_force_distance(grid: &PathingGrid, start: Cell, goal: Cell) -> Option<usize> {
    let n = grid.dimensions();
    let mut dist = vec![vec![None; n]; n];
    dist[start.row as usize][start.col as usize] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(c) = queue.pop_front() {
        let d = dist[c.row as usize][c.col as usize].unwrap();
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Cell::new(c.row + dr, c.col + dc);
            if grid.is_free(next) && dist[next.row as usize][next.col as usize].is_none() {
                dist[next.row as usize][next.col as usize] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist[goal.row as usize][goal.col as usize]
}

fn visualize_grid(grid: &PathingGrid, start: &Cell, end: &Cell) {
    for cell in grid.cells() {
        if *start == cell {
            print!("S");
        } else if *end == cell {
            print!("G");
        } else if grid.is_wall(cell) {
            print!("#");
        } else {
            print!(".");
        }
        if cell.col as usize == grid.dimensions() - 1 {
            println!();
        }
    }
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let (Some(start), Some(goal)) = (
            random_free_cell(&grid, &mut rng),
            random_free_cell(&grid, &mut rng),
        ) else {
            continue;
        };
        if start == goal {
            continue;
        }
        let reachable = grid.reachable(&start, &goal);
        let distance = brute_force_distance(&grid, start, goal);
        assert_eq!(reachable, distance.is_some());
        for algorithm in Algorithm::ALL {
            let result = search(&grid, start, goal, algorithm);
            if result.is_unreachable() == reachable {
                visualize_grid(&grid, &start, &goal);
            }
            assert_eq!(result.is_unreachable(), !reachable, "{algorithm}");
            if let Some(path) = result.path() {
                assert!(is_valid_path(&grid, path, start, goal), "{algorithm}");
                if algorithm.is_optimal() {
                    assert_eq!(result.len(), distance, "{algorithm}");
                }
            }
        }
    }
}

#[test]
fn fuzz_astar_matches_dijkstra() {
    const N: usize = 12;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Cell::new(0, 0);
    let goal = Cell::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set_wall(start, false);
        grid.set_wall(goal, false);
        let astar = explore(&grid, start, goal, Algorithm::AStar);
        let dijkstra = explore(&grid, start, goal, Algorithm::Dijkstra);
        assert_eq!(astar.found(), dijkstra.found());
        assert_eq!(astar.cost, dijkstra.cost);
        assert!(astar.visited.len() <= dijkstra.visited.len());
    }
}

#[test]
fn fuzz_idempotent() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let grid = random_grid(10, &mut rng);
        let (Some(start), Some(goal)) = (
            random_free_cell(&grid, &mut rng),
            random_free_cell(&grid, &mut rng),
        ) else {
            continue;
        };
        for algorithm in Algorithm::ALL {
            assert_eq!(
                explore(&grid, start, goal, algorithm),
                explore(&grid, start, goal, algorithm)
            );
        }
    }
}

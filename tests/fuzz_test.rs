/// Fuzzes the two route engines by checking for many random grids that a
/// path is found exactly when an independent breadth-first flood fill says
/// the goal is reachable, that A* path lengths match the flood-fill
/// distance, and that searches are deterministic and leave the grid intact.
use grid_route::{is_valid_path, RouteGrid, SearchOutcome};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> RouteGrid {
    let mut grid: RouteGrid = RouteGrid::new(w, h, false);
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            grid.set(x, y, rng.gen_bool(0.35));
        }
    }
    grid.set(0, 0, false);
    grid.set(w - 1, h - 1, false);
    grid.generate_components();
    grid
}

fn visualize_grid(grid: &RouteGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x as usize, y as usize) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Breadth-first flood fill used as an oracle for reachability and shortest
/// distance, independent of either engine.
fn bfs_distance(grid: &RouteGrid, start: Point, goal: Point) -> Option<usize> {
    let mut distances = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |p: &Point| p.y as usize * grid.width() + p.x as usize;
    distances[ix(&start)] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return Some(distances[ix(&cell)]);
        }
        for next in grid.neighbourhood(&cell) {
            if distances[ix(&next)] == usize::MAX {
                distances[ix(&next)] = distances[ix(&cell)] + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn fuzz_astar_against_flood_fill() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let oracle = bfs_distance(&grid, start, end);
        let before = grid.to_string();
        let outcome = grid.find_path_astar(start, end).unwrap();
        match (&outcome, oracle) {
            (SearchOutcome::Found(path), Some(distance)) => {
                assert!(is_valid_path(&grid, path));
                assert_eq!(path[0], start);
                assert_eq!(*path.last().unwrap(), end);
                // Unit edge cost, so optimality means matching the
                // flood-fill distance exactly.
                assert_eq!(path.len(), distance + 1);
            }
            (SearchOutcome::NotFound, None) => {}
            _ => {
                visualize_grid(&grid, &start, &end);
                panic!("A* disagrees with flood fill: {outcome:?} vs {oracle:?}");
            }
        }
        assert_eq!(grid.to_string(), before);
        assert_eq!(grid.find_path_astar(start, end).unwrap(), outcome);
    }
}

#[test]
fn fuzz_backtracking_against_flood_fill() {
    const N: usize = 6;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let oracle = bfs_distance(&grid, start, end);
        let before = grid.to_string();
        let outcome = grid.find_path_backtracking(start, end).unwrap();
        match (&outcome, oracle) {
            (SearchOutcome::Found(path), Some(distance)) => {
                assert!(is_valid_path(&grid, path));
                assert_eq!(path[0], start);
                assert_eq!(*path.last().unwrap(), end);
                // The contract only promises the best path its exploration
                // order discovered, never anything shorter than optimal.
                assert!(path.len() >= distance + 1);
            }
            (SearchOutcome::NotFound, None) => {}
            _ => {
                visualize_grid(&grid, &start, &end);
                panic!("backtracking disagrees with flood fill: {outcome:?} vs {oracle:?}");
            }
        }
        assert_eq!(grid.to_string(), before);
        assert_eq!(grid.find_path_backtracking(start, end).unwrap(), outcome);
    }
}

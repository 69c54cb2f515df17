//! Exhaustive depth-first route search with best-so-far pruning. Unlike the
//! A* engine this walks every simple path the pruning rule leaves open, in a
//! fixed right, down, left, up direction order, and keeps the shortest path
//! seen in a [BestPath] accumulator scoped to one search call.

use crate::route_grid::{RouteGrid, VisitOverlay};
use crate::solver::SearchOutcome;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::debug;

/// Exploration order: right, down, left, up (y grows downwards).
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Best path recorded so far, shared by reference across the recursion of a
/// single search call and dropped when that call returns.
#[derive(Default)]
struct BestPath(Option<Vec<Point>>);

impl BestPath {
    fn len(&self) -> Option<usize> {
        self.0.as_ref().map(Vec::len)
    }
    fn record(&mut self, path: &[Point]) {
        debug!("recording best path of {} cells", path.len());
        self.0 = Some(path.to_vec());
    }
}

pub(crate) fn search(grid: &RouteGrid, start: Point, goal: Point) -> SearchOutcome {
    let mut overlay = VisitOverlay::new(grid.width(), grid.height());
    overlay.mark(start);
    let mut path = vec![start];
    let mut best = BestPath::default();
    explore(grid, &mut overlay, start, goal, 0, &mut path, &mut best);
    // Every mark below the start has been cleared again.
    debug_assert_eq!(*path, [start]);
    match best.0 {
        Some(best_path) => SearchOutcome::Found(best_path),
        None => SearchOutcome::NotFound,
    }
}

/// One recursion step: prune, check the goal, then expand the neighbours.
/// Each mark/push made here is undone right after the recursive call
/// returns, whatever the outcome, so the overlay and the path stack are
/// restored on every exit from the branch.
fn explore(
    grid: &RouteGrid,
    overlay: &mut VisitOverlay,
    cell: Point,
    goal: Point,
    depth: usize,
    path: &mut Vec<Point>,
    best: &mut BestPath,
) {
    // A branch this deep can no longer beat the recorded best.
    if best.len().is_some_and(|best_len| best_len <= depth) {
        return;
    }
    if cell == goal {
        if best.len().map_or(true, |best_len| depth < best_len) {
            best.record(path);
        }
        return;
    }
    for (dx, dy) in DIRECTIONS {
        let next = Point::new(cell.x + dx, cell.y + dy);
        if !grid.is_traversable(next) || overlay.is_visited(next) {
            continue;
        }
        overlay.mark(next);
        path.push(next);
        explore(grid, overlay, next, goal, depth + 1, path, best);
        overlay.clear(next);
        path.pop();
    }
}

//! # grid_route
//!
//! Route finding and comparison on small obstacle-bearing grids. Two engines
//! work over the same 4-connected, unit-cost grid model:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan
//! heuristic and deterministic FIFO tie-breaking among equal-cost candidates,
//! and an exhaustive depth-first
//! [backtracking](https://en.wikipedia.org/wiki/Backtracking) search that
//! prunes branches against the best path found so far. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Searches are started through [RouteGrid::find_path_astar] and
//! [RouteGrid::find_path_backtracking]; both reject invalid endpoints with a
//! [SearchError] and otherwise report a [SearchOutcome].

pub mod heuristic;
pub mod route_grid;
pub mod solver;

pub use route_grid::{CellKind, RouteGrid};
pub use solver::{SearchError, SearchOutcome};

use grid_util::point::Point;
use itertools::Itertools;

/// Checks that `path` is a route the grid model accepts: every cell
/// traversable and every consecutive pair of cells 4-adjacent. Paths built by
/// hand in a presentation layer can be checked with this before display; the
/// engines only ever return sequences that pass it.
pub fn is_valid_path(grid: &RouteGrid, path: &[Point]) -> bool {
    path.iter().all(|p| grid.is_traversable(*p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| heuristic::manhattan(a, b) == 1)
}

use crate::route_grid::{CellKind, RouteGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use thiserror::Error;

pub mod astar;
pub mod backtracking;

/// Result of a route search: either a complete path from start to goal or a
/// marker that no route exists. Partial paths are never produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An ordered cell sequence from start (index 0) to goal (last index).
    /// Consecutive cells are 4-adjacent and none is an obstacle; a single
    /// cell means start == goal.
    Found(Vec<Point>),
    /// The grid is well-formed and the endpoints valid, but no traversable
    /// route connects them. An expected outcome, not an error.
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    /// The found path, if any.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
    /// Consumes the outcome, yielding the found path if any.
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Endpoint contract violations, rejected before any search work begins.
/// Distinct from [SearchOutcome::NotFound], which is a valid outcome of a
/// well-formed search.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Point,
        width: usize,
        height: usize,
    },
    #[error("cell {0} is an obstacle")]
    Blocked(Point),
}

/// Checks that both endpoints are in bounds and free.
pub(crate) fn validate_endpoints(
    grid: &RouteGrid,
    start: Point,
    goal: Point,
) -> Result<(), SearchError> {
    for cell in [start, goal] {
        if !grid.in_bounds(cell) {
            return Err(SearchError::OutOfBounds {
                cell,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.classify(cell) == CellKind::Obstacle {
            return Err(SearchError::Blocked(cell));
        }
    }
    Ok(())
}

use crate::solver::{self, SearchError, SearchOutcome};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Free,
    Obstacle,
}

/// Neighbour enumeration order used by the A* engine: up, right, down, left,
/// with the y-axis growing downwards.
const NEUMANN_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// [RouteGrid] maintains the raw [bool] grid values in a [BoolGrid] that
/// determine whether a cell is an obstacle ([true]) or free ([false]),
/// together with component information in a [UnionFind] structure used to
/// answer unreachable queries without flood-filling. Implements [Grid] by
/// building on [BoolGrid].
///
/// Both search entry points take `&self`: neither engine mutates the grid,
/// and the backtracking engine tracks visitation in a private
/// [VisitOverlay] instead.
#[derive(Clone, Debug)]
pub struct RouteGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for RouteGrid {
    fn default() -> RouteGrid {
        RouteGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: true,
        }
    }
}

impl RouteGrid {
    /// Classifies an in-bounds cell as free or an obstacle.
    pub fn classify(&self, cell: Point) -> CellKind {
        debug_assert!(self.in_bounds(cell));
        if self.grid.get(cell.x as usize, cell.y as usize) {
            CellKind::Obstacle
        } else {
            CellKind::Free
        }
    }
    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0 && cell.y >= 0 && self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
    }
    /// A cell can be routed through iff it is on the grid and free.
    pub fn is_traversable(&self, cell: Point) -> bool {
        self.in_bounds(cell) && self.classify(cell) == CellKind::Free
    }
    /// The traversable 4-neighbours of a cell, in the fixed
    /// up, right, down, left enumeration order.
    pub fn neighbourhood(&self, cell: &Point) -> Vec<Point> {
        NEUMANN_DIRECTIONS
            .iter()
            .map(|&(dx, dy)| Point::new(cell.x + dx, cell.y + dy))
            .filter(|p| self.is_traversable(*p))
            .collect()
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on different components.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
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
    /// Generates a new [UnionFind] structure and links up 4-adjacent free
    /// cells to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.grid.point_in_bounds(*p) && !self.grid.get_point(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Computes the cost-minimal route from `start` to `goal` using A* with
    /// the Manhattan heuristic. Among equal-cost candidates the frontier pops
    /// in insertion order, so repeated calls return the identical path.
    ///
    /// Out-of-bounds or obstacle endpoints are rejected with a [SearchError]
    /// before any search work; a missing route is the
    /// [SearchOutcome::NotFound] value, not an error.
    pub fn find_path_astar(&self, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
        solver::validate_endpoints(self, start, goal)?;
        if self.known_unreachable(&start, &goal) {
            return Ok(SearchOutcome::NotFound);
        }
        Ok(solver::astar::search(self, start, goal))
    }

    /// Exhaustively explores routes from `start` to `goal` depth-first in a
    /// fixed right, down, left, up direction order, pruning branches that
    /// cannot beat the best path recorded so far. Returns the shortest path
    /// that exploration order discovers; endpoint validation and the
    /// NotFound contract match [find_path_astar](Self::find_path_astar).
    pub fn find_path_backtracking(
        &self,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome, SearchError> {
        solver::validate_endpoints(self, start, goal)?;
        if self.known_unreachable(&start, &goal) {
            return Ok(SearchOutcome::NotFound);
        }
        Ok(solver::backtracking::search(self, start, goal))
    }

    /// Component pre-check shared by both engines. Skipped while the
    /// component data is dirty; the engine itself then settles reachability
    /// by exhausting its frontier or recursion.
    fn known_unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            return false;
        }
        if self.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for RouteGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        RouteGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            // Components are meaningless until generate_components has run.
            components_dirty: true,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.grid.get(x, y) != blocked && blocked {
            self.components_dirty = true;
        } else if !blocked {
            for n in self.neighbourhood(&p) {
                self.components.union(
                    self.grid.get_ix(x, y),
                    self.grid.get_ix(n.x as usize, n.y as usize),
                );
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Transient visitation overlay used by the backtracking engine to mark the
/// cells on its active recursion path. Every [mark](Self::mark) is paired
/// with a [clear](Self::clear) before the enclosing search returns, so the
/// overlay is back in its initial state whatever route the recursion exits
/// through. The annotated grid itself is never touched.
#[derive(Clone, Debug)]
pub struct VisitOverlay(BoolGrid);

impl VisitOverlay {
    pub fn new(width: usize, height: usize) -> Self {
        VisitOverlay(BoolGrid::new(width, height, false))
    }
    pub fn mark(&mut self, cell: Point) {
        self.0.set(cell.x as usize, cell.y as usize, true);
    }
    pub fn clear(&mut self, cell: Point) {
        self.0.set(cell.x as usize, cell.y as usize, false);
    }
    pub fn is_visited(&self, cell: Point) -> bool {
        self.0.get(cell.x as usize, cell.y as usize)
    }
}

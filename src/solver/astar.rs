//! A variant of the classic
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) in which
//! every frontier entry carries the full path taken to reach its node
//! together with an insertion sequence number. The sequence number is the
//! secondary ordering key, so among equal estimated costs entries pop in
//! FIFO insertion order and the search result is reproducible run to run.

use crate::heuristic::manhattan;
use crate::route_grid::RouteGrid;
use crate::solver::SearchOutcome;
use fxhash::{FxHashMap, FxHashSet};
use grid_util::point::Point;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct FrontierEntry<N, C> {
    estimated_cost: C,
    seq: u64,
    node: N,
    path: Vec<N>,
    cost: C,
}

impl<N, C: PartialEq> Eq for FrontierEntry<N, C> {}

impl<N, C: PartialEq> PartialEq for FrontierEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq.eq(&other.seq)
    }
}

impl<N, C: Ord> PartialOrd for FrontierEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for FrontierEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost; among equal estimates the lower
        // sequence number wins, giving FIFO expansion of ties. Both keys are
        // flipped because BinaryHeap is a max-heap.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Best-first search from `start` until `success` holds, where `successors`
/// lists the neighbours of a node with their move costs and `heuristic`
/// never overestimates the remaining cost. Returns the found path and its
/// cost, or [None] once the frontier runs empty.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut seq: u64 = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: heuristic(start),
        seq,
        node: start.clone(),
        path: vec![start.clone()],
        cost: Zero::zero(),
    });
    let mut best_cost: FxHashMap<N, C> = FxHashMap::default();
    best_cost.insert(start.clone(), Zero::zero());
    let mut finalized: FxHashSet<N> = FxHashSet::default();
    while let Some(FrontierEntry {
        node, path, cost, ..
    }) = frontier.pop()
    {
        // We may have inserted a node several times into the binary heap if
        // we found a better way to access it. Stale entries are discarded
        // here lazily instead of being removed from the heap eagerly.
        if !finalized.insert(node.clone()) {
            continue;
        }
        if success(&node) {
            return Some((path, cost));
        }
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            if best_cost
                .get(&successor)
                .is_some_and(|&known| known <= new_cost)
            {
                continue;
            }
            best_cost.insert(successor.clone(), new_cost);
            let estimated_cost = new_cost + heuristic(&successor);
            seq += 1;
            let mut extended = path.clone();
            extended.push(successor.clone());
            frontier.push(FrontierEntry {
                estimated_cost,
                seq,
                node: successor,
                path: extended,
                cost: new_cost,
            });
        }
    }
    None
}

/// Runs [astar] over the grid's 4-neighbourhood with the Manhattan heuristic
/// and unit move cost.
pub(crate) fn search(grid: &RouteGrid, start: Point, goal: Point) -> SearchOutcome {
    let result = astar(
        &start,
        |node| grid.neighbourhood(node).into_iter().map(|n| (n, 1)),
        |node| manhattan(node, &goal),
        |node| *node == goal,
    );
    match result {
        Some((path, _cost)) => SearchOutcome::Found(path),
        None => SearchOutcome::NotFound,
    }
}

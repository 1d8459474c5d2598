use crate::cell::CellState;
use crate::error::{GridError, ParseAlgorithmError};
use crate::grid::Grid;
use crate::observer::StepObserver;
use core::fmt;
use frontier::FrontierEntry;
use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexMap;
use log::{debug, info, warn};
use num_traits::{Bounded, Zero};
use std::collections::BinaryHeap;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dijkstra;
mod frontier;

pub use astar::AstarSolver;
pub use bfs::BfsSolver;
pub use dijkstra::DijkstraSolver;

/// Path cost in moves; every move between 4-neighbours costs [UNIT_COST](crate::UNIT_COST).
pub type Cost = u32;

/// Cell index -> index of the cell it was reached from on the best known path.
pub type PredecessorMap = IndexMap<usize, usize, FxBuildHasher>;

/// Outcome of a search run.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The end was reached; holds the path from start to end, both included.
    Found(Vec<Point>),
    /// The open set ran dry without reaching the end.
    NotFound,
    /// The observer asked the search to stop.
    Interrupted,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchResult::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Number of moves on the found path.
    pub fn path_length(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

/// The user-selectable search algorithms, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BestFirst,
    UniformCost,
    BreadthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BestFirst,
        Algorithm::UniformCost,
        Algorithm::BreadthFirst,
    ];

    /// Name shown in the algorithm menu and window caption.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::BestFirst => "A* Algorithm",
            Algorithm::UniformCost => "Dijkstra Algorithm",
            Algorithm::BreadthFirst => "BFS Algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::BestFirst => "astar",
            Algorithm::UniformCost => "dijkstra",
            Algorithm::BreadthFirst => "bfs",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix(" algorithm").unwrap_or(&lowered);
        match name {
            "astar" | "a*" | "best-first" | "bestfirst" => Ok(Algorithm::BestFirst),
            "dijkstra" | "uniform-cost" | "uniformcost" => Ok(Algorithm::UniformCost),
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Algorithm::BreadthFirst),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Manhattan distance between two points.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> Cost {
    ((p1.x - p2.x).abs() + (p1.y - p2.y).abs()) as Cost
}

/// Per-cell cost table. Every cell starts at `C::max_value()`, standing in for an infinite
/// cost, except the start which starts at zero.
#[derive(Clone, Debug)]
pub struct CostMap<C> {
    costs: Vec<C>,
}

impl<C: Bounded + Zero + Copy + PartialOrd> CostMap<C> {
    pub fn new(len: usize, start: usize) -> CostMap<C> {
        let mut costs = vec![C::max_value(); len];
        costs[start] = C::zero();
        CostMap { costs }
    }

    pub fn get(&self, ix: usize) -> C {
        self.costs[ix]
    }

    pub fn set(&mut self, ix: usize, cost: C) {
        self.costs[ix] = cost;
    }

    pub fn is_finite(&self, ix: usize) -> bool {
        self.costs[ix] < C::max_value()
    }
}

pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Estimated remaining cost from `p1` to `p2`. Zero for the uninformed solvers.
    fn heuristic(&self, _p1: &Point, _p2: &Point) -> Cost {
        0
    }

    /// Runs the search between two cell indices. Adjacency must already be computed.
    fn solve<O: StepObserver>(
        &self,
        grid: &mut Grid,
        start: usize,
        end: usize,
        observer: &mut O,
    ) -> SearchResult;

    /// Validates the endpoints and runs [solve](Self::solve).
    fn get_path_single_goal<O: StepObserver>(
        &self,
        grid: &mut Grid,
        start: Option<Point>,
        end: Option<Point>,
        observer: &mut O,
    ) -> Result<SearchResult, GridError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(GridError::MissingEndpoints);
        };
        let start_ix = grid.point_index(&start)?;
        let end_ix = grid.point_index(&end)?;
        info!("Running {} from {} to {}", self.algorithm(), start, end);
        let result = self.solve(grid, start_ix, end_ix, observer);
        match &result {
            SearchResult::Found(path) => {
                info!("{} found a path of length {}", self.algorithm(), path.len() - 1)
            }
            SearchResult::NotFound => warn!("{} is not reachable from {}", end, start),
            SearchResult::Interrupted => warn!("{} was interrupted", self.algorithm()),
        }
        Ok(result)
    }
}

/// Walks the predecessor map back from `end`, marking every cell except the start as
/// [Path](CellState::Path) and notifying the observer after each one, so the path appears
/// from the end side toward the start. Returns the path ordered start to end, or [None]
/// if the observer interrupted the walk.
pub fn reconstruct_path<O: StepObserver>(
    grid: &mut Grid,
    predecessors: &PredecessorMap,
    start: usize,
    end: usize,
    observer: &mut O,
) -> Option<Vec<Point>> {
    debug!("Reconstructing path over {} predecessors", predecessors.len());
    let mut path = vec![grid.cell_at(end).point()];
    let mut current = end;
    while let Some(&previous) = predecessors.get(&current) {
        current = previous;
        if current != start {
            grid.mark(current, CellState::Path);
        }
        path.push(grid.cell_at(current).point());
        if !observer.on_step(grid) {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Shared success handling: reconstruct the path and report it.
pub(crate) fn finish<O: StepObserver>(
    grid: &mut Grid,
    predecessors: &PredecessorMap,
    start: usize,
    end: usize,
    observer: &mut O,
) -> SearchResult {
    match reconstruct_path(grid, predecessors, start, end, observer) {
        // Search marks never overwrite Start/End, so the painted endpoints survive as-is.
        Some(path) => SearchResult::Found(path),
        None => SearchResult::Interrupted,
    }
}

/// Ties between entries of equal priority in the open set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TieBreak {
    /// First in, first out by insertion counter.
    Insertion,
    /// Lowest row-major cell index first.
    CellIndex,
}

/// Priority-driven search shared by [AstarSolver] and [DijkstraSolver]. The open set is a
/// binary heap keyed by `(cost + heuristic, tie)`; a companion set tracks which cells
/// currently sit in it so each cell is marked [Frontier](CellState::Frontier) once. An
/// improvement to a cell already in the open set pushes a fresh entry; the outdated one is
/// skipped when popped.
pub(crate) fn best_first<O, FH>(
    grid: &mut Grid,
    start: usize,
    end: usize,
    observer: &mut O,
    mut heuristic: FH,
    tie_break: TieBreak,
) -> SearchResult
where
    O: StepObserver,
    FH: FnMut(usize) -> Cost,
{
    let mut sequence: u64 = 0;
    let tie = |sequence: u64, index: usize| match tie_break {
        TieBreak::Insertion => sequence,
        TieBreak::CellIndex => index as u64,
    };
    let mut costs: CostMap<Cost> = CostMap::new(grid.cells().len(), start);
    let mut predecessors = PredecessorMap::default();
    let mut open_set = BinaryHeap::new();
    let mut open_members = FxHashSet::default();
    open_set.push(FrontierEntry {
        priority: heuristic(start),
        tie: tie(sequence, start),
        cost: 0,
        index: start,
    });
    open_members.insert(start);

    while let Some(FrontierEntry { cost, index, .. }) = open_set.pop() {
        if cost > costs.get(index) {
            continue;
        }
        open_members.remove(&index);
        if index == end {
            return finish(grid, &predecessors, start, end, observer);
        }
        let neighbours = grid.cell_at(index).neighbours.clone();
        for neighbour in neighbours {
            let tentative = cost + crate::UNIT_COST;
            if tentative < costs.get(neighbour) {
                predecessors.insert(neighbour, index);
                costs.set(neighbour, tentative);
                sequence += 1;
                open_set.push(FrontierEntry {
                    priority: tentative + heuristic(neighbour),
                    tie: tie(sequence, neighbour),
                    cost: tentative,
                    index: neighbour,
                });
                if open_members.insert(neighbour) {
                    grid.mark(neighbour, CellState::Frontier);
                }
            }
        }
        if !observer.on_step(grid) {
            return SearchResult::Interrupted;
        }
        if index != start {
            grid.mark(index, CellState::Visited);
        }
    }
    SearchResult::NotFound
}

//! # grid_search_visualizer
//!
//! The search engine behind an interactive grid pathfinding visualizer. Obstacles, a start
//! and an end are painted onto a square [Grid]; one of three searches
//! ([A*](solver::AstarSolver), [Dijkstra](solver::DijkstraSolver) or
//! [breadth-first](solver::BfsSolver)) then explores it, marking the frontier, the expanded
//! cells and finally the path on the grid itself. After every processed node the search
//! hands the grid to a [StepObserver] so the caller can redraw, and can be stopped from
//! there.
//!
//! Moves are 4-directional and all cost [UNIT_COST], so every search returns a shortest
//! path.
//!
//! ```
//! use grid_search_visualizer::{build_grid, run_search, Algorithm, CellState, NoopObserver};
//!
//! let mut grid = build_grid(5);
//! grid.set_cell_state(0, 0, CellState::Start).unwrap();
//! grid.set_cell_state(4, 4, CellState::End).unwrap();
//! grid.recompute_adjacency();
//! let (start, end) = (grid.start(), grid.end());
//! let result = run_search(Algorithm::BestFirst, &mut grid, start, end, &mut NoopObserver).unwrap();
//! assert_eq!(result.path_length(), Some(8));
//! ```
pub mod cell;
pub mod error;
pub mod grid;
pub mod observer;
pub mod palette;
pub mod solver;

use grid_util::point::Point;

pub use crate::cell::{Cell, CellState};
pub use crate::error::{GridError, ParseAlgorithmError};
pub use crate::grid::{build_grid, Grid};
pub use crate::observer::{NoopObserver, RecordingObserver, StepObserver};
pub use crate::solver::{
    Algorithm, AstarSolver, BfsSolver, DijkstraSolver, GridSolver, SearchResult,
};

/// Rows and columns of the editor grid.
pub const DEFAULT_DIMENSION: usize = 50;
/// Cost of a single move between 4-neighbours.
pub const UNIT_COST: solver::Cost = 1;

/// Runs `algorithm` from `start` to `end`. Adjacency must have been recomputed after the
/// last obstacle edit; the search runs on whatever adjacency the grid currently holds.
///
/// Fails with [GridError::MissingEndpoints] if either endpoint is unset and with
/// [GridError::InvalidCell] if one lies outside the grid, before touching any cell.
pub fn run_search<O: StepObserver>(
    algorithm: Algorithm,
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    observer: &mut O,
) -> Result<SearchResult, GridError> {
    match algorithm {
        Algorithm::BestFirst => AstarSolver::new().get_path_single_goal(grid, start, end, observer),
        Algorithm::UniformCost => DijkstraSolver.get_path_single_goal(grid, start, end, observer),
        Algorithm::BreadthFirst => BfsSolver.get_path_single_goal(grid, start, end, observer),
    }
}

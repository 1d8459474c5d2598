use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::solver::{best_first, Algorithm, GridSolver, SearchResult, TieBreak};

/// Uniform-cost search: expands cells in order of distance from the start, breaking ties by
/// row-major cell index. Optimal without relying on any heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &mut Grid,
        start: usize,
        end: usize,
        observer: &mut O,
    ) -> SearchResult {
        best_first(grid, start, end, observer, |_| 0, TieBreak::CellIndex)
    }
}

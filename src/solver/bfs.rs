use std::collections::VecDeque;

use crate::cell::CellState;
use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::solver::{finish, Algorithm, CostMap, Cost, GridSolver, PredecessorMap, SearchResult};

/// Breadth-first search over a FIFO queue.
///
/// Relies on every move costing the same: the first time a cell gets a finite distance is
/// also the last, so the distance check alone keeps cells from being queued twice and no
/// open-set membership is tracked. Not valid once moves carry different weights.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &mut Grid,
        start: usize,
        end: usize,
        observer: &mut O,
    ) -> SearchResult {
        let mut dist: CostMap<Cost> = CostMap::new(grid.cells().len(), start);
        let mut predecessors = PredecessorMap::default();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return finish(grid, &predecessors, start, end, observer);
            }
            let neighbours = grid.cell_at(current).neighbours.clone();
            for neighbour in neighbours {
                if !dist.is_finite(neighbour) {
                    predecessors.insert(neighbour, current);
                    dist.set(neighbour, dist.get(current) + crate::UNIT_COST);
                    queue.push_back(neighbour);
                    grid.mark(neighbour, CellState::Frontier);
                }
            }
            if !observer.on_step(grid) {
                return SearchResult::Interrupted;
            }
            if current != start {
                grid.mark(current, CellState::Visited);
            }
        }
        SearchResult::NotFound
    }
}

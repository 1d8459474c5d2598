use grid_util::point::Point;

use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::solver::{best_first, manhattan_distance, Algorithm, Cost, GridSolver, SearchResult, TieBreak};

/// Best-first search ordered by `g + h`, with the Manhattan distance as `h` and the
/// insertion counter breaking ties first in, first out.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFirst
    }

    /// Manhattan distance times the heuristic factor. Only admissible while the factor is
    /// at most 1.
    fn heuristic(&self, p1: &Point, p2: &Point) -> Cost {
        (manhattan_distance(p1, p2) as f32 * self.heuristic_factor) as Cost
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &mut Grid,
        start: usize,
        end: usize,
        observer: &mut O,
    ) -> SearchResult {
        let goal = grid.cell_at(end).point();
        let points = grid.cells().iter().map(|c| c.point()).collect::<Vec<_>>();
        best_first(
            grid,
            start,
            end,
            observer,
            |ix| self.heuristic(&points[ix], &goal),
            TieBreak::Insertion,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;
    use crate::grid::build_grid;
    use crate::observer::{NoopObserver, RecordingObserver};

    fn endpoints(grid: &mut Grid, start: (usize, usize), end: (usize, usize)) -> (Point, Point) {
        grid.set_cell_state(start.0, start.1, CellState::Start).unwrap();
        grid.set_cell_state(end.0, end.1, CellState::End).unwrap();
        grid.recompute_adjacency();
        (grid.start().unwrap(), grid.end().unwrap())
    }

    /// Asserts that the optimal 4 step solution around a centre obstacle is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  E|
        let mut grid = build_grid(3);
        grid.set_cell_state(1, 1, CellState::Obstacle).unwrap();
        let (start, end) = endpoints(&mut grid, (0, 0), (2, 2));
        let result = AstarSolver::new()
            .get_path_single_goal(&mut grid, Some(start), Some(end), &mut NoopObserver)
            .unwrap();
        assert_eq!(result.path_length(), Some(4));
        assert_eq!(result.path().unwrap().first(), Some(&start));
        assert_eq!(result.path().unwrap().last(), Some(&end));
    }

    #[test]
    fn equal_start_goal() {
        let mut grid = build_grid(1);
        grid.recompute_adjacency();
        let p = Point::new(0, 0);
        let result = AstarSolver::new()
            .get_path_single_goal(&mut grid, Some(p), Some(p), &mut NoopObserver)
            .unwrap();
        assert_eq!(result, SearchResult::Found(vec![p]));
    }

    #[test]
    fn missing_endpoint_fails_fast() {
        let mut grid = build_grid(3);
        let mut recorder = RecordingObserver::new();
        let result = AstarSolver::new().get_path_single_goal(
            &mut grid,
            Some(Point::new(0, 0)),
            None,
            &mut recorder,
        );
        assert_eq!(result, Err(crate::GridError::MissingEndpoints));
        assert_eq!(recorder.steps(), 0);
    }

    /// Among equal f-scores the earliest inserted cell is expanded first. From the centre of
    /// an open 3x3 grid towards the bottom-right corner, the down neighbour is inserted
    /// before the right one and must be expanded first.
    #[test]
    fn ties_expand_in_insertion_order() {
        let mut grid = build_grid(3);
        let (start, end) = endpoints(&mut grid, (1, 1), (2, 2));
        let mut recorder = RecordingObserver::new();
        let result = AstarSolver::new()
            .get_path_single_goal(&mut grid, Some(start), Some(end), &mut recorder)
            .unwrap();
        assert_eq!(
            result.path().unwrap(),
            &[Point::new(1, 1), Point::new(1, 2), Point::new(2, 2)]
        );
        // The second frame is taken right after expanding (2, 1).
        let second = &recorder.frames[1];
        assert_eq!(second[2 * 3 + 1], CellState::Frontier);
        assert_eq!(second[2 * 3], CellState::Frontier);
    }

    /// Weighted A* still finds a valid path, at most `heuristic_factor` times the shortest.
    #[test]
    fn heuristic_factor() {
        let mut grid = build_grid(8);
        for row in 1..8 {
            grid.set_cell_state(row, 4, CellState::Obstacle).unwrap();
        }
        let (start, end) = endpoints(&mut grid, (7, 0), (7, 7));
        let optimum = crate::solver::BfsSolver
            .get_path_single_goal(&mut grid.clone(), Some(start), Some(end), &mut NoopObserver)
            .unwrap()
            .path_length()
            .unwrap();
        assert_eq!(optimum, 21);

        let solver = AstarSolver {
            heuristic_factor: 2.0,
        };
        let result = solver
            .get_path_single_goal(&mut grid, Some(start), Some(end), &mut NoopObserver)
            .unwrap();
        let path = result.path().unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
        }
        assert!(path.iter().all(|p| p.x != 4 || p.y == 0));
        let length = result.path_length().unwrap();
        assert!(optimum <= length && length <= 2 * optimum);
    }
}

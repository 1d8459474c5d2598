use crate::cell::{Cell, CellState, Neighbours};
use crate::error::GridError;
use crate::DEFAULT_DIMENSION;
use core::fmt;
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;

/// Builds a `dimension` x `dimension` grid with every cell [Free](CellState::Free).
pub fn build_grid(dimension: usize) -> Grid {
    Grid::new(dimension)
}

/// [Grid] is a square, row-major collection of [Cell]s together with the connected
/// components of its free cells, kept in a [UnionFind] structure.
///
/// Adjacency is cached on the cells and is only refreshed by
/// [recompute_adjacency](Self::recompute_adjacency); painting obstacles does not update it.
#[derive(Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(DEFAULT_DIMENSION)
    }
}

impl Grid {
    pub fn new(dimension: usize) -> Grid {
        let cells = iproduct!(0..dimension, 0..dimension)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<_>>();
        let mut grid = Grid {
            dimension,
            cells,
            components: UnionFind::new(dimension * dimension),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        let n = self.dimension as i64;
        row >= 0 && col >= 0 && row < n && col < n
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.dimension && col < self.dimension {
            Ok(row * self.dimension + col)
        } else {
            // Coordinates past i64::MAX are reported as i64::MAX.
            let saturate = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
            Err(GridError::InvalidCell {
                row: saturate(row),
                col: saturate(col),
                dimension: self.dimension,
            })
        }
    }

    /// Row-major index of a [Point] (`x` is the column, `y` the row).
    pub fn point_index(&self, point: &Point) -> Result<usize, GridError> {
        self.checked_index(point.y as i64, point.x as i64)
    }

    fn checked_index(&self, row: i64, col: i64) -> Result<usize, GridError> {
        if self.in_bounds(row, col) {
            Ok(row as usize * self.dimension + col as usize)
        } else {
            Err(GridError::InvalidCell {
                row,
                col,
                dimension: self.dimension,
            })
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let ix = self.index(row, col)?;
        Ok(&self.cells[ix])
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.cell(row, col).map(|c| c.state)
    }

    pub(crate) fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Position of the current [Start](CellState::Start) cell, if any.
    pub fn start(&self) -> Option<Point> {
        self.find_state(CellState::Start)
    }

    /// Position of the current [End](CellState::End) cell, if any.
    pub fn end(&self) -> Option<Point> {
        self.find_state(CellState::End)
    }

    fn find_state(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.state == state)
            .map(|c| c.point())
    }

    /// Sets the state of a cell. Setting [Start](CellState::Start) or [End](CellState::End)
    /// frees the previous holder of that state so at most one of each exists.
    pub fn set_cell_state(
        &mut self,
        row: usize,
        col: usize,
        state: CellState,
    ) -> Result<(), GridError> {
        let ix = self.index(row, col)?;
        self.set_state_at(ix, state);
        Ok(())
    }

    pub(crate) fn set_state_at(&mut self, ix: usize, state: CellState) {
        if matches!(state, CellState::Start | CellState::End) {
            for cell in self.cells.iter_mut().filter(|c| c.state == state) {
                cell.reset();
            }
        }
        let cell = &mut self.cells[ix];
        if cell.is_obstacle() != (state == CellState::Obstacle) {
            self.components_dirty = true;
        }
        cell.state = state;
    }

    /// Search-side marking; never overwrites the painted endpoints.
    pub(crate) fn mark(&mut self, ix: usize, state: CellState) {
        let cell = &mut self.cells[ix];
        if !cell.is_start() && !cell.is_end() {
            cell.state = state;
        }
    }

    /// Applies a primary click: the first click places the start, the second the end and
    /// every later click paints an obstacle. Clicks on the start or end cell are ignored
    /// once both exist.
    pub fn paint(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let ix = self.index(row, col)?;
        let current = self.cells[ix].state;
        let has_start = self.start().is_some();
        let has_end = self.end().is_some();
        let state = if !has_start && current != CellState::End {
            CellState::Start
        } else if !has_end && current != CellState::Start {
            CellState::End
        } else if current != CellState::Start && current != CellState::End {
            CellState::Obstacle
        } else {
            return Ok(current);
        };
        self.set_state_at(ix, state);
        Ok(state)
    }

    /// Applies a secondary click: resets the cell to [Free](CellState::Free), which also
    /// removes the start or end if the cell held one.
    pub fn erase(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.set_cell_state(row, col, CellState::Free)
    }

    /// Replaces every cell with a fresh free cell, dropping obstacles and endpoints.
    pub fn clear(&mut self) {
        *self = Grid::new(self.dimension);
    }

    /// Turns [Frontier](CellState::Frontier), [Visited](CellState::Visited) and
    /// [Path](CellState::Path) cells back into free cells.
    pub fn reset_search_marks(&mut self) {
        self.cells
            .iter_mut()
            .filter(|c| c.state.is_search_mark())
            .for_each(Cell::reset);
    }

    /// Recomputes the 4-neighbourhood of every cell, skipping obstacles. Neighbours are
    /// listed down, up, right, left.
    pub fn recompute_adjacency(&mut self) {
        debug!("Recomputing adjacency for {0}x{0} grid", self.dimension);
        let n = self.dimension;
        for ix in 0..self.cells.len() {
            let (row, col) = (ix / n, ix % n);
            let mut neighbours = Neighbours::new();
            let candidates = [
                (row + 1 < n).then(|| ix + n),
                (row > 0).then(|| ix - n),
                (col + 1 < n).then(|| ix + 1),
                (col > 0).then(|| ix - 1),
            ];
            for nb in candidates.into_iter().flatten() {
                if !self.cells[nb].is_obstacle() {
                    neighbours.push(nb);
                }
            }
            self.cells[ix].neighbours = neighbours;
        }
    }

    /// Alias of [recompute_adjacency](Self::recompute_adjacency).
    pub fn update_neighbors(&mut self) {
        self.recompute_adjacency()
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds points are
    /// unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.point_index(start), self.point_index(goal)) {
            (Ok(start_ix), Ok(goal_ix)) => {
                self.cells[start_ix].is_obstacle()
                    || self.cells[goal_ix].is_obstacle()
                    || !self.components.equiv(start_ix, goal_ix)
            }
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        let n = self.dimension;
        self.components = UnionFind::new(n * n);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..n, 0..n) {
            let ix = row * n + col;
            if self.cells[ix].is_obstacle() {
                continue;
            }
            if row + 1 < n && !self.cells[ix + n].is_obstacle() {
                self.components.union(ix, ix + n);
            }
            if col + 1 < n && !self.cells[ix + 1].is_obstacle() {
                self.components.union(ix, ix + 1);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.dimension.max(1)) {
            writeln!(f, "{}", row.iter().map(|c| c.state.symbol()).join(""))?;
        }
        Ok(())
    }
}

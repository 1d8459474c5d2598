use grid_util::point::Point;
use smallvec::SmallVec;

/// Classification of a single [Cell]. Exactly one state is active at a time.
///
/// [Free](CellState::Free), [Obstacle](CellState::Obstacle), [Start](CellState::Start) and
/// [End](CellState::End) are painted by the user; [Frontier](CellState::Frontier),
/// [Visited](CellState::Visited) and [Path](CellState::Path) are written by the solvers while
/// a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
    Start,
    End,
    /// Discovered but not yet expanded.
    Frontier,
    /// Expanded and removed from the open set.
    Visited,
    Path,
}

impl CellState {
    /// True for the states written by a search run.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }

    /// Single character used by the text rendering of a [Grid](crate::grid::Grid).
    pub fn symbol(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Obstacle => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }
}

/// Cached neighbour indices; a 4-neighbourhood never holds more than four.
pub type Neighbours = SmallVec<[usize; 4]>;

/// One unit of the grid. Neighbours are stored as row-major indices into the owning grid
/// and only reflect the obstacle layout at the last
/// [recompute_adjacency](crate::grid::Grid::recompute_adjacency).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
    pub(crate) neighbours: Neighbours,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            state: CellState::Free,
            neighbours: Neighbours::new(),
        }
    }

    /// Position as a [Point] with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }

    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    pub fn is_obstacle(&self) -> bool {
        self.state == CellState::Obstacle
    }

    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    pub fn reset(&mut self) {
        self.state = CellState::Free;
    }
}

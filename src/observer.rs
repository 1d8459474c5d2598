//! Step observers: the single point at which a running search hands control back to its
//! caller. Each call gets a shared view of the grid so the caller can redraw it, and returns
//! whether the search may continue.
use crate::cell::CellState;
use crate::grid::Grid;

pub trait StepObserver {
    /// Called once per processed node and once per revealed path cell. Returning `false`
    /// interrupts the search.
    fn on_step(&mut self, grid: &Grid) -> bool;
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid) -> bool,
{
    fn on_step(&mut self, grid: &Grid) -> bool {
        self(grid)
    }
}

/// Runs the search to completion without looking at it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _grid: &Grid) -> bool {
        true
    }
}

/// Records a snapshot of every cell state at each step, for headless traces and tests.
/// With `limit` set, asks the search to stop after that many steps.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub frames: Vec<Vec<CellState>>,
    pub limit: Option<usize>,
}

impl RecordingObserver {
    pub fn new() -> RecordingObserver {
        RecordingObserver::default()
    }

    pub fn with_limit(limit: usize) -> RecordingObserver {
        RecordingObserver {
            frames: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn steps(&self) -> usize {
        self.frames.len()
    }
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, grid: &Grid) -> bool {
        self.frames
            .push(grid.cells().iter().map(|c| c.state).collect());
        self.limit.map_or(true, |limit| self.frames.len() < limit)
    }
}

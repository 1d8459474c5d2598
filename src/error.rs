/// Errors returned by [Grid](crate::grid::Grid) accessors and [run_search](crate::run_search).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) lies outside the {dimension}x{dimension} grid")]
    InvalidCell {
        row: i64,
        col: i64,
        dimension: usize,
    },
    #[error("search needs both a start and an end cell")]
    MissingEndpoints,
}

/// Returned when an algorithm name does not match any known solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm `{0}`")]
pub struct ParseAlgorithmError(pub String);

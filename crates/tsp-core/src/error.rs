use thiserror::Error;

/// Why a distance matrix was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("matrix has no rows")]
    Empty,
    #[error("matrix is not an array of rows")]
    NotAnArray,
    #[error("row {row} is not an array")]
    RowNotAnArray { row: usize },
    #[error("entry [{row}][{col}] is not a number")]
    NotNumeric { row: usize, col: usize },
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("diagonal entry [{city}][{city}] is {value}, expected 0")]
    NonZeroDiagonal { city: usize, value: f64 },
    #[error("entry [{row}][{col}] is negative ({value})")]
    Negative { row: usize, col: usize, value: f64 },
    #[error("entry [{row}][{col}] is not finite")]
    NotFinite { row: usize, col: usize },
    #[error("tour lengths over {cities} cities with entries up to {max_entry} overflow")]
    DistanceOverflow { cities: usize, max_entry: f64 },
}

/// Failure inside a solver once it has been handed a valid matrix.
///
/// None of these are caused by bad input; they mean the solver broke its own
/// bookkeeping and the solve must be abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{cities} cities exceeds the solver limit of {max}")]
    TooManyCities { cities: usize, max: usize },
    #[error("optimal tour cost over {cities} cities is not finite")]
    NonFiniteCost { cities: usize },
    #[error("no recorded choice for city {city} with remaining set {remaining:#b}")]
    MissingChoice { city: usize, remaining: u32 },
    #[error("choice {next} for city {city} is not in remaining set {remaining:#b}")]
    ChoiceOutsideRemaining {
        city: usize,
        next: usize,
        remaining: u32,
    },
}

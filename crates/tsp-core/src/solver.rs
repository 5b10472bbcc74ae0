use crate::error::SolveError;
use crate::matrix::DistanceMatrix;
use crate::route::TourSolution;

/// An exact solver for the closed tour through every city of a matrix,
/// starting and ending at city 0.
///
/// Implementations hold no per-solve state: every call builds whatever tables
/// it needs and drops them before returning, so one solver value can serve any
/// number of callers.
pub trait TspSolver {
    /// Human-readable label for the method, reported alongside results.
    fn algorithm(&self) -> &'static str;

    fn solve(&self, matrix: &DistanceMatrix) -> Result<TourSolution, SolveError>;
}

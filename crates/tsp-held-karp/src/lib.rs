//! Exact TSP via Held-Karp dynamic programming.
//!
//! [`solve`] runs one bottom-up pass over all `(city, remaining set)` states
//! ([`compute_optimal`]) and then walks the recorded choices back out
//! ([`reconstruct`]). Both tables are allocated inside the call and dropped
//! before it returns; nothing is shared between solves.
//!
//! Time is `O(n^2 * 2^n)` and memory `O(n * 2^n)`, so callers are expected to
//! cap `n` well below [`tsp_core::MAX_CITIES`].

mod engine;
mod reconstruct;

pub use engine::{compute_optimal, Optimum, StateTable};
pub use reconstruct::reconstruct;

use tsp_core::{DistanceMatrix, Route, SolveError, TourSolution, TspSolver, MAX_CITIES, START_CITY};

pub const ALGORITHM: &str = "Held-Karp Dynamic Programming";

/// Stateless handle implementing [`TspSolver`] with [`solve`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKarp;

impl TspSolver for HeldKarp {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn solve(&self, matrix: &DistanceMatrix) -> Result<TourSolution, SolveError> {
        solve(matrix)
    }
}

/// Returns `true` if `rows` is square, has a zero diagonal and only
/// non-negative finite entries.
pub fn validate(rows: &[Vec<f64>]) -> bool {
    tsp_core::validate(rows)
}

/// Sums that overflowed leave no usable choice in the table; report them as
/// such instead of as a missing state.
fn finite_cost(cost: f64, cities: usize) -> Result<(), SolveError> {
    if cost.is_finite() {
        return Ok(());
    }
    tracing::error!(cities, cost, "tour cost overflowed");
    Err(SolveError::NonFiniteCost { cities })
}

/// Solves `matrix` exactly. The returned distance is the DP optimum.
pub fn solve(matrix: &DistanceMatrix) -> Result<TourSolution, SolveError> {
    let n = matrix.n();
    if n > MAX_CITIES {
        return Err(SolveError::TooManyCities {
            cities: n,
            max: MAX_CITIES,
        });
    }

    match n {
        0 | 1 => Ok(TourSolution {
            route: Route::new(vec![START_CITY]),
            distance: 0.0,
        }),
        2 => {
            let distance = matrix.get(START_CITY, 1) + matrix.get(1, START_CITY);
            finite_cost(distance, n)?;
            Ok(TourSolution {
                route: Route::new(vec![START_CITY, 1, START_CITY]),
                distance,
            })
        }
        _ => {
            let Optimum { cost, table } = compute_optimal(matrix);
            finite_cost(cost, n)?;
            let route = reconstruct(&table).inspect_err(|err| {
                tracing::error!(cities = n, %err, "held-karp reconstruction failed");
            })?;
            Ok(TourSolution {
                route,
                distance: cost,
            })
        }
    }
}

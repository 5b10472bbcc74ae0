//! Exact brute-force TSP solver.
//!
//! Depth-first enumeration of every visiting order of cities `1..n` with
//! branch-and-bound on the partial tour length. Exponential in the worst case
//! and intended only as a ground truth for small instances.

use tsp_core::{CitySet, DistanceMatrix, Route, SolveError, TourSolution, TspSolver, START_CITY};

/// Largest instance the enumeration accepts. `(n-1)!` orders at this size is
/// already several hundred thousand.
pub const MAX_BRUTE_FORCE_CITIES: usize = 10;

pub const ALGORITHM: &str = "Brute-force enumeration";

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl TspSolver for BruteForce {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn solve(&self, matrix: &DistanceMatrix) -> Result<TourSolution, SolveError> {
        solve(matrix)
    }
}

struct Search<'a> {
    matrix: &'a DistanceMatrix,
    path: Vec<usize>,
    best: f64,
    best_path: Vec<usize>,
}

impl Search<'_> {
    fn dfs(&mut self, last: usize, remaining: CitySet, partial: f64) {
        if partial >= self.best {
            return;
        }
        if remaining.is_empty() {
            let total = partial + self.matrix.get(last, START_CITY);
            if total < self.best {
                self.best = total;
                self.best_path.clone_from(&self.path);
            }
            return;
        }
        for next in remaining {
            self.path.push(next);
            self.dfs(next, remaining.without(next), partial + self.matrix.get(last, next));
            self.path.pop();
        }
    }
}

/// Returns the lexicographically smallest optimal tour.
pub fn solve(matrix: &DistanceMatrix) -> Result<TourSolution, SolveError> {
    let n = matrix.n();
    if n > MAX_BRUTE_FORCE_CITIES {
        return Err(SolveError::TooManyCities {
            cities: n,
            max: MAX_BRUTE_FORCE_CITIES,
        });
    }
    if n <= 1 {
        return Ok(TourSolution {
            route: Route::new(vec![START_CITY]),
            distance: 0.0,
        });
    }

    let mut search = Search {
        matrix,
        path: Vec::with_capacity(n - 1),
        best: f64::INFINITY,
        best_path: Vec::new(),
    };
    search.dfs(START_CITY, CitySet::all(n), 0.0);

    let mut route = Vec::with_capacity(n + 1);
    route.push(START_CITY);
    route.extend_from_slice(&search.best_path);
    route.push(START_CITY);

    Ok(TourSolution {
        route: Route::new(route),
        distance: search.best,
    })
}

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceMatrix;
use crate::START_CITY;

/// Closed tour anchored at city 0: `[0, c1, ..., c(n-1), 0]`.
///
/// The single-city tour is the degenerate `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<usize>);

impl Route {
    pub fn new(cities: Vec<usize>) -> Self {
        Route(cities)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Checks that this is a Hamiltonian cycle over `n` cities starting and
    /// ending at city 0.
    pub fn is_hamiltonian_cycle(&self, n: usize) -> bool {
        let cities = &self.0;
        if n <= 1 {
            return cities == &[START_CITY];
        }
        if cities.len() != n + 1 || cities[0] != START_CITY || cities[n] != START_CITY {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &cities[1..n] {
            if c == START_CITY || c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// An optimal tour and its total length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    pub route: Route,
    pub distance: f64,
}

/// Sum of `matrix[a][b]` over every consecutive pair of `cities`.
pub fn tour_length(matrix: &DistanceMatrix, cities: &[usize]) -> f64 {
    cities.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

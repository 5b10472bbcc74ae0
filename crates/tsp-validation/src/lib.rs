//! Cross-checks between the exact solvers on seeded random instances.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{tour_length, DistanceMatrix, MatrixError, SolveError, TspSolver};

/// Seeded source of random integer-valued distance matrices.
pub struct InstanceGenerator {
    rng: Xoshiro256PlusPlus,
    max_distance: u32,
}

impl InstanceGenerator {
    pub fn new(seed: u64, max_distance: u32) -> Self {
        InstanceGenerator {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            max_distance: max_distance.max(1),
        }
    }

    pub fn matrix(&mut self, n: usize, symmetric: bool) -> Result<DistanceMatrix, MatrixError> {
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j || (symmetric && j < i) {
                    continue;
                }
                let d = f64::from(self.rng.gen_range(0..=self.max_distance));
                rows[i][j] = d;
                if symmetric {
                    rows[j][i] = d;
                }
            }
        }
        DistanceMatrix::from_rows(rows)
    }
}

/// Outcome of running a candidate and a reference solver on one instance.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub cities: usize,
    pub candidate: f64,
    pub reference: f64,
    /// Candidate route is a Hamiltonian cycle whose length equals its distance.
    pub route_consistent: bool,
    pub candidate_time: Duration,
    pub reference_time: Duration,
}

impl Comparison {
    pub fn agrees(&self) -> bool {
        self.route_consistent && self.candidate == self.reference
    }

    pub const CSV_HEADER: &'static str =
        "cities,instance,symmetric,candidate,reference,agrees,candidate_us,reference_us";

    pub fn csv_row(&self, instance: usize, symmetric: bool) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.cities,
            instance,
            symmetric,
            self.candidate,
            self.reference,
            self.agrees(),
            self.candidate_time.as_micros(),
            self.reference_time.as_micros()
        )
    }
}

pub fn compare(
    candidate: &impl TspSolver,
    reference: &impl TspSolver,
    matrix: &DistanceMatrix,
) -> Result<Comparison, SolveError> {
    let start = Instant::now();
    let got = candidate.solve(matrix)?;
    let candidate_time = start.elapsed();

    let start = Instant::now();
    let want = reference.solve(matrix)?;
    let reference_time = start.elapsed();

    let route_consistent = got.route.is_hamiltonian_cycle(matrix.n())
        && tour_length(matrix, got.route.as_slice()) == got.distance;

    Ok(Comparison {
        cities: matrix.n(),
        candidate: got.distance,
        reference: want.distance,
        route_consistent,
        candidate_time,
        reference_time,
    })
}

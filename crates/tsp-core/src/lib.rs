//! Shared types and primitives for the exact TSP solvers.
//!
//! Cities are indexed `0..n`. City 0 is the fixed start and end of every tour,
//! so the sets of cities still to visit only ever hold `1..n` and are packed
//! into a [`CitySet`] bitmask.

mod city_set;
mod error;
mod matrix;
mod route;
mod solver;
pub mod validate;

pub use city_set::CitySet;
pub use error::{MatrixError, SolveError};
pub use matrix::DistanceMatrix;
pub use route::{tour_length, Route, TourSolution};
pub use solver::TspSolver;
pub use validate::{validate, validate_value};

/// Largest number of cities any solver in this workspace accepts.
///
/// The remaining-set bitmask has room for more, but the Held-Karp table holds
/// `n * 2^(n-1)` states and grows past a gigabyte shortly after this point.
/// Request-level caps are configured separately and must not exceed it.
pub const MAX_CITIES: usize = 20;

/// The fixed start and end of every tour.
pub const START_CITY: usize = 0;

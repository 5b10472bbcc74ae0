//! Bottom-up Held-Karp over `(current city, remaining set)` states.
//!
//! `cost(c, {})` is the closing leg `matrix[c][0]`, and
//! `cost(c, S) = min over k in S of matrix[c][k] + cost(k, S \ {k})`.
//! Removing a city from a set always yields a numerically smaller bitmask, so
//! sweeping masks in ascending order computes every state after all of the
//! states it depends on, each exactly once.

use tsp_core::{CitySet, DistanceMatrix, START_CITY};

/// Flat `[city][remaining]` table of optimal completion costs and the next
/// city achieving each of them.
///
/// Cells that are unreachable from the initial state `(0, all)` are never
/// written and keep an infinite cost and no choice.
#[derive(Clone, Debug)]
pub struct StateTable {
    n: usize,
    width: usize,
    cost: Vec<f64>,
    next: Vec<Option<u8>>,
}

impl StateTable {
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!(n <= u8::MAX as usize + 1);
        let width = CitySet::count(n);
        let states = n.max(1) * width;
        StateTable {
            n,
            width,
            cost: vec![f64::INFINITY; states],
            next: vec![None; states],
        }
    }

    /// Number of cities the table was built for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of cells, `n * 2^(n-1)`.
    pub fn states(&self) -> usize {
        self.cost.len()
    }

    /// Number of cells holding a computed cost.
    pub fn computed(&self) -> usize {
        self.cost.iter().filter(|c| c.is_finite()).count()
    }

    #[inline(always)]
    fn slot(&self, city: usize, remaining: CitySet) -> usize {
        city * self.width + remaining.index()
    }

    /// Minimum cost to visit every city of `remaining` from `city` and return
    /// to the start, or infinity if the state was never computed.
    #[inline]
    pub fn cost(&self, city: usize, remaining: CitySet) -> f64 {
        self.cost[self.slot(city, remaining)]
    }

    /// The city to visit next from `(city, remaining)` on an optimal tour.
    #[inline]
    pub fn best_next(&self, city: usize, remaining: CitySet) -> Option<usize> {
        self.next
            .get(self.slot(city, remaining))
            .copied()
            .flatten()
            .map(usize::from)
    }

    #[inline]
    pub(crate) fn set(&mut self, city: usize, remaining: CitySet, cost: f64, next: Option<usize>) {
        let slot = self.slot(city, remaining);
        self.cost[slot] = cost;
        // `n` never exceeds `u8::MAX + 1`, so every city index fits.
        self.next[slot] = next.map(|c| c as u8);
    }
}

/// Result of a full Held-Karp pass.
#[derive(Debug)]
pub struct Optimum {
    /// `cost(0, all cities except 0)`: the optimal closed tour length.
    pub cost: f64,
    pub table: StateTable,
}

/// Fills a fresh state table for `matrix` and returns the optimal tour cost.
///
/// The matrix must already be valid; the caller also bounds its size.
pub fn compute_optimal(matrix: &DistanceMatrix) -> Optimum {
    let n = matrix.n();
    let mut table = StateTable::new(n);
    let all = CitySet::all(n);

    if n <= 1 {
        return Optimum { cost: 0.0, table };
    }

    if n == 2 {
        let back = matrix.get(1, START_CITY);
        let cost = matrix.get(START_CITY, 1) + back;
        table.set(1, CitySet::EMPTY, back, None);
        table.set(START_CITY, all, cost, Some(1));
        return Optimum { cost, table };
    }

    for city in 1..n {
        table.set(city, CitySet::EMPTY, matrix.get(city, START_CITY), None);
    }

    // `all` itself is skipped here: no city other than the start lies outside it.
    for bits in 1..all.bits() {
        let remaining = CitySet::from_bits(bits);
        for city in 1..n {
            if remaining.contains(city) {
                continue;
            }
            let (cost, next) = best_step(matrix, &table, city, remaining);
            table.set(city, remaining, cost, next);
        }
    }

    let (cost, next) = best_step(matrix, &table, START_CITY, all);
    table.set(START_CITY, all, cost, next);

    tracing::debug!(
        cities = n,
        states = table.states(),
        computed = table.computed(),
        cost,
        "held-karp table built"
    );

    Optimum { cost, table }
}

/// Cheapest first move out of `(city, remaining)`. Members are scanned in
/// ascending order and only a strictly lower cost replaces the incumbent, so
/// ties go to the lowest city index.
#[inline]
fn best_step(
    matrix: &DistanceMatrix,
    table: &StateTable,
    city: usize,
    remaining: CitySet,
) -> (f64, Option<usize>) {
    let row = matrix.row(city);
    let mut best = (f64::INFINITY, None);
    for next in remaining {
        let cost = row[next] + table.cost(next, remaining.without(next));
        if cost < best.0 {
            best = (cost, Some(next));
        }
    }
    best
}

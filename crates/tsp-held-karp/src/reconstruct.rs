use tsp_core::{CitySet, Route, SolveError, START_CITY};

use crate::engine::StateTable;

/// Walks the recorded choices from `(0, all cities except 0)` until nothing
/// remains, then closes the tour back at city 0.
///
/// A missing or out-of-set choice on the way means the table was built wrong;
/// it aborts the walk instead of returning a shortened route.
pub fn reconstruct(table: &StateTable) -> Result<Route, SolveError> {
    let n = table.n();
    if n <= 1 {
        return Ok(Route::new(vec![START_CITY]));
    }

    let mut route = Vec::with_capacity(n + 1);
    route.push(START_CITY);

    let mut city = START_CITY;
    let mut remaining = CitySet::all(n);
    while !remaining.is_empty() {
        let next = table
            .best_next(city, remaining)
            .ok_or(SolveError::MissingChoice {
                city,
                remaining: remaining.bits(),
            })?;
        if !remaining.contains(next) {
            return Err(SolveError::ChoiceOutsideRemaining {
                city,
                next,
                remaining: remaining.bits(),
            });
        }
        route.push(next);
        remaining = remaining.without(next);
        city = next;
    }

    route.push(START_CITY);
    Ok(Route::new(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_optimal;
    use tsp_core::DistanceMatrix;

    #[test]
    fn follows_choices_and_closes_tour() {
        let m: DistanceMatrix =
            serde_json::from_str("[[0,5,9,10],[5,0,6,7],[9,6,0,8],[10,7,8,0]]").unwrap();
        let route = reconstruct(&compute_optimal(&m).table).unwrap();
        assert_eq!(route.as_slice(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn empty_table_is_an_invariant_violation() {
        let table = StateTable::new(4);
        assert_eq!(
            reconstruct(&table),
            Err(SolveError::MissingChoice {
                city: 0,
                remaining: 0b111
            })
        );
    }

    #[test]
    fn gap_midway_is_not_truncated() {
        let mut table = StateTable::new(4);
        table.set(0, CitySet::all(4), 10.0, Some(2));
        table.set(2, CitySet::from_bits(0b101), 5.0, Some(1));
        // (1, {3}) is missing.
        assert_eq!(
            reconstruct(&table),
            Err(SolveError::MissingChoice {
                city: 1,
                remaining: 0b100
            })
        );
    }

    #[test]
    fn choice_outside_remaining_is_rejected() {
        let mut table = StateTable::new(3);
        table.set(0, CitySet::all(3), 1.0, Some(1));
        table.set(1, CitySet::from_bits(0b10), 1.0, Some(1));
        assert_eq!(
            reconstruct(&table),
            Err(SolveError::ChoiceOutsideRemaining {
                city: 1,
                next: 1,
                remaining: 0b10
            })
        );
    }
}

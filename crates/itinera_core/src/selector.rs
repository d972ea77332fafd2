use thiserror::Error;
use tracing::trace;

use crate::{cost_matrix::CostMatrix, permutations::permutations};

/// A visiting order of the via points, as positions into the request's via
/// list, with the ranking cost of the full chain when one was computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViaOrdering {
    order: Vec<usize>,
    cost: Option<f64>,
}

impl ViaOrdering {
    pub fn new(order: Vec<usize>, cost: Option<f64>) -> Self {
        Self { order, cost }
    }

    /// The vias in the order they were received, without a ranking cost.
    pub fn input_order(num_vias: usize) -> Self {
        Self::new((0..num_vias).collect(), None)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn is_input_order(&self) -> bool {
        self.order.iter().enumerate().all(|(i, &via)| i == via)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("cost matrix covers {actual} locations, expected {expected}")]
    MatrixSize { expected: usize, actual: usize },

    #[error("none of the {0} candidate orderings has a finite cost")]
    NonFiniteCost(usize),
}

/// Whether the via order can change at all.
pub fn should_rank(num_vias: usize, optimize: bool) -> bool {
    optimize && num_vias >= 2
}

/// Chain positions of `[start, vias in order, end]` in a matrix laid out as
/// `[start, via_0 .. via_{n-1}, end]`.
fn chain_path(order: &[usize]) -> Vec<usize> {
    let end = order.len() + 1;

    std::iter::once(0)
        .chain(order.iter().map(|&via| via + 1))
        .chain(std::iter::once(end))
        .collect()
}

/// Picks the cheapest via order according to `matrix`.
///
/// When ranking is not needed (see [`should_rank`]) the input order is
/// returned. Otherwise every ordering is scored and the cheapest wins; on a
/// tie the one generated first is kept.
pub fn select_via_order(
    matrix: &CostMatrix,
    num_vias: usize,
    optimize: bool,
) -> Result<ViaOrdering, SelectionError> {
    let expected = num_vias + 2;
    if matrix.num_locations() != expected {
        return Err(SelectionError::MatrixSize {
            expected,
            actual: matrix.num_locations(),
        });
    }

    if !should_rank(num_vias, optimize) {
        let order: Vec<usize> = (0..num_vias).collect();
        let cost = matrix.path_cost(&chain_path(&order));
        return Ok(ViaOrdering::new(order, Some(cost)));
    }

    let via_positions: Vec<usize> = (0..num_vias).collect();
    let candidates = permutations(&via_positions);
    let num_candidates = candidates.len();
    let mut best: Option<(Vec<usize>, f64)> = None;

    for order in candidates {
        let cost = matrix.path_cost(&chain_path(&order));
        trace!(?order, cost, "scored candidate ordering");

        if !cost.is_finite() {
            continue;
        }

        let improves = match &best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if improves {
            best = Some((order, cost));
        }
    }

    best.map(|(order, cost)| ViaOrdering::new(order, Some(cost)))
        .ok_or(SelectionError::NonFiniteCost(num_candidates))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{kmh::Kmh, metric::Metric, point::RoutePoint};

    fn uniform_matrix(num_locations: usize, cost: f64) -> Vec<Vec<Option<f64>>> {
        (0..num_locations)
            .map(|from| {
                (0..num_locations)
                    .map(|to| Some(if from == to { 0.0 } else { cost }))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn should_keep_single_via_regardless_of_optimize() {
        let matrix = CostMatrix::from_rows(uniform_matrix(3, 1.0)).unwrap();

        for optimize in [true, false] {
            let ordering = select_via_order(&matrix, 1, optimize).unwrap();
            assert_eq!(ordering.order(), &[0]);
            assert_eq!(ordering.cost(), Some(2.0));
        }
    }

    #[test]
    fn should_keep_input_order_when_not_optimizing() {
        let points = [
            RoutePoint::start(33.5, -7.5),
            RoutePoint::via(31.6, -7.9),
            RoutePoint::via(34.0, -6.8),
            RoutePoint::end(35.7, -5.8),
        ];
        let matrix = CostMatrix::from_estimates(&points, Metric::Distance, Kmh::new(50.0));

        let ordering = select_via_order(&matrix, 2, false).unwrap();

        assert!(ordering.is_input_order());
    }

    #[test]
    fn should_reorder_zigzag() {
        // Going start -> far -> near -> end doubles back, the selector must
        // visit the near via first.
        let points = [
            RoutePoint::start(0.0, 0.0),
            RoutePoint::via(0.0, 2.0),
            RoutePoint::via(0.0, 1.0),
            RoutePoint::end(0.0, 3.0),
        ];
        let matrix = CostMatrix::from_estimates(&points, Metric::Distance, Kmh::new(50.0));

        let ordering = select_via_order(&matrix, 2, true).unwrap();

        assert_eq!(ordering.order(), &[1, 0]);
    }

    #[test]
    fn should_break_ties_on_first_generated_ordering() {
        let matrix = CostMatrix::from_rows(uniform_matrix(5, 1.0)).unwrap();

        let ordering = select_via_order(&matrix, 3, true).unwrap();

        assert_eq!(ordering.order(), &[0, 1, 2]);
        assert_eq!(ordering.cost(), Some(4.0));
    }

    #[test]
    fn should_break_ties_deterministically_after_first_candidate() {
        // Starting with via 0 is penalized, the four remaining orderings tie.
        let mut rows = uniform_matrix(5, 1.0);
        rows[0][1] = Some(10.0);
        let matrix = CostMatrix::from_rows(rows).unwrap();

        for _ in 0..10 {
            let ordering = select_via_order(&matrix, 3, true).unwrap();
            assert_eq!(ordering.order(), &[1, 0, 2]);
        }
    }

    #[test]
    fn should_skip_non_finite_candidates() {
        let mut rows = uniform_matrix(4, 1.0);
        rows[0][1] = Some(f64::NAN);
        let matrix = CostMatrix::from_rows(rows).unwrap();

        let ordering = select_via_order(&matrix, 2, true).unwrap();

        assert_eq!(ordering.order(), &[1, 0]);
    }

    #[test]
    fn should_fail_without_finite_candidate() {
        let rows = uniform_matrix(4, f64::INFINITY);
        let matrix = CostMatrix::from_rows(rows).unwrap();

        assert_eq!(
            select_via_order(&matrix, 2, true),
            Err(SelectionError::NonFiniteCost(2))
        );
    }

    #[test]
    fn should_reject_mismatched_matrix() {
        let matrix = CostMatrix::from_rows(uniform_matrix(4, 1.0)).unwrap();

        assert_eq!(
            select_via_order(&matrix, 3, true),
            Err(SelectionError::MatrixSize {
                expected: 5,
                actual: 4
            })
        );
    }

    fn coordinate() -> impl Strategy<Value = (f64, f64)> {
        (-60.0_f64..60.0, -170.0_f64..170.0)
    }

    proptest! {
        #[test]
        fn selected_ordering_is_never_beaten(
            start in coordinate(),
            end in coordinate(),
            vias in prop::collection::vec(coordinate(), 2..=3),
        ) {
            let points: Vec<RoutePoint> = std::iter::once(RoutePoint::start(start.0, start.1))
                .chain(vias.iter().map(|&(lat, lon)| RoutePoint::via(lat, lon)))
                .chain(std::iter::once(RoutePoint::end(end.0, end.1)))
                .collect();
            let matrix = CostMatrix::from_estimates(&points, Metric::Distance, Kmh::new(50.0));

            let selected = select_via_order(&matrix, vias.len(), true).unwrap();
            let selected_cost = selected.cost().unwrap();

            prop_assert_eq!(selected_cost, matrix.path_cost(&chain_path(selected.order())));
            let via_positions: Vec<usize> = (0..vias.len()).collect();
            for order in permutations(&via_positions) {
                prop_assert!(selected_cost <= matrix.path_cost(&chain_path(&order)));
            }
        }

        #[test]
        fn selection_is_deterministic(
            start in coordinate(),
            end in coordinate(),
            vias in prop::collection::vec(coordinate(), 1..=3),
            optimize in any::<bool>(),
        ) {
            let points: Vec<RoutePoint> = std::iter::once(RoutePoint::start(start.0, start.1))
                .chain(vias.iter().map(|&(lat, lon)| RoutePoint::via(lat, lon)))
                .chain(std::iter::once(RoutePoint::end(end.0, end.1)))
                .collect();
            let matrix = CostMatrix::from_estimates(&points, Metric::Duration, Kmh::new(50.0));

            let first = select_via_order(&matrix, vias.len(), optimize).unwrap();
            let second = select_via_order(&matrix, vias.len(), optimize).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}

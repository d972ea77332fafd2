use thiserror::Error;

use crate::{estimator::estimate_cost, kmh::Kmh, metric::Metric, point::RoutePoint};

#[derive(Debug, Error, PartialEq)]
pub enum CostMatrixError {
    #[error("expected a square matrix of {expected} rows, got a row of {actual} values")]
    Shape { expected: usize, actual: usize },

    #[error("no cost between locations {from} and {to}")]
    MissingCost { from: usize, to: usize },
}

/// Pairwise travel costs stored as a flat vector.
/// The cost of going from `from` to `to` is at `from * num_locations + to`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    costs: Vec<f64>,
    num_locations: usize,
}

impl CostMatrix {
    pub fn from_estimates(points: &[RoutePoint], metric: Metric, speed: Kmh) -> Self {
        let num_locations = points.len();
        let mut costs = vec![0.0; num_locations * num_locations];

        for (i, from) in points.iter().enumerate() {
            for (j, to) in points.iter().enumerate() {
                if i != j {
                    costs[i * num_locations + j] = estimate_cost(from, to, metric, speed);
                }
            }
        }

        Self {
            costs,
            num_locations,
        }
    }

    /// Builds a matrix from provider rows, where `None` marks a pair the
    /// provider could not connect.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self, CostMatrixError> {
        let num_locations = rows.len();
        let mut costs = Vec::with_capacity(num_locations * num_locations);

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != num_locations {
                return Err(CostMatrixError::Shape {
                    expected: num_locations,
                    actual: row.len(),
                });
            }

            for (to, cost) in row.into_iter().enumerate() {
                costs.push(cost.ok_or(CostMatrixError::MissingCost { from, to })?);
            }
        }

        Ok(Self {
            costs,
            num_locations,
        })
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.num_locations + to]
    }

    /// Sum of the costs between consecutive locations of `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|pair| self.cost(pair[0], pair[1]))
            .sum()
    }
}

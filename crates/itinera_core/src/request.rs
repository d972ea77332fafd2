use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    metric::Metric,
    point::{Role, RoutePoint},
    profile::Profile,
    selector::ViaOrdering,
};

pub const MIN_POINTS: usize = 3;
pub const MAX_POINTS: usize = 5;
pub const MAX_VIAS: usize = MAX_POINTS - 2;

/// Route request as received on the wire, before validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRequestInput {
    pub points: Vec<RoutePoint>,
    #[serde(default)]
    pub metric: Metric,
    #[serde(default = "default_optimize")]
    pub optimize: bool,
    #[serde(default)]
    pub profile: Profile,
}

fn default_optimize() -> bool {
    true
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("expected between 3 and 5 points, got {0}")]
    PointCount(usize),

    #[error("expected exactly one start point, got {0}")]
    StartCount(usize),

    #[error("expected exactly one end point, got {0}")]
    EndCount(usize),

    #[error("expected between 1 and 3 via points, got {0}")]
    ViaCount(usize),

    #[error("point {index}: latitude {lat} is outside [-90, 90]")]
    Latitude { index: usize, lat: f64 },

    #[error("point {index}: longitude {lon} is outside [-180, 180]")]
    Longitude { index: usize, lon: f64 },
}

/// A validated route request.
///
/// The only way to build one is through [`RouteRequest::new`] (or
/// `TryFrom<RouteRequestInput>`), so everything downstream can rely on
/// exactly one start, exactly one end, one to three vias and coordinates
/// within range.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    points: Vec<RoutePoint>,
    start: usize,
    vias: Vec<usize>,
    end: usize,
    metric: Metric,
    optimize: bool,
    profile: Profile,
}

impl RouteRequest {
    pub fn new(
        points: Vec<RoutePoint>,
        metric: Metric,
        optimize: bool,
        profile: Profile,
    ) -> Result<Self, InvalidInput> {
        if !(MIN_POINTS..=MAX_POINTS).contains(&points.len()) {
            return Err(InvalidInput::PointCount(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            if !(-90.0..=90.0).contains(&point.lat) {
                return Err(InvalidInput::Latitude {
                    index,
                    lat: point.lat,
                });
            }
            if !(-180.0..=180.0).contains(&point.lon) {
                return Err(InvalidInput::Longitude {
                    index,
                    lon: point.lon,
                });
            }
        }

        let indices_of = |role: Role| -> Vec<usize> {
            points
                .iter()
                .enumerate()
                .filter(|(_, point)| point.role == role)
                .map(|(index, _)| index)
                .collect()
        };

        let starts = indices_of(Role::Start);
        let ends = indices_of(Role::End);
        let vias = indices_of(Role::Via);

        let &[start] = starts.as_slice() else {
            return Err(InvalidInput::StartCount(starts.len()));
        };
        let &[end] = ends.as_slice() else {
            return Err(InvalidInput::EndCount(ends.len()));
        };
        if vias.is_empty() || vias.len() > MAX_VIAS {
            return Err(InvalidInput::ViaCount(vias.len()));
        }

        Ok(Self {
            points,
            start,
            vias,
            end,
            metric,
            optimize,
            profile,
        })
    }

    /// Points in the order they were received.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn start(&self) -> &RoutePoint {
        &self.points[self.start]
    }

    pub fn end(&self) -> &RoutePoint {
        &self.points[self.end]
    }

    pub fn vias(&self) -> impl Iterator<Item = &RoutePoint> {
        self.vias.iter().map(|&index| &self.points[index])
    }

    pub fn num_vias(&self) -> usize {
        self.vias.len()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// `[start, vias in input order, end]`, the layout used by cost matrices.
    pub fn chain(&self) -> Vec<RoutePoint> {
        std::iter::once(*self.start())
            .chain(self.vias().copied())
            .chain(std::iter::once(*self.end()))
            .collect()
    }

    /// Input indices of `[start, vias in the given order, end]`.
    pub fn ordered_indices(&self, ordering: &ViaOrdering) -> Vec<usize> {
        std::iter::once(self.start)
            .chain(ordering.order().iter().map(|&via| self.vias[via]))
            .chain(std::iter::once(self.end))
            .collect()
    }

    /// Points of `[start, vias in the given order, end]`.
    pub fn ordered_points(&self, ordering: &ViaOrdering) -> Vec<RoutePoint> {
        self.ordered_indices(ordering)
            .into_iter()
            .map(|index| self.points[index])
            .collect()
    }
}

impl TryFrom<RouteRequestInput> for RouteRequest {
    type Error = InvalidInput;

    fn try_from(input: RouteRequestInput) -> Result<Self, Self::Error> {
        RouteRequest::new(input.points, input.metric, input.optimize, input.profile)
    }
}

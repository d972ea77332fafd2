use geo::LineString;
use jiff::SignedDuration;

use crate::{
    meters::Meters, point::RoutePoint, provider::RouteResult, request::RouteRequest,
    selector::ViaOrdering,
};

/// The final answer for a request: the points in visiting order and the
/// route the provider computed through them.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Start, vias in the selected order, end.
    pub ordered_points: Vec<RoutePoint>,
    /// Position of each ordered point in the request's input.
    pub input_indices: Vec<usize>,
    pub distance: Meters,
    pub duration: SignedDuration,
    pub geometry: LineString<f64>,
    /// Estimated cost used to pick the order, if any ranking took place.
    pub ranking_cost: Option<f64>,
}

impl Itinerary {
    pub fn assemble(request: &RouteRequest, ordering: &ViaOrdering, route: RouteResult) -> Self {
        let input_indices = request.ordered_indices(ordering);
        let ordered_points = input_indices
            .iter()
            .map(|&index| request.points()[index])
            .collect();

        Self {
            ordered_points,
            input_indices,
            distance: route.distance,
            duration: route.duration,
            geometry: route.geometry,
            ranking_cost: ordering.cost(),
        }
    }
}

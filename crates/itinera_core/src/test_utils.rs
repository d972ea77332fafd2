use geo::line_string;
use jiff::SignedDuration;
use parking_lot::Mutex;

use crate::{
    cost_matrix::CostMatrix,
    meters::Meters,
    metric::Metric,
    point::RoutePoint,
    profile::Profile,
    provider::{ProviderError, RouteProvider, RouteResult},
};

pub fn test_route() -> RouteResult {
    RouteResult {
        distance: Meters::new(327_000.0),
        duration: SignedDuration::from_secs(13_500),
        geometry: line_string![
            (x: -7.5898, y: 33.5731),
            (x: -6.8416, y: 34.0209),
            (x: -7.9811, y: 31.6295),
        ],
    }
}

/// Provider returning canned answers and recording what it was asked.
pub struct MockProvider {
    route_response: Result<RouteResult, ProviderError>,
    table_response: Result<CostMatrix, ProviderError>,
    route_calls: Mutex<Vec<Vec<RoutePoint>>>,
    table_calls: Mutex<usize>,
}

impl MockProvider {
    pub fn new(route_response: Result<RouteResult, ProviderError>) -> Self {
        Self {
            route_response,
            table_response: Err(ProviderError::Failed {
                code: None,
                message: "no table configured".to_string(),
            }),
            route_calls: Mutex::new(Vec::new()),
            table_calls: Mutex::new(0),
        }
    }

    pub fn with_table(mut self, table_response: Result<CostMatrix, ProviderError>) -> Self {
        self.table_response = table_response;
        self
    }

    pub fn route_calls(&self) -> Vec<Vec<RoutePoint>> {
        self.route_calls.lock().clone()
    }

    pub fn table_calls(&self) -> usize {
        *self.table_calls.lock()
    }
}

impl RouteProvider for MockProvider {
    type Profile = &'static str;

    fn resolve_profile(&self, profile: Profile) -> Self::Profile {
        match profile {
            Profile::Truck => "driving",
        }
    }

    async fn route(
        &self,
        points: &[RoutePoint],
        _profile: &Self::Profile,
    ) -> Result<RouteResult, ProviderError> {
        self.route_calls.lock().push(points.to_vec());
        self.route_response.clone()
    }

    async fn table(
        &self,
        _points: &[RoutePoint],
        _profile: &Self::Profile,
        _metric: Metric,
    ) -> Result<CostMatrix, ProviderError> {
        *self.table_calls.lock() += 1;
        self.table_response.clone()
    }
}

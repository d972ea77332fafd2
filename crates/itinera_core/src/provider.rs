use std::{fmt, future::Future};

use geo::LineString;
use jiff::SignedDuration;
use thiserror::Error;

use crate::{
    cost_matrix::CostMatrix, meters::Meters, metric::Metric, point::RoutePoint, profile::Profile,
};

/// A route computed by the provider for a fixed sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub distance: Meters,
    pub duration: SignedDuration,
    /// Path of the route, `x` is the longitude and `y` the latitude.
    pub geometry: LineString<f64>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// The provider could not be reached or did not answer in time.
    #[error("routing provider unavailable: {message}")]
    Unavailable { message: String },

    /// The provider answered with a failure or with a payload we cannot use.
    #[error("routing provider error: {message}")]
    Failed {
        code: Option<String>,
        message: String,
    },
}

/// An external routing service.
///
/// Every call is a single attempt; implementations report failures instead
/// of retrying or estimating a result locally.
pub trait RouteProvider: Send + Sync {
    /// Profile identifier understood by the provider.
    type Profile: fmt::Display + Send + Sync;

    /// Maps a domain profile to the provider's identifier. The mapping is
    /// fixed: the same profile always resolves to the same identifier.
    fn resolve_profile(&self, profile: Profile) -> Self::Profile;

    /// Computes the route visiting `points` in exactly the given order.
    fn route(
        &self,
        points: &[RoutePoint],
        profile: &Self::Profile,
    ) -> impl Future<Output = Result<RouteResult, ProviderError>> + Send;

    /// Pairwise travel costs between `points` for `metric`.
    fn table(
        &self,
        points: &[RoutePoint],
        profile: &Self::Profile,
        metric: Metric,
    ) -> impl Future<Output = Result<CostMatrix, ProviderError>> + Send;
}

//! Core of the itinera routing service: picks the visiting order of the
//! intermediate stops of a route and hands the ordered chain to a routing
//! provider.
//!
//! Everything in this crate is pure except the [`provider::RouteProvider`]
//! calls made by [`planner::RoutePlanner`].

pub mod cost_matrix;
pub mod error;
pub mod estimator;
pub mod itinerary;
pub mod kmh;
pub mod meters;
pub mod metric;
pub mod permutations;
pub mod planner;
pub mod point;
pub mod profile;
pub mod provider;
pub mod request;
pub mod selector;

#[cfg(test)]
pub(crate) mod test_utils;

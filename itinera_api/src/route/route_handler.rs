use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use geojson::Geometry;
use itinera_core::itinerary::Itinerary;
use itinera_core::point::RoutePoint;
use itinera_core::provider::RouteProvider;
use itinera_core::request::RouteRequestInput;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    ordered_points: Vec<RoutePoint>,
    ordering_input_indices: Vec<usize>,
    total_distance_meters: f64,
    total_duration_seconds: f64,
    geometry: Geometry,
    provider_profile: String,
}

impl RouteResponse {
    fn new(itinerary: Itinerary, provider_profile: String) -> Self {
        RouteResponse {
            geometry: Geometry::new(geojson::Value::from(&itinerary.geometry)),
            ordered_points: itinerary.ordered_points,
            ordering_input_indices: itinerary.input_indices,
            total_distance_meters: itinerary.distance.value(),
            total_duration_seconds: itinerary.duration.as_secs_f64(),
            provider_profile,
        }
    }
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RouteRequestInput>, JsonRejection>,
) -> Result<Json<RouteResponse>, ApiError> {
    let Json(input) = payload?;

    let provider_profile = state
        .planner
        .provider()
        .resolve_profile(input.profile)
        .to_string();
    let itinerary = state.planner.plan_input(input).await?;

    Ok(Json(RouteResponse::new(itinerary, provider_profile)))
}

use geo_types::{Coord, LineString};
use itinera_core::{
    cost_matrix::CostMatrix, meters::Meters, metric::Metric, provider::RouteResult,
};
use jiff::SignedDuration;
use serde::Deserialize;

use crate::error::OsrmError;

const OSRM_OK: &str = "Ok";

/// Body OSRM sends along with a non-success status.
#[derive(Deserialize)]
pub(crate) struct OsrmErrorBody {
    pub(crate) code: String,
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: Option<f64>,
    /// Seconds
    duration: Option<f64>,
    geometry: Option<OsrmGeometry>,
}

/// GeoJSON line string, `[lon, lat]` pairs.
#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct OsrmTableResponse {
    code: String,
    message: Option<String>,
    distances: Option<Vec<Vec<Option<f64>>>>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

fn ensure_ok(code: String, message: Option<String>) -> Result<(), OsrmError> {
    if code == OSRM_OK {
        return Ok(());
    }

    Err(OsrmError::Api {
        status: 200,
        code: Some(code),
        message: message.unwrap_or_default(),
    })
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, OsrmError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(OsrmError::InvalidValue { field, value })
    }
}

/// Reads the first route of a `/route/v1` answer.
pub(crate) fn parse_route(body: &str) -> Result<RouteResult, OsrmError> {
    let response: OsrmRouteResponse = serde_json::from_str(body)?;
    ensure_ok(response.code, response.message)?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(OsrmError::IncompleteResponse("routes"))?;

    let distance = route
        .distance
        .ok_or(OsrmError::IncompleteResponse("distance"))?;
    let duration = route
        .duration
        .ok_or(OsrmError::IncompleteResponse("duration"))?;
    let geometry = route
        .geometry
        .ok_or(OsrmError::IncompleteResponse("geometry"))?;

    if geometry.coordinates.is_empty() {
        return Err(OsrmError::IncompleteResponse("geometry coordinates"));
    }

    let distance = non_negative("distance", distance)?;
    let seconds = non_negative("duration", duration)?;
    let duration =
        SignedDuration::try_from_secs_f64(seconds).map_err(|_| OsrmError::InvalidValue {
            field: "duration",
            value: seconds,
        })?;

    Ok(RouteResult {
        distance: Meters::new(distance),
        duration,
        geometry: LineString::new(
            geometry
                .coordinates
                .into_iter()
                .map(|[lon, lat]| Coord { x: lon, y: lat })
                .collect(),
        ),
    })
}

/// Reads the matrix of a `/table/v1` answer for `metric`.
pub(crate) fn parse_table(body: &str, metric: Metric) -> Result<CostMatrix, OsrmError> {
    let response: OsrmTableResponse = serde_json::from_str(body)?;
    ensure_ok(response.code, response.message)?;

    let rows = match metric {
        Metric::Distance => response
            .distances
            .ok_or(OsrmError::IncompleteResponse("distances"))?,
        Metric::Duration => response
            .durations
            .ok_or(OsrmError::IncompleteResponse("durations"))?,
    };

    Ok(CostMatrix::from_rows(rows)?)
}

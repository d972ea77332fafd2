use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a point within the requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Start,
    Via,
    End,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Start => "start",
                Role::Via => "via",
                Role::End => "end",
            }
        )
    }
}

/// A WGS84 coordinate tagged with its role in the route.
///
/// Points are `Copy` and expose no setters: once a request has been
/// received its points are never modified, only reordered.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
    pub role: Role,
}

impl RoutePoint {
    pub const fn new(lat: f64, lon: f64, role: Role) -> Self {
        Self { lat, lon, role }
    }

    pub const fn start(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, Role::Start)
    }

    pub const fn via(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, Role::Via)
    }

    pub const fn end(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, Role::End)
    }
}

impl From<&RoutePoint> for geo::Point<f64> {
    fn from(point: &RoutePoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_lowercase_roles() {
        let point: RoutePoint =
            serde_json::from_str(r#"{"lat": 33.5731, "lon": -7.5898, "role": "start"}"#).unwrap();

        assert_eq!(point, RoutePoint::start(33.5731, -7.5898));
    }

    #[test]
    fn should_convert_to_lon_lat_point() {
        let point: geo::Point = (&RoutePoint::via(34.0209, -6.8416)).into();

        assert_eq!(point.x(), -6.8416);
        assert_eq!(point.y(), 34.0209);
    }
}

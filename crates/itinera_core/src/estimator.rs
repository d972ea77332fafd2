//! Straight-line estimates used to rank visiting orders without asking the
//! routing provider.

use geo::{Distance, Haversine};

use crate::{kmh::Kmh, meters::Meters, metric::Metric, point::RoutePoint};

/// Great-circle distance between two points.
pub fn haversine_distance(from: &RoutePoint, to: &RoutePoint) -> Meters {
    let from: geo::Point = from.into();
    let to: geo::Point = to.into();

    Meters::new(Haversine.distance(from, to))
}

/// Estimated cost of travelling from `from` to `to`, in meters for
/// [`Metric::Distance`] and in seconds at a constant `speed` for
/// [`Metric::Duration`].
pub fn estimate_cost(from: &RoutePoint, to: &RoutePoint, metric: Metric, speed: Kmh) -> f64 {
    let distance = haversine_distance(from, to);

    match metric {
        Metric::Distance => distance.value(),
        Metric::Duration => distance.travel_secs(speed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASABLANCA: RoutePoint = RoutePoint::start(33.5731, -7.5898);
    const RABAT: RoutePoint = RoutePoint::via(34.0209, -6.8416);

    #[test]
    fn should_estimate_casablanca_to_rabat() {
        let distance = haversine_distance(&CASABLANCA, &RABAT).value();

        assert!((80_000.0..90_000.0).contains(&distance), "{distance}");
    }

    #[test]
    fn should_be_symmetric_and_zero_on_same_point() {
        assert_eq!(
            haversine_distance(&CASABLANCA, &RABAT),
            haversine_distance(&RABAT, &CASABLANCA)
        );
        assert_eq!(haversine_distance(&RABAT, &RABAT).value(), 0.0);
    }

    #[test]
    fn should_estimate_duration_from_speed() {
        let meters = estimate_cost(&CASABLANCA, &RABAT, Metric::Distance, Kmh::new(50.0));
        let seconds = estimate_cost(&CASABLANCA, &RABAT, Metric::Duration, Kmh::new(50.0));

        assert!((seconds - meters * 3.6 / 50.0).abs() < 1e-6);
    }
}

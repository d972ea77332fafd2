use std::fmt;

use crate::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meters(f64);

impl Meters {
    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Seconds needed to cover this distance at `speed`. Not finite when
    /// `speed` is zero.
    pub fn travel_secs(self, speed: Kmh) -> f64 {
        self.0 * 3.6 / speed.value()
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_travel_time() {
        assert_eq!(Meters::new(50_000.0).travel_secs(Kmh::new(50.0)), 3600.0);
    }

    #[test]
    fn should_not_panic_on_huge_distances() {
        let secs = Meters::new(f64::MAX).travel_secs(Kmh::new(0.5));
        assert!(!secs.is_finite());

        assert!(!Meters::new(10.0).travel_secs(Kmh::new(0.0)).is_finite());
    }

    #[test]
    fn should_display_with_unit() {
        assert_eq!(Meters::new(327512.44).to_string(), "327512.4 m");
    }
}

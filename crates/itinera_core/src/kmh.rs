use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;

/// Constant speed used to turn straight-line distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kmh(f64);

#[derive(Debug, Error, PartialEq)]
pub enum InvalidSpeed {
    #[error("not a number: {0}")]
    NotANumber(#[from] ParseFloatError),

    #[error("speed must be a positive number of km/h, got {0}")]
    NotPositive(f64),
}

impl Kmh {
    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Kmh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

impl FromStr for Kmh {
    type Err = InvalidSpeed;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let speed: f64 = value.trim().parse()?;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(InvalidSpeed::NotPositive(speed));
        }

        Ok(Kmh(speed))
    }
}

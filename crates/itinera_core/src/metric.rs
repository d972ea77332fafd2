use std::fmt;

use serde::{Deserialize, Serialize};

/// Cost used to rank candidate visiting orders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Distance,
    #[serde(alias = "time")]
    Duration,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Metric::Distance => "distance",
                Metric::Duration => "duration",
            }
        )
    }
}

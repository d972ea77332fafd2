use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel profile chosen by the caller.
///
/// Providers translate it to their own identifier through a fixed table,
/// see [`crate::provider::RouteProvider::resolve_profile`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Truck,
}

impl Profile {
    pub const ALL: [Profile; 1] = [Profile::Truck];
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Profile::Truck => "truck",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_unknown_profile() {
        assert!(serde_json::from_str::<Profile>(r#""bicycle""#).is_err());
    }
}

use std::fmt;

use itinera_core::profile::Profile;

/// Profiles of the stock OSRM builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsrmProfile {
    Driving,
    Bike,
    Foot,
}

impl fmt::Display for OsrmProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OsrmProfile::Driving => "driving",
                OsrmProfile::Bike => "bike",
                OsrmProfile::Foot => "foot",
            }
        )
    }
}

/// Domain profile to OSRM profile.
///
/// Public OSRM servers have no truck profile, trucks are routed as cars.
impl From<Profile> for OsrmProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Truck => OsrmProfile::Driving,
        }
    }
}

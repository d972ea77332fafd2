//! OSRM implementation of [`itinera_core::provider::RouteProvider`].

pub mod client;
pub mod error;
pub mod profile;
mod response;

pub use client::{OsrmClient, OsrmClientParams, Overview, UnknownOverview};
pub use error::OsrmError;
pub use profile::OsrmProfile;
